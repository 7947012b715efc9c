//! Player progress and the in-scenario attempt.
//!
//! [`PlayerProgress`] is the durable record: recorded scores, unlocked
//! worlds, tutorial flags. It serializes in camelCase to stay readable
//! by save files written by earlier builds. [`Attempt`] is the
//! ephemeral board state for one scenario and never touches disk.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, Catalog, Scenario, ScenarioId, World, WorldId};
use crate::error::ClashError;
use crate::scoring::{score_solution, PathMatching, Verdict};

/// Recorded score at or above which a scenario counts as passed for
/// unlocking whatever comes next.
pub const UNLOCK_THRESHOLD: u32 = 80;

/// Completion record for one scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedScenario {
    /// The most recently recorded score, not the best one.
    pub score: u32,
}

/// The durable progress blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProgress {
    /// Last recorded score per scenario.
    pub completed_scenarios: BTreeMap<ScenarioId, CompletedScenario>,
    /// Worlds the player may enter.
    pub unlocked_worlds: BTreeSet<WorldId>,
    /// Whether the gameplay tutorial has been finished.
    pub tutorial_completed: bool,
    /// Whether the math tutorial has been finished.
    pub math_tutorial_completed: bool,
}

impl PlayerProgress {
    /// Fresh progress for a catalog: nothing completed, the first world
    /// unlocked.
    pub fn for_catalog(catalog: &Catalog) -> PlayerProgress {
        let mut progress = PlayerProgress::default();
        progress.ensure_baseline(catalog);
        progress
    }

    /// Re-establishes the invariant that the catalog's first world is
    /// unlocked. Applied to every loaded blob, so a save written
    /// against an older content pack still opens somewhere.
    pub fn ensure_baseline(&mut self, catalog: &Catalog) {
        self.unlocked_worlds.insert(catalog.first_world().id.clone());
    }

    /// Records a completion, overwriting any previous score for the
    /// scenario. A worse replay therefore lowers the record.
    pub fn record_completion(&mut self, scenario_id: &str, score: u32) {
        log::info!("[PROGRESS] completed scenario={scenario_id} score={score}");
        self.completed_scenarios
            .insert(scenario_id.to_string(), CompletedScenario { score });
    }

    /// Unlocks a world. Returns `true` only the first time.
    pub fn unlock_world(&mut self, world_id: &str) -> bool {
        let newly = self.unlocked_worlds.insert(world_id.to_string());
        if newly {
            log::info!("[PROGRESS] unlocked world={world_id}");
        }
        newly
    }

    /// The recorded score for a scenario, if it has ever been submitted.
    pub fn score_for(&self, scenario_id: &str) -> Option<u32> {
        self.completed_scenarios.get(scenario_id).map(|c| c.score)
    }

    /// Whether the recorded score passes the unlock threshold.
    pub fn is_passed(&self, scenario_id: &str) -> bool {
        self.score_for(scenario_id)
            .is_some_and(|score| score >= UNLOCK_THRESHOLD)
    }

    /// Whether a world may be entered.
    pub fn is_world_unlocked(&self, world_id: &str) -> bool {
        self.unlocked_worlds.contains(world_id)
    }

    /// Whether a scenario may be started: its world must be unlocked,
    /// and any predecessor in the world must have passed the threshold.
    pub fn is_scenario_unlocked(&self, catalog: &Catalog, scenario_id: &str) -> bool {
        let Some(world) = catalog.world_of(scenario_id) else {
            return false;
        };
        if !self.is_world_unlocked(&world.id) {
            return false;
        }
        match catalog.predecessor_in_world(scenario_id) {
            None => true,
            Some(prev) => self.is_passed(&prev.id),
        }
    }

    /// Whether every scenario of the world has passed the threshold.
    pub fn is_world_complete(&self, world: &World) -> bool {
        world.scenarios.iter().all(|s| self.is_passed(&s.id))
    }
}

/// Board state for one scenario in progress.
///
/// All transitions validate their preconditions and fail with a typed
/// error instead of silently ignoring bad input. Hints are counted
/// here but capped by the caller; the count survives a board reset so
/// retries cannot shed the penalty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    scenario_id: ScenarioId,
    placed: Vec<Option<CardId>>,
    selected_card: Option<CardId>,
    hints_used: u32,
    hinted_stages: BTreeSet<usize>,
    score: u32,
    feedback: Option<String>,
    submitted: bool,
}

impl Attempt {
    /// Opens a fresh board for the scenario, one empty slot per stage.
    pub fn start(scenario: &Scenario) -> Attempt {
        log::info!("[ATTEMPT] start scenario={}", scenario.id);
        Attempt {
            scenario_id: scenario.id.clone(),
            placed: vec![None; scenario.stages.len()],
            selected_card: None,
            hints_used: 0,
            hinted_stages: BTreeSet::new(),
            score: 0,
            feedback: None,
            submitted: false,
        }
    }

    /// Id of the scenario this attempt belongs to.
    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    /// The board, one entry per stage in stage order.
    pub fn placed(&self) -> &[Option<CardId>] {
        &self.placed
    }

    /// The card currently picked up, if any.
    pub fn selected_card(&self) -> Option<&str> {
        self.selected_card.as_deref()
    }

    /// Hints taken so far in this attempt.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Score of the last submission, zero before any.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Feedback of the last submission.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Whether this attempt has been submitted at least once.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Picks a card up. Selection is unvalidated here; whether the card
    /// is actually in the scenario's hand is checked by the caller.
    pub fn select_card(&mut self, card: CardId) {
        self.selected_card = Some(card);
    }

    /// Puts any picked-up card back down.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Places a card onto an empty stage, consuming the selection.
    pub fn place_card(&mut self, stage: usize, card: CardId) -> Result<(), ClashError> {
        let slot = self.slot_mut(stage)?;
        if slot.is_some() {
            return Err(ClashError::SlotOccupied(stage));
        }
        *slot = Some(card);
        self.selected_card = None;
        Ok(())
    }

    /// Places the selected card onto a stage.
    pub fn place_selected(&mut self, stage: usize) -> Result<(), ClashError> {
        let card = self
            .selected_card
            .clone()
            .ok_or(ClashError::NothingSelected)?;
        self.place_card(stage, card)
    }

    /// Clears a stage, returning the card that was there.
    pub fn remove_card(&mut self, stage: usize) -> Result<CardId, ClashError> {
        let slot = self.slot_mut(stage)?;
        slot.take().ok_or(ClashError::SlotEmpty(stage))
    }

    /// Counts a hint. Unconditional; the hint budget lives with the
    /// caller.
    pub fn use_hint(&mut self) -> u32 {
        self.hints_used += 1;
        self.hints_used
    }

    /// Marks a stage as having had its hint revealed. Returns `false`
    /// if it already was, in which case no new hint should be charged.
    pub fn mark_stage_hinted(&mut self, stage: usize) -> bool {
        self.hinted_stages.insert(stage)
    }

    /// Whether a stage's hint has already been revealed.
    pub fn stage_hinted(&self, stage: usize) -> bool {
        self.hinted_stages.contains(&stage)
    }

    /// True when every stage holds a card.
    pub fn all_stages_filled(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// Indices of stages still empty, in order.
    pub fn empty_stages(&self) -> Vec<usize> {
        self.placed
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    /// Clears the board and verdict for a retry. The hint count and
    /// hinted stages survive, so the retry still carries the penalty.
    pub fn reset(&mut self) {
        for slot in &mut self.placed {
            *slot = None;
        }
        self.selected_card = None;
        self.score = 0;
        self.feedback = None;
        self.submitted = false;
    }

    /// Scores the board. Fails with the list of empty stages if the
    /// board is incomplete. Submitting again with an unchanged board
    /// yields the identical verdict.
    pub fn submit(
        &mut self,
        scenario: &Scenario,
        matching: PathMatching,
    ) -> Result<Verdict, ClashError> {
        debug_assert_eq!(scenario.id, self.scenario_id);
        let empty = self.empty_stages();
        if !empty.is_empty() {
            return Err(ClashError::IncompleteSolution(empty));
        }
        let verdict = score_solution(scenario, &self.placed, self.hints_used, matching);
        self.score = verdict.score;
        self.feedback = Some(verdict.feedback.clone());
        self.submitted = true;
        Ok(verdict)
    }

    fn slot_mut(&mut self, stage: usize) -> Result<&mut Option<CardId>, ClashError> {
        let stage_count = self.placed.len();
        self.placed.get_mut(stage).ok_or(ClashError::InvalidStage {
            index: stage,
            stage_count,
        })
    }
}
