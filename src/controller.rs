//! Screen controller: the single owner of game state.
//!
//! One [`GameController`] owns the catalog, the player's progress, the
//! backing store, and the attempt in flight. Every mutation flows
//! through a method that validates first and fails with a typed error,
//! so a frontend can stay a dumb renderer of whatever state it is
//! handed. Nothing here is global: hosts build one controller per
//! profile and drop it when the session ends.

use std::time::{Duration, Instant};

use crate::catalog::{CardId, Catalog, Scenario, ScenarioId, World, WorldId};
use crate::error::ClashError;
use crate::pacing::Ticker;
use crate::progress::{Attempt, PlayerProgress, UNLOCK_THRESHOLD};
use crate::scoring::{FeedbackTier, PathMatching};
use crate::store::ProgressStore;

/// Hints available per attempt.
pub const HINT_LIMIT: u32 = 3;

/// How long the verdict stays up before a passed scenario advances.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// The screen a frontend should be rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Title menu.
    MainMenu,
    /// Grid of worlds with lock state.
    WorldSelection,
    /// Scenario list of one world.
    ScenarioSelection(WorldId),
    /// The solution board of the active scenario.
    Gameplay(ScenarioId),
    /// The gameplay walkthrough.
    Tutorial,
    /// The guided math tutorial.
    MathTutorial,
    /// Celebration shown when a world's last scenario is passed.
    WorldCompletion(WorldId),
    /// About and credits.
    About,
    /// Roadmap of planned content.
    ExpansionPlan,
}

/// What the game does after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The world is finished and the completion screen is up.
    WorldComplete {
        /// The finished world.
        world: WorldId,
        /// The world after it in catalog order, now unlocked, if any.
        unlocked_next: Option<WorldId>,
    },
    /// The next scenario opens by itself after `delay`.
    NextScenario {
        /// Scenario that will open.
        scenario: ScenarioId,
        /// How long the verdict stays up first.
        delay: Duration,
    },
    /// Nothing advances; retry or navigate away.
    Stay,
}

/// Verdict plus what happens next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Final score, 0 to 100.
    pub score: u32,
    /// Tier the score falls into.
    pub tier: FeedbackTier,
    /// The scenario's feedback line for that tier.
    pub feedback: String,
    /// What the game does next.
    pub advance: Advance,
}

/// One world with its presentation state.
#[derive(Clone, Copy, Debug)]
pub struct WorldSummary<'a> {
    /// The world itself.
    pub world: &'a World,
    /// Whether it may be entered.
    pub unlocked: bool,
    /// Whether every scenario in it has passed the threshold.
    pub completed: bool,
}

/// One scenario with its presentation state.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioSummary<'a> {
    /// The scenario itself.
    pub scenario: &'a Scenario,
    /// Whether it may be started.
    pub unlocked: bool,
    /// Last recorded score, if any.
    pub score: Option<u32>,
}

/// A revealed hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintView {
    /// Stage the hint is about.
    pub stage_index: usize,
    /// The stage's prompt, restated for display.
    pub prompt: String,
    /// A card that earns full credit on this stage, when one is named.
    pub suggested_card: Option<CardId>,
    /// Whether this reveal consumed one of the attempt's hints.
    pub charged: bool,
    /// Hints used after this reveal.
    pub hints_used: u32,
}

#[derive(Debug)]
struct PendingAdvance {
    scenario: ScenarioId,
    ticker: Ticker,
}

/// Owns and sequences all game state for one profile.
pub struct GameController {
    catalog: Catalog,
    progress: PlayerProgress,
    store: Box<dyn ProgressStore>,
    namespace: String,
    matching: PathMatching,
    screen: Screen,
    attempt: Option<Attempt>,
    pending: Option<PendingAdvance>,
}

impl GameController {
    /// Builds a controller for one profile, loading any saved progress
    /// from the store and re-establishing the first-world baseline.
    pub fn new(
        catalog: Catalog,
        store: Box<dyn ProgressStore>,
        namespace: impl Into<String>,
        matching: PathMatching,
    ) -> Result<GameController, ClashError> {
        let namespace = namespace.into();
        let mut progress = match store.load(&namespace)? {
            Some(loaded) => {
                log::info!("[GAME] loaded profile `{namespace}`");
                loaded
            }
            None => {
                log::info!("[GAME] fresh profile `{namespace}`");
                PlayerProgress::default()
            }
        };
        progress.ensure_baseline(&catalog);
        Ok(GameController {
            catalog,
            progress,
            store,
            namespace,
            matching,
            screen: Screen::MainMenu,
            attempt: None,
            pending: None,
        })
    }

    /// The catalog this controller plays.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The player's progress record.
    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// The attempt in flight, if a scenario is open.
    pub fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    /// The screen a frontend should render.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The path-matching mode this controller scores with.
    pub fn matching(&self) -> PathMatching {
        self.matching
    }

    /// The scenario of the attempt in flight.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        let attempt = self.attempt.as_ref()?;
        self.catalog.scenario(attempt.scenario_id())
    }

    /// Writes the progress blob to the store.
    pub fn persist(&mut self) -> Result<(), ClashError> {
        self.store.save(&self.namespace, &self.progress)
    }

    // ---- navigation ----------------------------------------------------

    /// Returns to the title menu, abandoning any attempt in flight.
    pub fn go_to_main_menu(&mut self) {
        self.cancel_pending();
        self.attempt = None;
        self.screen = Screen::MainMenu;
    }

    /// Opens the world grid.
    pub fn open_world_selection(&mut self) {
        self.cancel_pending();
        self.screen = Screen::WorldSelection;
    }

    /// Opens the scenario list of an unlocked world.
    pub fn select_world(&mut self, world_id: &str) -> Result<(), ClashError> {
        let world = self
            .catalog
            .world(world_id)
            .ok_or_else(|| ClashError::UnknownWorld(world_id.to_string()))?;
        if !self.progress.is_world_unlocked(&world.id) {
            return Err(ClashError::WorldLocked(world.id.clone()));
        }
        let id = world.id.clone();
        self.cancel_pending();
        self.screen = Screen::ScenarioSelection(id);
        Ok(())
    }

    /// Opens the about screen.
    pub fn open_about(&mut self) {
        self.cancel_pending();
        self.screen = Screen::About;
    }

    /// Opens the roadmap screen.
    pub fn open_expansion_plan(&mut self) {
        self.cancel_pending();
        self.screen = Screen::ExpansionPlan;
    }

    /// Opens the gameplay walkthrough.
    pub fn open_tutorial(&mut self) {
        self.cancel_pending();
        self.screen = Screen::Tutorial;
    }

    /// Marks the gameplay walkthrough finished and persists the flag.
    pub fn finish_tutorial(&mut self) -> Result<(), ClashError> {
        self.progress.tutorial_completed = true;
        self.persist()?;
        self.screen = Screen::MainMenu;
        Ok(())
    }

    /// Opens the math tutorial.
    pub fn open_math_tutorial(&mut self) {
        self.cancel_pending();
        self.screen = Screen::MathTutorial;
    }

    /// Marks the math tutorial finished and persists the flag.
    pub fn finish_math_tutorial(&mut self) -> Result<(), ClashError> {
        self.progress.math_tutorial_completed = true;
        self.persist()?;
        self.screen = Screen::MainMenu;
        Ok(())
    }

    /// Steps one screen back: gameplay to its scenario list, scenario
    /// list to the world grid, completion to the next open world's
    /// list, everything else to the title menu. Leaving gameplay
    /// abandons the attempt.
    pub fn go_back(&mut self) {
        self.cancel_pending();
        let next = match &self.screen {
            Screen::Gameplay(scenario_id) => match self.catalog.world_of(scenario_id) {
                Some(world) => Screen::ScenarioSelection(world.id.clone()),
                None => Screen::WorldSelection,
            },
            Screen::ScenarioSelection(_) => Screen::WorldSelection,
            Screen::WorldCompletion(world_id) => match self.catalog.next_world_after(world_id) {
                Some(next) if self.progress.is_world_unlocked(&next.id) => {
                    Screen::ScenarioSelection(next.id.clone())
                }
                _ => Screen::WorldSelection,
            },
            Screen::MainMenu => Screen::MainMenu,
            _ => Screen::MainMenu,
        };
        if matches!(self.screen, Screen::Gameplay(_)) {
            self.attempt = None;
        }
        self.screen = next;
    }

    /// All worlds with their lock and completion state, in play order.
    pub fn world_summaries(&self) -> Vec<WorldSummary<'_>> {
        self.catalog
            .worlds()
            .iter()
            .map(|world| WorldSummary {
                unlocked: self.progress.is_world_unlocked(&world.id),
                completed: self.progress.is_world_complete(world),
                world,
            })
            .collect()
    }

    /// One world's scenarios with their lock state and recorded scores.
    pub fn scenario_summaries(&self, world_id: &str) -> Result<Vec<ScenarioSummary<'_>>, ClashError> {
        let world = self
            .catalog
            .world(world_id)
            .ok_or_else(|| ClashError::UnknownWorld(world_id.to_string()))?;
        Ok(world
            .scenarios
            .iter()
            .map(|scenario| ScenarioSummary {
                unlocked: self.progress.is_scenario_unlocked(&self.catalog, &scenario.id),
                score: self.progress.score_for(&scenario.id),
                scenario,
            })
            .collect())
    }

    // ---- gameplay ------------------------------------------------------

    /// Starts a scenario: checks locks, opens a fresh board, and moves
    /// to the gameplay screen.
    pub fn start_scenario(&mut self, scenario_id: &str) -> Result<(), ClashError> {
        let world = self
            .catalog
            .world_of(scenario_id)
            .ok_or_else(|| ClashError::UnknownScenario(scenario_id.to_string()))?;
        if !self.progress.is_world_unlocked(&world.id) {
            return Err(ClashError::WorldLocked(world.id.clone()));
        }
        if !self.progress.is_scenario_unlocked(&self.catalog, scenario_id) {
            return Err(ClashError::ScenarioLocked(scenario_id.to_string()));
        }
        let scenario = self
            .catalog
            .scenario(scenario_id)
            .ok_or_else(|| ClashError::UnknownScenario(scenario_id.to_string()))?;
        let attempt = Attempt::start(scenario);
        self.cancel_pending();
        self.attempt = Some(attempt);
        self.screen = Screen::Gameplay(scenario_id.to_string());
        Ok(())
    }

    /// Picks a card up. The card must exist and be in the scenario's
    /// hand.
    pub fn select_card(&mut self, card_id: &str) -> Result<(), ClashError> {
        self.check_card_in_hand(card_id)?;
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        attempt.select_card(card_id.to_string());
        Ok(())
    }

    /// Places a card onto an empty stage. The card must exist and be in
    /// the scenario's hand.
    pub fn place_card(&mut self, stage: usize, card_id: &str) -> Result<(), ClashError> {
        self.check_card_in_hand(card_id)?;
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        attempt.place_card(stage, card_id.to_string())
    }

    /// Places the selected card onto a stage.
    pub fn place_selected_card(&mut self, stage: usize) -> Result<(), ClashError> {
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        attempt.place_selected(stage)
    }

    /// Clears a stage and returns the card that was there.
    pub fn remove_card(&mut self, stage: usize) -> Result<CardId, ClashError> {
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        attempt.remove_card(stage)
    }

    /// True when every stage of the active board holds a card.
    pub fn all_stages_filled(&self) -> bool {
        self.attempt
            .as_ref()
            .map(Attempt::all_stages_filled)
            .unwrap_or(false)
    }

    /// Clears the board for a retry. Hint debt stays.
    pub fn reset_attempt(&mut self) -> Result<(), ClashError> {
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        attempt.reset();
        log::info!("[ATTEMPT] reset scenario={}", attempt.scenario_id());
        Ok(())
    }

    /// Reveals the hint for a stage.
    ///
    /// The first reveal of a stage consumes one of the attempt's
    /// [`HINT_LIMIT`] hints; revisiting an already-revealed stage is
    /// free. Fails with [`ClashError::HintLimit`] once the budget is
    /// spent.
    pub fn reveal_hint(&mut self, stage: usize) -> Result<HintView, ClashError> {
        let attempt = self.attempt.as_ref().ok_or(ClashError::NoActiveScenario)?;
        let scenario = self
            .catalog
            .scenario(attempt.scenario_id())
            .ok_or_else(|| ClashError::UnknownScenario(attempt.scenario_id().to_string()))?;
        let stage_count = scenario.stages.len();
        let stage_ref = scenario.stages.get(stage).ok_or(ClashError::InvalidStage {
            index: stage,
            stage_count,
        })?;
        let prompt = stage_ref.prompt.clone();
        let suggested_card = stage_ref.optimal_cards.iter().next().cloned();

        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        if attempt.stage_hinted(stage) {
            return Ok(HintView {
                stage_index: stage,
                prompt,
                suggested_card,
                charged: false,
                hints_used: attempt.hints_used(),
            });
        }
        if attempt.hints_used() >= HINT_LIMIT {
            return Err(ClashError::HintLimit);
        }
        attempt.mark_stage_hinted(stage);
        let hints_used = attempt.use_hint();
        log::info!("[HINT] stage={stage} hints_used={hints_used}");
        Ok(HintView {
            stage_index: stage,
            prompt,
            suggested_card,
            charged: true,
            hints_used,
        })
    }

    /// Scores the board, records the result, and works out what the
    /// game does next.
    ///
    /// A score at or above [`UNLOCK_THRESHOLD`] either finishes the
    /// world (last scenario, every other scenario also passed) or arms
    /// a delayed advance to the next scenario. Completion is recorded
    /// and persisted in every case, including failures.
    pub fn submit_solution(&mut self) -> Result<SubmitOutcome, ClashError> {
        let attempt = self.attempt.as_mut().ok_or(ClashError::NoActiveScenario)?;
        let scenario_id = attempt.scenario_id().to_string();
        let scenario = self
            .catalog
            .scenario(&scenario_id)
            .ok_or_else(|| ClashError::UnknownScenario(scenario_id.clone()))?;
        let verdict = attempt.submit(scenario, self.matching)?;
        self.progress.record_completion(&scenario_id, verdict.score);

        let passed = verdict.score >= UNLOCK_THRESHOLD;
        let world = self
            .catalog
            .world_of(&scenario_id)
            .ok_or_else(|| ClashError::UnknownScenario(scenario_id.clone()))?;
        let advance = if passed
            && self.catalog.is_last_in_world(&scenario_id)
            && self.progress.is_world_complete(world)
        {
            let unlocked_next = match self.catalog.next_world_after(&world.id) {
                Some(next) => {
                    self.progress.unlock_world(&next.id);
                    Some(next.id.clone())
                }
                None => None,
            };
            let world_id = world.id.clone();
            self.screen = Screen::WorldCompletion(world_id.clone());
            Advance::WorldComplete {
                world: world_id,
                unlocked_next,
            }
        } else if passed {
            match self.catalog.next_in_world(&scenario_id) {
                Some(next) => {
                    let next_id = next.id.clone();
                    self.pending = Some(PendingAdvance {
                        scenario: next_id.clone(),
                        ticker: Ticker::once(ADVANCE_DELAY),
                    });
                    Advance::NextScenario {
                        scenario: next_id,
                        delay: ADVANCE_DELAY,
                    }
                }
                // Last in the world, but an earlier scenario has since
                // been replayed below the bar.
                None => Advance::Stay,
            }
        } else {
            Advance::Stay
        };
        self.persist()?;
        log::info!(
            "[GAME] submit scenario={scenario_id} score={} advance={advance:?}",
            verdict.score
        );
        Ok(SubmitOutcome {
            score: verdict.score,
            tier: verdict.tier,
            feedback: verdict.feedback,
            advance,
        })
    }

    // ---- pacing --------------------------------------------------------

    /// Whether a delayed advance is armed.
    pub fn has_pending_advance(&self) -> bool {
        self.pending
            .as_ref()
            .map(|p| p.ticker.is_active())
            .unwrap_or(false)
    }

    /// Cancels any armed advance, keeping the player where they are.
    pub fn cancel_auto_advance(&mut self) {
        self.cancel_pending();
    }

    /// Fires the delayed advance if its time has come, starting the
    /// next scenario. Returns the scenario that was opened, if any.
    pub fn poll_auto_advance(&mut self, now: Instant) -> Result<Option<ScenarioId>, ClashError> {
        let fire = match self.pending.as_mut() {
            Some(pending) => pending.ticker.due(now) > 0,
            None => false,
        };
        if !fire {
            return Ok(None);
        }
        if let Some(pending) = self.pending.take() {
            self.start_scenario(&pending.scenario)?;
            return Ok(Some(pending.scenario));
        }
        Ok(None)
    }

    fn cancel_pending(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.ticker.cancel();
            log::debug!("[GAME] cancelled advance to {}", pending.scenario);
        }
    }

    fn check_card_in_hand(&self, card_id: &str) -> Result<(), ClashError> {
        let attempt = self.attempt.as_ref().ok_or(ClashError::NoActiveScenario)?;
        let scenario = self
            .catalog
            .scenario(attempt.scenario_id())
            .ok_or_else(|| ClashError::UnknownScenario(attempt.scenario_id().to_string()))?;
        if self.catalog.card(card_id).is_none() {
            return Err(ClashError::UnknownCard(card_id.to_string()));
        }
        if !scenario.available_cards.iter().any(|c| c == card_id) {
            return Err(ClashError::CardNotAvailable {
                card: card_id.to_string(),
                scenario: scenario.id.clone(),
            });
        }
        Ok(())
    }
}
