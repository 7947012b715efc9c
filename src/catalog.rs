//! Catalog content: cards, scenarios, and worlds.
//!
//! Content ships as JSON authored in camelCase, including two legacy
//! shapes that predate the current format (a singular `optimalCard`
//! field on stages, and three-bucket `feedbackMessages` instead of
//! four-bucket `feedbackContent`). Everything is normalized into the
//! canonical types here at load time, so the rest of the engine never
//! branches on content vintage.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a technology card in the card table.
pub type CardId = String;
/// Identifier of a scenario within a world.
pub type ScenarioId = String;
/// Identifier of a world within the catalog.
pub type WorldId = String;

/// A technology card the player can place into scenario stages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Stable id referenced by scenarios.
    pub id: CardId,
    /// Display name.
    pub name: String,
    /// Coarse grouping such as `"hash"` or `"proof-system"`.
    pub category: String,
    /// One-paragraph description of what the primitive does.
    pub summary: String,
    /// Named 0-100 ratings shown on the card face.
    pub attributes: BTreeMap<String, u8>,
}

/// One slot of a scenario's solution board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Stable id, used for hint bookkeeping.
    pub id: String,
    /// The question this stage asks the player to answer with a card.
    pub prompt: String,
    /// Cards that earn partial credit here.
    pub acceptable_cards: Vec<CardId>,
    /// Cards that earn full credit here. Never empty after loading.
    pub optimal_cards: BTreeSet<CardId>,
}

/// A complete non-optimal solution the designers considered worth
/// rewarding with its own effectiveness score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlternativePath {
    /// Card ids in stage order.
    pub path: Vec<CardId>,
    /// Score awarded when the submission matches this path exactly.
    pub effectiveness_score: u8,
}

/// Feedback text for each verdict tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackContent {
    /// Shown for scores of 90 and above.
    pub optimal: String,
    /// Shown for scores of 70 to 89.
    pub good: String,
    /// Shown for scores of 50 to 69.
    pub suboptimal: String,
    /// Shown for scores below 50.
    pub incorrect: String,
}

/// Per-scenario completion bar displayed alongside results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionCriteria {
    /// Score treated as "completed" on the scenario card.
    pub minimum_score: u8,
}

impl Default for CompletionCriteria {
    fn default() -> Self {
        CompletionCriteria { minimum_score: 70 }
    }
}

/// A puzzle: a hand of cards, an ordered list of stages, and the paths
/// the designers score against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Stable id referenced by progress records.
    pub id: ScenarioId,
    /// Display title.
    pub title: String,
    /// Framing text shown before play.
    pub brief: String,
    /// The hand dealt for this scenario.
    pub available_cards: Vec<CardId>,
    /// Solution board slots, in order.
    pub stages: Vec<Stage>,
    /// The designers' best solution, one card per stage.
    pub optimal_path: Vec<CardId>,
    /// Recognized non-optimal solutions, checked in declaration order.
    pub alternative_paths: Vec<AlternativePath>,
    /// Completion bar for this scenario.
    pub completion_criteria: CompletionCriteria,
    /// Verdict text per tier.
    pub feedback: FeedbackContent,
}

/// A themed group of scenarios unlocked as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct World {
    /// Stable id referenced by progress records.
    pub id: WorldId,
    /// Display name.
    pub name: String,
    /// Framing text shown on the world tile.
    pub description: String,
    /// Scenarios in play order. Unlocks walk this order.
    pub scenarios: Vec<Scenario>,
}

// Raw mirrors of the JSON shapes, camelCase plus the legacy fields.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    id: String,
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    attributes: BTreeMap<String, u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStage {
    id: String,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    acceptable_cards: Vec<String>,
    #[serde(default)]
    optimal_cards: Vec<String>,
    #[serde(default)]
    optimal_card: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAlternativePath {
    path: Vec<String>,
    effectiveness_score: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeedbackContent {
    optimal: String,
    good: String,
    suboptimal: String,
    incorrect: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFeedbackMessages {
    excellent: String,
    good: String,
    needs_improvement: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompletionCriteria {
    minimum_score: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScenario {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    brief: String,
    #[serde(default)]
    available_cards: Vec<String>,
    stages: Vec<RawStage>,
    optimal_path: Vec<String>,
    #[serde(default)]
    alternative_paths: Vec<RawAlternativePath>,
    #[serde(default)]
    completion_criteria: Option<RawCompletionCriteria>,
    #[serde(default)]
    feedback_content: Option<RawFeedbackContent>,
    #[serde(default)]
    feedback_messages: Option<RawFeedbackMessages>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWorld {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    scenarios: Vec<RawScenario>,
}

fn normalize_stage(scenario: &str, raw: RawStage) -> Result<Stage, CatalogError> {
    let mut optimal: BTreeSet<CardId> = raw.optimal_cards.into_iter().collect();
    if optimal.is_empty() {
        // The plural field wins when both are present.
        if let Some(single) = raw.optimal_card {
            optimal.insert(single);
        }
    }
    if optimal.is_empty() {
        return Err(CatalogError::MissingOptimalCard {
            scenario: scenario.to_string(),
            stage: raw.id,
        });
    }
    Ok(Stage {
        id: raw.id,
        prompt: raw.prompt,
        acceptable_cards: raw.acceptable_cards,
        optimal_cards: optimal,
    })
}

fn normalize_feedback(
    scenario: &str,
    content: Option<RawFeedbackContent>,
    messages: Option<RawFeedbackMessages>,
) -> Result<FeedbackContent, CatalogError> {
    if let Some(c) = content {
        return Ok(FeedbackContent {
            optimal: c.optimal,
            good: c.good,
            suboptimal: c.suboptimal,
            incorrect: c.incorrect,
        });
    }
    if let Some(m) = messages {
        // needsImprovement covered every score below 70 in the legacy
        // shape, so it fills both low tiers of the canonical one.
        return Ok(FeedbackContent {
            optimal: m.excellent,
            good: m.good,
            suboptimal: m.needs_improvement.clone(),
            incorrect: m.needs_improvement,
        });
    }
    Err(CatalogError::MissingFeedback(scenario.to_string()))
}

fn normalize_scenario(raw: RawScenario) -> Result<Scenario, CatalogError> {
    let RawScenario {
        id,
        title,
        brief,
        available_cards,
        stages,
        optimal_path,
        alternative_paths,
        completion_criteria,
        feedback_content,
        feedback_messages,
    } = raw;

    if stages.is_empty() {
        return Err(CatalogError::NoStages(id));
    }
    if optimal_path.len() != stages.len() {
        return Err(CatalogError::PathLengthMismatch {
            scenario: id,
            path_len: optimal_path.len(),
            stage_count: stages.len(),
        });
    }
    let feedback = normalize_feedback(&id, feedback_content, feedback_messages)?;
    let stages = stages
        .into_iter()
        .map(|s| normalize_stage(&id, s))
        .collect::<Result<Vec<_>, _>>()?;
    let alternative_paths = alternative_paths
        .into_iter()
        .map(|a| AlternativePath {
            path: a.path,
            effectiveness_score: a.effectiveness_score,
        })
        .collect();

    Ok(Scenario {
        id,
        title,
        brief,
        available_cards,
        stages,
        optimal_path,
        alternative_paths,
        completion_criteria: completion_criteria
            .map(|c| CompletionCriteria {
                minimum_score: c.minimum_score,
            })
            .unwrap_or_default(),
        feedback,
    })
}

fn normalize_world(raw: RawWorld) -> Result<World, CatalogError> {
    let scenarios = raw
        .scenarios
        .into_iter()
        .map(normalize_scenario)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(World {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        scenarios,
    })
}

/// The full content pack, indexed for id lookup and order queries.
///
/// World order and scenario order inside each world are the play order;
/// unlock rules walk these sequences.
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    worlds: Vec<World>,
    card_index: BTreeMap<CardId, usize>,
    world_index: BTreeMap<WorldId, usize>,
    scenario_index: BTreeMap<ScenarioId, (usize, usize)>,
}

impl Catalog {
    /// Parses and normalizes a card table and a world list from JSON.
    ///
    /// Structural defects (duplicate ids, stage/path length mismatch,
    /// missing feedback, a stage with no optimal card) are hard errors.
    /// Dangling card references and odd-length alternative paths only
    /// log a warning, matching how loosely the content was historically
    /// checked.
    pub fn from_json(cards_json: &str, worlds_json: &str) -> Result<Self, CatalogError> {
        let raw_cards: Vec<RawCard> = serde_json::from_str(cards_json)?;
        let raw_worlds: Vec<RawWorld> = serde_json::from_str(worlds_json)?;
        let cards = raw_cards
            .into_iter()
            .map(|c| Card {
                id: c.id,
                name: c.name,
                category: c.category,
                summary: c.summary,
                attributes: c.attributes,
            })
            .collect();
        let worlds = raw_worlds
            .into_iter()
            .map(normalize_world)
            .collect::<Result<Vec<_>, _>>()?;
        Self::assemble(cards, worlds)
    }

    /// Builds a catalog from already-normalized parts.
    ///
    /// Runs the same structural checks as [`Catalog::from_json`], so a
    /// hand-built catalog cannot dodge the invariants the engine relies
    /// on.
    pub fn assemble(cards: Vec<Card>, worlds: Vec<World>) -> Result<Self, CatalogError> {
        if worlds.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut card_index = BTreeMap::new();
        for (i, card) in cards.iter().enumerate() {
            if card_index.insert(card.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "card",
                    id: card.id.clone(),
                });
            }
        }
        let mut world_index = BTreeMap::new();
        let mut scenario_index = BTreeMap::new();
        for (wi, world) in worlds.iter().enumerate() {
            if world_index.insert(world.id.clone(), wi).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "world",
                    id: world.id.clone(),
                });
            }
            for (si, scenario) in world.scenarios.iter().enumerate() {
                if scenario_index
                    .insert(scenario.id.clone(), (wi, si))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateId {
                        kind: "scenario",
                        id: scenario.id.clone(),
                    });
                }
                if scenario.stages.is_empty() {
                    return Err(CatalogError::NoStages(scenario.id.clone()));
                }
                if scenario.optimal_path.len() != scenario.stages.len() {
                    return Err(CatalogError::PathLengthMismatch {
                        scenario: scenario.id.clone(),
                        path_len: scenario.optimal_path.len(),
                        stage_count: scenario.stages.len(),
                    });
                }
            }
        }
        let catalog = Catalog {
            cards,
            worlds,
            card_index,
            world_index,
            scenario_index,
        };
        catalog.audit_references();
        Ok(catalog)
    }

    // Warn-only pass over cross-references the loader tolerates.
    fn audit_references(&self) {
        for world in &self.worlds {
            for scenario in &world.scenarios {
                let referenced = scenario
                    .available_cards
                    .iter()
                    .chain(scenario.optimal_path.iter())
                    .chain(
                        scenario
                            .stages
                            .iter()
                            .flat_map(|s| s.acceptable_cards.iter().chain(s.optimal_cards.iter())),
                    );
                for card in referenced {
                    if !self.card_index.contains_key(card) {
                        log::warn!(
                            "[CATALOG] scenario `{}` references unknown card `{}`",
                            scenario.id,
                            card
                        );
                    }
                }
                for alt in &scenario.alternative_paths {
                    if alt.path.len() != scenario.stages.len() {
                        log::warn!(
                            "[CATALOG] scenario `{}`: alternative path has {} cards for {} stages",
                            scenario.id,
                            alt.path.len(),
                            scenario.stages.len()
                        );
                    }
                }
            }
        }
    }

    /// The card table.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All worlds in play order.
    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    /// Looks up a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.card_index.get(id).map(|&i| &self.cards[i])
    }

    /// Looks up a world by id.
    pub fn world(&self, id: &str) -> Option<&World> {
        self.world_index.get(id).map(|&i| &self.worlds[i])
    }

    /// Looks up a scenario by id.
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenario_index
            .get(id)
            .map(|&(wi, si)| &self.worlds[wi].scenarios[si])
    }

    /// The world a scenario belongs to.
    pub fn world_of(&self, scenario_id: &str) -> Option<&World> {
        self.scenario_index
            .get(scenario_id)
            .map(|&(wi, _)| &self.worlds[wi])
    }

    /// The first world in play order. Catalogs are never empty.
    pub fn first_world(&self) -> &World {
        &self.worlds[0]
    }

    /// The world after the given one in play order, if any.
    pub fn next_world_after(&self, world_id: &str) -> Option<&World> {
        let &wi = self.world_index.get(world_id)?;
        self.worlds.get(wi + 1)
    }

    /// The scenario before this one in its world, or `None` for the
    /// first scenario of a world (and for unknown ids).
    pub fn predecessor_in_world(&self, scenario_id: &str) -> Option<&Scenario> {
        let &(wi, si) = self.scenario_index.get(scenario_id)?;
        if si == 0 {
            return None;
        }
        Some(&self.worlds[wi].scenarios[si - 1])
    }

    /// The scenario after this one in its world, if any.
    pub fn next_in_world(&self, scenario_id: &str) -> Option<&Scenario> {
        let &(wi, si) = self.scenario_index.get(scenario_id)?;
        self.worlds[wi].scenarios.get(si + 1)
    }

    /// True when the scenario is the last of its world.
    pub fn is_last_in_world(&self, scenario_id: &str) -> bool {
        self.scenario_index.contains_key(scenario_id) && self.next_in_world(scenario_id).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards_json() -> &'static str {
        r#"[
            {"id": "alpha", "name": "Alpha", "category": "hash",
             "summary": "First card.", "attributes": {"speed": 80}},
            {"id": "beta", "name": "Beta", "category": "hash",
             "summary": "Second card."},
            {"id": "gamma", "name": "Gamma", "category": "proof-system"}
        ]"#
    }

    fn worlds_json() -> &'static str {
        r#"[
            {
                "id": "w1", "name": "World One", "description": "Start here.",
                "scenarios": [
                    {
                        "id": "s1", "title": "Opening", "brief": "Place two cards.",
                        "availableCards": ["alpha", "beta", "gamma"],
                        "stages": [
                            {"id": "st1", "prompt": "First?",
                             "acceptableCards": ["beta"], "optimalCards": ["alpha"]},
                            {"id": "st2", "prompt": "Second?",
                             "acceptableCards": ["alpha"], "optimalCard": "beta"}
                        ],
                        "optimalPath": ["alpha", "beta"],
                        "alternativePaths": [
                            {"path": ["beta", "alpha"], "effectivenessScore": 75}
                        ],
                        "completionCriteria": {"minimumScore": 70},
                        "feedbackContent": {
                            "optimal": "Perfect.", "good": "Good.",
                            "suboptimal": "Shaky.", "incorrect": "Wrong."
                        }
                    },
                    {
                        "id": "s2", "title": "Legacy", "brief": "Old format.",
                        "availableCards": ["alpha", "beta"],
                        "stages": [
                            {"id": "st1", "optimalCard": "beta"}
                        ],
                        "optimalPath": ["beta"],
                        "feedbackMessages": {
                            "excellent": "Top.", "good": "Fine.",
                            "needsImprovement": "Keep trying."
                        }
                    }
                ]
            },
            {
                "id": "w2", "name": "World Two", "description": "Later.",
                "scenarios": [
                    {
                        "id": "s3", "title": "Sequel", "brief": "",
                        "availableCards": ["gamma"],
                        "stages": [{"id": "st1", "optimalCards": ["gamma"]}],
                        "optimalPath": ["gamma"],
                        "feedbackContent": {
                            "optimal": "A.", "good": "B.",
                            "suboptimal": "C.", "incorrect": "D."
                        }
                    }
                ]
            }
        ]"#
    }

    fn catalog() -> Catalog {
        Catalog::from_json(cards_json(), worlds_json()).unwrap()
    }

    #[test]
    fn test_loads_and_indexes() {
        let cat = catalog();
        assert_eq!(cat.worlds().len(), 2);
        assert_eq!(cat.cards().len(), 3);
        assert_eq!(cat.card("alpha").unwrap().name, "Alpha");
        assert_eq!(cat.scenario("s2").unwrap().title, "Legacy");
        assert_eq!(cat.world_of("s3").unwrap().id, "w2");
        assert!(cat.card("delta").is_none());
    }

    #[test]
    fn test_defaulted_fields() {
        let cat = catalog();
        let gamma = cat.card("gamma").unwrap();
        assert!(gamma.summary.is_empty());
        assert!(gamma.attributes.is_empty());
        // completionCriteria falls back to 70 when absent.
        assert_eq!(cat.scenario("s2").unwrap().completion_criteria.minimum_score, 70);
    }

    #[test]
    fn legacy_singular_optimal_card_is_lifted() {
        let cat = catalog();
        let stage = &cat.scenario("s2").unwrap().stages[0];
        assert!(stage.optimal_cards.contains("beta"));
        assert_eq!(stage.optimal_cards.len(), 1);
    }

    #[test]
    fn plural_optimal_cards_wins_over_singular() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [{
                "id": "s", "stages": [
                    {"id": "st", "optimalCards": ["alpha"], "optimalCard": "beta"}
                ],
                "optimalPath": ["alpha"],
                "feedbackContent": {"optimal": "a", "good": "b",
                                    "suboptimal": "c", "incorrect": "d"}
            }]}
        ]"#;
        let cat = Catalog::from_json(cards_json(), worlds).unwrap();
        let stage = &cat.scenario("s").unwrap().stages[0];
        assert!(stage.optimal_cards.contains("alpha"));
        assert!(!stage.optimal_cards.contains("beta"));
    }

    #[test]
    fn legacy_feedback_fans_out_to_both_low_tiers() {
        let cat = catalog();
        let feedback = &cat.scenario("s2").unwrap().feedback;
        assert_eq!(feedback.optimal, "Top.");
        assert_eq!(feedback.good, "Fine.");
        assert_eq!(feedback.suboptimal, "Keep trying.");
        assert_eq!(feedback.incorrect, "Keep trying.");
    }

    #[test]
    fn missing_feedback_is_rejected() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [{
                "id": "s",
                "stages": [{"id": "st", "optimalCard": "alpha"}],
                "optimalPath": ["alpha"]
            }]}
        ]"#;
        let err = Catalog::from_json(cards_json(), worlds).unwrap_err();
        assert!(matches!(err, CatalogError::MissingFeedback(id) if id == "s"));
    }

    #[test]
    fn stage_without_optimal_card_is_rejected() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [{
                "id": "s",
                "stages": [{"id": "st", "acceptableCards": ["alpha"]}],
                "optimalPath": ["alpha"],
                "feedbackContent": {"optimal": "a", "good": "b",
                                    "suboptimal": "c", "incorrect": "d"}
            }]}
        ]"#;
        let err = Catalog::from_json(cards_json(), worlds).unwrap_err();
        assert!(matches!(err, CatalogError::MissingOptimalCard { .. }));
    }

    #[test]
    fn optimal_path_length_mismatch_is_rejected() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [{
                "id": "s",
                "stages": [{"id": "st", "optimalCard": "alpha"}],
                "optimalPath": ["alpha", "beta"],
                "feedbackContent": {"optimal": "a", "good": "b",
                                    "suboptimal": "c", "incorrect": "d"}
            }]}
        ]"#;
        let err = Catalog::from_json(cards_json(), worlds).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PathLengthMismatch {
                path_len: 2,
                stage_count: 1,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_scenario_id_is_rejected() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [
                {"id": "s", "stages": [{"id": "st", "optimalCard": "alpha"}],
                 "optimalPath": ["alpha"],
                 "feedbackContent": {"optimal": "a", "good": "b",
                                     "suboptimal": "c", "incorrect": "d"}},
                {"id": "s", "stages": [{"id": "st", "optimalCard": "beta"}],
                 "optimalPath": ["beta"],
                 "feedbackContent": {"optimal": "a", "good": "b",
                                     "suboptimal": "c", "incorrect": "d"}}
            ]}
        ]"#;
        let err = Catalog::from_json(cards_json(), worlds).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { kind: "scenario", id } if id == "s"
        ));
    }

    #[test]
    fn short_alternative_path_loads_with_warning_only() {
        let worlds = r#"[
            {"id": "w", "name": "W", "scenarios": [{
                "id": "s",
                "stages": [
                    {"id": "a", "optimalCard": "alpha"},
                    {"id": "b", "optimalCard": "beta"}
                ],
                "optimalPath": ["alpha", "beta"],
                "alternativePaths": [{"path": ["beta"], "effectivenessScore": 60}],
                "feedbackContent": {"optimal": "a", "good": "b",
                                    "suboptimal": "c", "incorrect": "d"}
            }]}
        ]"#;
        let cat = Catalog::from_json(cards_json(), worlds).unwrap();
        assert_eq!(cat.scenario("s").unwrap().alternative_paths.len(), 1);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::from_json(cards_json(), "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_order_queries() {
        let cat = catalog();
        assert!(cat.predecessor_in_world("s1").is_none());
        assert_eq!(cat.predecessor_in_world("s2").unwrap().id, "s1");
        assert_eq!(cat.next_in_world("s1").unwrap().id, "s2");
        assert!(cat.next_in_world("s2").is_none());
        assert!(cat.is_last_in_world("s2"));
        assert!(!cat.is_last_in_world("s1"));
        assert!(!cat.is_last_in_world("missing"));
        assert_eq!(cat.first_world().id, "w1");
        assert_eq!(cat.next_world_after("w1").unwrap().id, "w2");
        assert!(cat.next_world_after("w2").is_none());
    }
}
