//! The built-in content pack, embedded at compile time.

use crate::catalog::Catalog;

const CARDS_JSON: &str = include_str!("../data/cards.json");
const WORLDS_JSON: &str = include_str!("../data/worlds.json");

impl Catalog {
    /// Loads the content pack shipped with the crate: three worlds of
    /// three scenarios each, drawn from a table of fourteen cards.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON fails validation, which means the
    /// crate itself was built from broken data files.
    pub fn builtin() -> Catalog {
        Catalog::from_json(CARDS_JSON, WORLDS_JSON).expect("embedded content pack is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_pack_loads() {
        let cat = Catalog::builtin();
        assert_eq!(cat.worlds().len(), 3);
        assert_eq!(cat.cards().len(), 14);
        let scenario_count: usize = cat.worlds().iter().map(|w| w.scenarios.len()).sum();
        assert_eq!(scenario_count, 9);
    }

    #[test]
    fn every_reference_resolves() {
        let cat = Catalog::builtin();
        for world in cat.worlds() {
            for scenario in &world.scenarios {
                for card in &scenario.available_cards {
                    assert!(cat.card(card).is_some(), "{}: {card}", scenario.id);
                }
                for card in &scenario.optimal_path {
                    assert!(cat.card(card).is_some(), "{}: {card}", scenario.id);
                }
                for stage in &scenario.stages {
                    for card in stage.acceptable_cards.iter().chain(&stage.optimal_cards) {
                        assert!(cat.card(card).is_some(), "{}: {card}", scenario.id);
                        assert!(
                            scenario.available_cards.contains(card),
                            "{}: {card} not dealt",
                            scenario.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn optimal_paths_use_optimal_cards() {
        // The shipped pack's optimal path should earn full credit at
        // every stage, which is what makes it score 100.
        let cat = Catalog::builtin();
        for world in cat.worlds() {
            for scenario in &world.scenarios {
                for (stage, card) in scenario.stages.iter().zip(&scenario.optimal_path) {
                    assert!(
                        stage.optimal_cards.contains(card),
                        "{}/{}: {card} not optimal",
                        scenario.id,
                        stage.id
                    );
                }
            }
        }
    }

    #[test]
    fn alternative_paths_are_full_length_and_distinct() {
        let cat = Catalog::builtin();
        for world in cat.worlds() {
            for scenario in &world.scenarios {
                for alt in &scenario.alternative_paths {
                    assert_eq!(
                        alt.path.len(),
                        scenario.stages.len(),
                        "{}: ragged alternative path",
                        scenario.id
                    );
                    assert_ne!(alt.path, scenario.optimal_path, "{}", scenario.id);
                }
            }
        }
    }

    #[test]
    fn legacy_scenario_normalizes() {
        let cat = Catalog::builtin();
        let finale = cat.scenario("fair-coin-finale").unwrap();
        assert!(finale.stages[0].optimal_cards.contains("pedersen-anchor"));
        assert_eq!(finale.feedback.suboptimal, finale.feedback.incorrect);
        assert_eq!(finale.completion_criteria.minimum_score, 70);
    }
}
