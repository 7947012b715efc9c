//! Property tests for the scoring engine.
//!
//! Boards are generated per stage from the four placements scoring
//! distinguishes: the stage's optimal card, an acceptable card, a card
//! that belongs nowhere, or an empty slot.

use proptest::prelude::*;

use zk_card_clash::{
    score_solution, AlternativePath, Catalog, CompletionCriteria, FeedbackContent, FeedbackTier,
    PathMatching, Scenario, Stage,
};

fn feedback() -> FeedbackContent {
    FeedbackContent {
        optimal: "optimal".to_string(),
        good: "good".to_string(),
        suboptimal: "suboptimal".to_string(),
        incorrect: "incorrect".to_string(),
    }
}

fn stage(i: usize) -> Stage {
    Stage {
        id: format!("st{i}"),
        prompt: String::new(),
        acceptable_cards: vec![format!("acc{i}")],
        optimal_cards: [format!("opt{i}")].into_iter().collect(),
    }
}

fn scenario(stage_count: usize, alternative_paths: Vec<AlternativePath>) -> Scenario {
    Scenario {
        id: "prop".to_string(),
        title: String::new(),
        brief: String::new(),
        available_cards: Vec::new(),
        stages: (0..stage_count).map(stage).collect(),
        optimal_path: (0..stage_count).map(|i| format!("opt{i}")).collect(),
        alternative_paths,
        completion_criteria: CompletionCriteria::default(),
        feedback: feedback(),
    }
}

#[derive(Clone, Copy, Debug)]
enum Placement {
    Optimal,
    Acceptable,
    Wrong,
    Empty,
}

fn board(placements: &[Placement]) -> Vec<Option<String>> {
    placements
        .iter()
        .enumerate()
        .map(|(i, p)| match p {
            Placement::Optimal => Some(format!("opt{i}")),
            Placement::Acceptable => Some(format!("acc{i}")),
            Placement::Wrong => Some(format!("zzz{i}")),
            Placement::Empty => None,
        })
        .collect()
}

fn placement() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Optimal),
        Just(Placement::Acceptable),
        Just(Placement::Wrong),
        Just(Placement::Empty),
    ]
}

fn any_board() -> impl Strategy<Value = Vec<Placement>> {
    prop::collection::vec(placement(), 1..=6)
}

proptest! {
    #[test]
    fn score_stays_within_bounds(placements in any_board(), hints in 0u32..=30) {
        let s = scenario(placements.len(), Vec::new());
        let verdict = score_solution(&s, &board(&placements), hints, PathMatching::Lenient);
        prop_assert!(verdict.score <= 100);
    }

    #[test]
    fn more_hints_never_raise_the_score(placements in any_board(), hints in 0u32..=30) {
        let s = scenario(placements.len(), Vec::new());
        let b = board(&placements);
        let cheaper = score_solution(&s, &b, hints, PathMatching::Lenient).score;
        let dearer = score_solution(&s, &b, hints + 1, PathMatching::Lenient).score;
        prop_assert!(dearer <= cheaper);
    }

    #[test]
    fn optimal_board_scores_100_less_the_hint_penalty(
        stage_count in 1usize..=6,
        hints in 0u32..=30,
    ) {
        let s = scenario(stage_count, Vec::new());
        let b: Vec<Option<String>> = s.optimal_path.iter().cloned().map(Some).collect();
        let verdict = score_solution(&s, &b, hints, PathMatching::Lenient);
        prop_assert_eq!(verdict.score, 100u32.saturating_sub(hints * 5));
    }

    #[test]
    fn scoring_is_a_pure_function(placements in any_board(), hints in 0u32..=30) {
        let s = scenario(placements.len(), Vec::new());
        let b = board(&placements);
        let first = score_solution(&s, &b, hints, PathMatching::Lenient);
        let second = score_solution(&s, &b, hints, PathMatching::Lenient);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn matching_modes_agree_on_full_boards(placements in any_board(), hints in 0u32..=30) {
        let full: Vec<Placement> = placements
            .iter()
            .map(|p| match p {
                Placement::Empty => Placement::Wrong,
                other => *other,
            })
            .collect();
        let s = scenario(full.len(), Vec::new());
        let b = board(&full);
        let lenient = score_solution(&s, &b, hints, PathMatching::Lenient);
        let strict = score_solution(&s, &b, hints, PathMatching::Strict);
        prop_assert_eq!(lenient, strict);
    }

    #[test]
    fn alternative_match_overrides_stage_grading(
        stage_count in 1usize..=6,
        effectiveness in 0u8..=100,
        hints in 0u32..=30,
    ) {
        // The alternative's cards belong to no stage, so tier grading
        // would give 30% per stage; the path match must win anyway.
        let alt: Vec<String> = (0..stage_count).map(|i| format!("alt{i}")).collect();
        let s = scenario(
            stage_count,
            vec![AlternativePath {
                path: alt.clone(),
                effectiveness_score: effectiveness,
            }],
        );
        let b: Vec<Option<String>> = alt.into_iter().map(Some).collect();
        let expected = u32::from(effectiveness).saturating_sub(hints * 5);
        for matching in [PathMatching::Lenient, PathMatching::Strict] {
            let verdict = score_solution(&s, &b, hints, matching);
            prop_assert_eq!(verdict.score, expected);
        }
    }

    #[test]
    fn feedback_always_matches_the_tier(placements in any_board(), hints in 0u32..=30) {
        let s = scenario(placements.len(), Vec::new());
        let verdict = score_solution(&s, &board(&placements), hints, PathMatching::Lenient);
        let expected = match verdict.score {
            90.. => "optimal",
            70..=89 => "good",
            50..=69 => "suboptimal",
            _ => "incorrect",
        };
        prop_assert_eq!(&verdict.feedback, expected);
        prop_assert_eq!(verdict.tier, FeedbackTier::for_score(verdict.score));
    }
}

#[test]
fn lenient_matching_accepts_a_sparse_board_strict_rejects_it() {
    // The documented hazard: with empty slots stripped, a half-filled
    // board can line up with an alternative path written for a smaller
    // board.
    let s = scenario(
        3,
        vec![AlternativePath {
            path: vec!["alt0".to_string()],
            effectiveness_score: 90,
        }],
    );
    let sparse = vec![None, Some("alt0".to_string()), None];

    let lenient = score_solution(&s, &sparse, 0, PathMatching::Lenient);
    assert_eq!(lenient.score, 90);

    // Strict matching skips the path and grades the one misplaced card.
    let strict = score_solution(&s, &sparse, 0, PathMatching::Strict);
    assert_eq!(strict.score, 10);
}

#[test]
fn every_builtin_optimal_path_scores_100() {
    let cat = Catalog::builtin();
    for world in cat.worlds() {
        for scenario in &world.scenarios {
            let board: Vec<Option<String>> =
                scenario.optimal_path.iter().cloned().map(Some).collect();
            for matching in [PathMatching::Lenient, PathMatching::Strict] {
                let verdict = score_solution(scenario, &board, 0, matching);
                assert_eq!(verdict.score, 100, "{}", scenario.id);
                assert_eq!(verdict.feedback, scenario.feedback.optimal, "{}", scenario.id);
            }
        }
    }
}

#[test]
fn every_builtin_alternative_path_earns_its_effectiveness_score() {
    let cat = Catalog::builtin();
    for world in cat.worlds() {
        for scenario in &world.scenarios {
            for alt in &scenario.alternative_paths {
                let board: Vec<Option<String>> = alt.path.iter().cloned().map(Some).collect();
                let verdict = score_solution(scenario, &board, 0, PathMatching::Lenient);
                assert_eq!(
                    verdict.score,
                    u32::from(alt.effectiveness_score),
                    "{}",
                    scenario.id
                );
            }
        }
    }
}
