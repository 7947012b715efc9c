//! Scoring for submitted solutions.
//!
//! Scoring is a pure function of the scenario, the board, and the hint
//! count. Nothing here reads clocks, randomness, or player state, so a
//! replayed submission always lands on the same verdict.
//!
//! A submission is scored one of two ways. If it exactly matches one of
//! the scenario's alternative paths, the path's effectiveness score is
//! used as-is. Otherwise each stage contributes an equal share of 100
//! points: the full share for an optimal card, 70% for an acceptable
//! one, 30% for any other card, nothing for an empty slot. Hints cost
//! five points each, the total never drops below zero, and the final
//! score is rounded to a whole number at the very end.

use crate::catalog::{CardId, FeedbackContent, Scenario};

/// Points deducted from the final score per hint taken.
pub const HINT_PENALTY: u32 = 5;

const ACCEPTABLE_WEIGHT: f64 = 0.7;
const MISPLACED_WEIGHT: f64 = 0.3;

/// How submissions are compared against alternative paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathMatching {
    /// Strip empty stages before comparing, as the game has always
    /// done. A partially filled board can therefore match an
    /// alternative path that is shorter than the board.
    #[default]
    Lenient,
    /// Only a fully filled board of exactly the path's length matches.
    Strict,
}

/// Verdict tier, bucketed from the numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    /// 90 and above.
    Optimal,
    /// 70 to 89.
    Good,
    /// 50 to 69.
    Suboptimal,
    /// Below 50.
    Incorrect,
}

impl FeedbackTier {
    /// Buckets a 0-100 score into its tier.
    pub fn for_score(score: u32) -> FeedbackTier {
        if score >= 90 {
            FeedbackTier::Optimal
        } else if score >= 70 {
            FeedbackTier::Good
        } else if score >= 50 {
            FeedbackTier::Suboptimal
        } else {
            FeedbackTier::Incorrect
        }
    }

    /// The scenario's feedback line for this tier.
    pub fn text(self, feedback: &FeedbackContent) -> &str {
        match self {
            FeedbackTier::Optimal => &feedback.optimal,
            FeedbackTier::Good => &feedback.good,
            FeedbackTier::Suboptimal => &feedback.suboptimal,
            FeedbackTier::Incorrect => &feedback.incorrect,
        }
    }

    /// Lowercase label for logs and terminal output.
    pub fn label(self) -> &'static str {
        match self {
            FeedbackTier::Optimal => "optimal",
            FeedbackTier::Good => "good",
            FeedbackTier::Suboptimal => "suboptimal",
            FeedbackTier::Incorrect => "incorrect",
        }
    }
}

/// The outcome of scoring one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Final score, 0 to 100.
    pub score: u32,
    /// Tier the score falls into.
    pub tier: FeedbackTier,
    /// The scenario's feedback line for that tier.
    pub feedback: String,
}

/// Scores a board against a scenario.
///
/// `placed` holds one entry per stage in stage order; `None` marks an
/// empty slot. Alternative paths are checked before stage-by-stage
/// grading, in declaration order, first match wins. The returned
/// feedback is the scenario's text for the resulting tier.
pub fn score_solution(
    scenario: &Scenario,
    placed: &[Option<CardId>],
    hints_used: u32,
    matching: PathMatching,
) -> Verdict {
    let penalty = hints_used.saturating_mul(HINT_PENALTY);
    let score = match alternative_match(scenario, placed, matching) {
        Some(effectiveness) => u32::from(effectiveness).saturating_sub(penalty),
        None => {
            let raw = stage_tier_points(scenario, placed) - f64::from(penalty);
            raw.max(0.0).round() as u32
        }
    };
    let tier = FeedbackTier::for_score(score);
    log::debug!(
        "[SCORE] scenario={} hints={} score={} tier={}",
        scenario.id,
        hints_used,
        score,
        tier.label()
    );
    Verdict {
        score,
        tier,
        feedback: tier.text(&scenario.feedback).to_string(),
    }
}

/// The effectiveness score of the first alternative path the board
/// matches, if any.
fn alternative_match(
    scenario: &Scenario,
    placed: &[Option<CardId>],
    matching: PathMatching,
) -> Option<u8> {
    if matching == PathMatching::Strict && placed.iter().any(Option::is_none) {
        return None;
    }
    // Under lenient matching the flatten drops empty slots, so a short
    // alternative path can match a half-filled board.
    scenario
        .alternative_paths
        .iter()
        .find(|alt| alt.path.iter().eq(placed.iter().flatten()))
        .map(|alt| alt.effectiveness_score)
}

fn stage_tier_points(scenario: &Scenario, placed: &[Option<CardId>]) -> f64 {
    let stage_points = 100.0 / scenario.stages.len() as f64;
    let mut total = 0.0;
    for (stage, slot) in scenario.stages.iter().zip(placed) {
        if let Some(card) = slot {
            if stage.optimal_cards.contains(card) {
                total += stage_points;
            } else if stage.acceptable_cards.contains(card) {
                total += stage_points * ACCEPTABLE_WEIGHT;
            } else {
                total += stage_points * MISPLACED_WEIGHT;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlternativePath, CompletionCriteria, Stage};

    fn stage(id: &str, optimal: &[&str], acceptable: &[&str]) -> Stage {
        Stage {
            id: id.to_string(),
            prompt: String::new(),
            acceptable_cards: acceptable.iter().map(|s| s.to_string()).collect(),
            optimal_cards: optimal.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn scenario(stages: Vec<Stage>, alts: Vec<(&[&str], u8)>) -> Scenario {
        let optimal_path = stages
            .iter()
            .map(|s| s.optimal_cards.iter().next().unwrap().clone())
            .collect();
        Scenario {
            id: "bench".to_string(),
            title: String::new(),
            brief: String::new(),
            available_cards: Vec::new(),
            stages,
            optimal_path,
            alternative_paths: alts
                .into_iter()
                .map(|(path, effectiveness_score)| AlternativePath {
                    path: path.iter().map(|s| s.to_string()).collect(),
                    effectiveness_score,
                })
                .collect(),
            completion_criteria: CompletionCriteria::default(),
            feedback: FeedbackContent {
                optimal: "optimal".to_string(),
                good: "good".to_string(),
                suboptimal: "suboptimal".to_string(),
                incorrect: "incorrect".to_string(),
            },
        }
    }

    fn three_stage() -> Scenario {
        scenario(
            vec![
                stage("one", &["A"], &["X"]),
                stage("two", &["B"], &["Y"]),
                stage("three", &["C"], &["Z"]),
            ],
            vec![],
        )
    }

    fn board(cards: &[Option<&str>]) -> Vec<Option<CardId>> {
        cards.iter().map(|c| c.map(str::to_string)).collect()
    }

    #[test]
    fn test_optimal_path_scores_100() {
        let s = three_stage();
        let verdict = score_solution(
            &s,
            &board(&[Some("A"), Some("B"), Some("C")]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.tier, FeedbackTier::Optimal);
        assert_eq!(verdict.feedback, "optimal");
    }

    #[test]
    fn acceptable_card_earns_seventy_percent_of_its_stage() {
        // Two optimal stages and one acceptable: the fractional shares
        // sum to just over 90 and must round back onto the boundary.
        let s = three_stage();
        let verdict = score_solution(
            &s,
            &board(&[Some("A"), Some("Y"), Some("C")]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 90);
        assert_eq!(verdict.tier, FeedbackTier::Optimal);
    }

    #[test]
    fn misplaced_card_earns_thirty_percent_of_its_stage() {
        let s = three_stage();
        // One stage, filled with a card that is neither optimal nor
        // acceptable there.
        let verdict = score_solution(
            &s,
            &board(&[Some("Q"), None, None]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 10);
        assert_eq!(verdict.tier, FeedbackTier::Incorrect);
    }

    #[test]
    fn empty_board_scores_zero() {
        let s = three_stage();
        let verdict = score_solution(&s, &board(&[None, None, None]), 0, PathMatching::Lenient);
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.tier, FeedbackTier::Incorrect);
        assert_eq!(verdict.feedback, "incorrect");
    }

    #[test]
    fn test_hint_penalty_and_floor() {
        let s = three_stage();
        let full = board(&[Some("A"), Some("B"), Some("C")]);
        assert_eq!(score_solution(&s, &full, 1, PathMatching::Lenient).score, 95);
        assert_eq!(score_solution(&s, &full, 3, PathMatching::Lenient).score, 85);
        // Deep in penalty territory the score pins at zero.
        assert_eq!(score_solution(&s, &full, 25, PathMatching::Lenient).score, 0);
    }

    #[test]
    fn alternative_path_match_takes_precedence() {
        let s = scenario(
            vec![
                stage("one", &["A"], &[]),
                stage("two", &["B"], &[]),
                stage("three", &["C"], &[]),
            ],
            vec![(&["C", "B", "A"], 85)],
        );
        let verdict = score_solution(
            &s,
            &board(&[Some("C"), Some("B"), Some("A")]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 85);
        assert_eq!(verdict.tier, FeedbackTier::Good);
    }

    #[test]
    fn alternative_match_subtracts_hints_in_whole_points() {
        let s = scenario(
            vec![stage("one", &["A"], &[]), stage("two", &["B"], &[])],
            vec![(&["B", "A"], 85)],
        );
        let placed = board(&[Some("B"), Some("A")]);
        assert_eq!(score_solution(&s, &placed, 2, PathMatching::Lenient).score, 75);
        assert_eq!(score_solution(&s, &placed, 20, PathMatching::Lenient).score, 0);
    }

    #[test]
    fn first_declared_alternative_wins() {
        let s = scenario(
            vec![stage("one", &["A"], &[]), stage("two", &["B"], &[])],
            vec![(&["B", "A"], 60), (&["B", "A"], 95)],
        );
        let verdict = score_solution(
            &s,
            &board(&[Some("B"), Some("A")]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 60);
    }

    #[test]
    fn alternative_listing_the_optimal_path_shadows_it() {
        // Path matching runs before stage grading, so a designer who
        // lists the optimal sequence as an alternative caps its score.
        let s = scenario(
            vec![stage("one", &["A"], &[]), stage("two", &["B"], &[])],
            vec![(&["A", "B"], 80)],
        );
        let verdict = score_solution(
            &s,
            &board(&[Some("A"), Some("B")]),
            0,
            PathMatching::Lenient,
        );
        assert_eq!(verdict.score, 80);
    }

    #[test]
    fn lenient_matching_lets_short_paths_match_sparse_boards() {
        let s = scenario(
            vec![
                stage("one", &["A"], &[]),
                stage("two", &["B"], &[]),
                stage("three", &["C"], &[]),
            ],
            vec![(&["B"], 65)],
        );
        let sparse = board(&[None, Some("B"), None]);
        let verdict = score_solution(&s, &sparse, 0, PathMatching::Lenient);
        assert_eq!(verdict.score, 65);

        // Strict matching refuses the sparse board and falls through to
        // stage grading: one optimal stage out of three.
        let verdict = score_solution(&s, &sparse, 0, PathMatching::Strict);
        assert_eq!(verdict.score, 33);
        assert_eq!(verdict.tier, FeedbackTier::Incorrect);
    }

    #[test]
    fn strict_matching_still_accepts_exact_full_boards() {
        let s = scenario(
            vec![stage("one", &["A"], &[]), stage("two", &["B"], &[])],
            vec![(&["B", "A"], 85)],
        );
        let verdict = score_solution(
            &s,
            &board(&[Some("B"), Some("A")]),
            0,
            PathMatching::Strict,
        );
        assert_eq!(verdict.score, 85);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(FeedbackTier::for_score(100), FeedbackTier::Optimal);
        assert_eq!(FeedbackTier::for_score(90), FeedbackTier::Optimal);
        assert_eq!(FeedbackTier::for_score(89), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(70), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(69), FeedbackTier::Suboptimal);
        assert_eq!(FeedbackTier::for_score(50), FeedbackTier::Suboptimal);
        assert_eq!(FeedbackTier::for_score(49), FeedbackTier::Incorrect);
        assert_eq!(FeedbackTier::for_score(0), FeedbackTier::Incorrect);
    }

    #[test]
    fn four_stage_scenario_splits_cleanly() {
        let s = scenario(
            vec![
                stage("one", &["A"], &[]),
                stage("two", &["B"], &["Y"]),
                stage("three", &["C"], &[]),
                stage("four", &["D"], &[]),
            ],
            vec![],
        );
        let verdict = score_solution(
            &s,
            &board(&[Some("A"), Some("Y"), Some("C"), None]),
            0,
            PathMatching::Lenient,
        );
        // 25 + 17.5 + 25 + 0, rounded.
        assert_eq!(verdict.score, 68);
        assert_eq!(verdict.tier, FeedbackTier::Suboptimal);
    }
}
