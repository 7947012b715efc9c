use zk_card_clash::{
    score_solution, AlternativePath, Catalog, CompletionCriteria, FeedbackContent, PathMatching,
    Scenario, Stage,
};

fn board(cards: &[&str]) -> Vec<Option<String>> {
    cards.iter().map(|c| Some(c.to_string())).collect()
}

fn stage(id: &str, optimal: &str) -> Stage {
    Stage {
        id: id.to_string(),
        prompt: String::new(),
        acceptable_cards: Vec::new(),
        optimal_cards: [optimal.to_string()].into_iter().collect(),
    }
}

// A hand-built scenario whose alternative path is one card short of the
// board, the shape that makes the two matching modes disagree.
fn short_alt_scenario() -> Scenario {
    Scenario {
        id: "short-alt".to_string(),
        title: "Short Alternative".to_string(),
        brief: String::new(),
        available_cards: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        stages: vec![stage("one", "a"), stage("two", "b"), stage("three", "c")],
        optimal_path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        alternative_paths: vec![AlternativePath {
            path: vec!["b".to_string(), "a".to_string()],
            effectiveness_score: 80,
        }],
        completion_criteria: CompletionCriteria::default(),
        feedback: FeedbackContent {
            optimal: "optimal".to_string(),
            good: "good".to_string(),
            suboptimal: "suboptimal".to_string(),
            incorrect: "incorrect".to_string(),
        },
    }
}


fn main() {
    let catalog = Catalog::builtin();
    let scenario = catalog
        .scenario("sealed-bid")
        .expect("built-in scenario exists");

    println!("Scoring `{}` ({} stages):", scenario.id, scenario.stages.len());
    println!("{:<52} {:>5}  tier", "board / hints", "score");
    println!("{}", "-".repeat(72));

    let cases: &[(&str, Vec<Option<String>>, u32)] = &[
        (
            "optimal path, no hints",
            board(&["salt-cellar", "sha-forge", "merkle-loom"]),
            0,
        ),
        (
            "optimal path, two hints",
            board(&["salt-cellar", "sha-forge", "merkle-loom"]),
            2,
        ),
        (
            "declared alternative path",
            board(&["pedersen-anchor", "sha-forge", "merkle-loom"]),
            0,
        ),
        (
            "acceptable card at every stage",
            board(&["pedersen-anchor", "keccak-kiln", "sha-forge"]),
            0,
        ),
        (
            "one wrong card",
            board(&["salt-cellar", "sha-forge", "dice-oracle"]),
            0,
        ),
        (
            "wrong everywhere",
            board(&["dice-oracle", "salt-cellar", "keccak-kiln"]),
            0,
        ),
    ];

    for (label, placed, hints) in cases {
        let verdict = score_solution(scenario, placed, *hints, PathMatching::Lenient);
        println!(
            "{:<52} {:>5}  {}",
            format!("{label} (hints={hints})"),
            verdict.score,
            verdict.tier.label()
        );
    }

    println!();
    println!("Hints subtract five points each, after path matching:");
    let placed = board(&["pedersen-anchor", "sha-forge", "merkle-loom"]);
    for hints in 0..=3 {
        let verdict = score_solution(scenario, &placed, hints, PathMatching::Lenient);
        println!("  alternative path with {hints} hints: {}", verdict.score);
    }

    println!();
    println!("Where lenient and strict matching part ways:");
    let tricky = short_alt_scenario();
    let sparse: Vec<Option<String>> = vec![Some("b".to_string()), Some("a".to_string()), None];
    let lenient = score_solution(&tricky, &sparse, 0, PathMatching::Lenient);
    let strict = score_solution(&tricky, &sparse, 0, PathMatching::Strict);
    println!(
        "  board [b, a, _] vs a two-card alternative path worth {}:",
        tricky.alternative_paths[0].effectiveness_score
    );
    println!("    lenient: {} ({})", lenient.score, lenient.tier.label());
    println!("    strict:  {} ({})", strict.score, strict.tier.label());
    println!("  Lenient ignores empty stages when comparing, so the short");
    println!("  path matches a sparse board. Strict falls back to per-stage");
    println!("  credit whenever any stage is empty.");
}
