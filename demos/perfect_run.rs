use zk_card_clash::{
    Advance, Catalog, GameController, MemoryStore, PathMatching, DEFAULT_NAMESPACE,
};

fn main() {
    let mut game = GameController::new(
        Catalog::builtin(),
        Box::new(MemoryStore::new()),
        DEFAULT_NAMESPACE,
        PathMatching::Lenient,
    )
    .expect("memory store never fails to load");

    let worlds: Vec<Vec<String>> = game
        .catalog()
        .worlds()
        .iter()
        .map(|world| world.scenarios.iter().map(|s| s.id.clone()).collect())
        .collect();

    for scenario_ids in worlds {
        for scenario_id in scenario_ids {
            game.start_scenario(&scenario_id).expect("unlock chain holds");
            let path = game
                .current_scenario()
                .expect("scenario just started")
                .optimal_path
                .clone();
            for (stage, card) in path.iter().enumerate() {
                game.place_card(stage, card).expect("optimal cards are dealt");
            }
            let outcome = game.submit_solution().expect("every stage is filled");
            println!(
                "{scenario_id:<24} {:>3} ({})",
                outcome.score,
                outcome.tier.label()
            );
            if outcome.score != 100 {
                eprintln!("optimal path did not score 100");
                std::process::exit(1);
            }
            match outcome.advance {
                Advance::WorldComplete {
                    world,
                    unlocked_next: Some(next),
                } => println!("  {world} complete, {next} unlocked"),
                Advance::WorldComplete {
                    world,
                    unlocked_next: None,
                } => println!("  {world} complete, nothing left to unlock"),
                _ => {}
            }
        }
    }

    println!();
    println!("final record:");
    for world in game.catalog().worlds() {
        let done = game.progress().is_world_complete(world);
        println!(
            "  {:<18} {}",
            world.id,
            if done { "complete" } else { "incomplete" }
        );
    }
    let tally = game.progress().completed_scenarios.len();
    println!("{tally} scenarios passed with a perfect score.");
}
