//! Line-oriented terminal frontend for ZK Card Clash.
//!
//! This binary renders state and forwards commands; every rule lives in
//! the library. It drives world and scenario selection, card placement,
//! hints and scoring, and exposes the math labs behind the game's
//! widgets as `lab` subcommands.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use zk_card_clash::{
    avalanche_bits, commit_polynomial, digest_report, ext_gcd, gcd, is_probable_prime, mod_inv,
    mod_pow, mul_mod, open_polynomial, random_blinding, random_inverse_practice,
    random_pow_practice, verify_opening, Advance, Catalog, CurvePoint, DlogSearch, FileStore,
    GameController, PacedSearch, PathMatching, Screen, SearchStatus, ToyCurve, DEFAULT_NAMESPACE,
    HINT_LIMIT,
};

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Usage: clash [--save <dir>] [--profile <name>] [--strict-paths]");
    println!("  --save <dir>      directory for progress files (default: ./saves)");
    println!("  --profile <name>  progress namespace (default: {DEFAULT_NAMESPACE})");
    println!("  --strict-paths    alternative paths only match fully placed boards");
}

fn print_help() {
    println!("Navigation:");
    println!("  worlds              list worlds with lock state");
    println!("  open <world>        enter a world's scenario list");
    println!("  scenarios           list the current world's scenarios");
    println!("  play <scenario>     start a scenario");
    println!("  back                one screen up (abandons the board)");
    println!("  menu                back to the title menu");
    println!("  progress            score table across all worlds");
    println!("  tutorial            gameplay walkthrough");
    println!("  mathlab             guided math tutorial");
    println!("  about               about this game");
    println!("  roadmap             planned content");
    println!("Gameplay:");
    println!("  hand                cards dealt for this scenario");
    println!("  board               stages and current placements");
    println!("  inspect <card>      card details");
    println!("  pick <card>         select a card");
    println!("  place <stage> [card]  place the named or selected card");
    println!("  take <stage>        clear a stage");
    println!("  hint <stage>        reveal a stage hint ({HINT_LIMIT} per attempt)");
    println!("  submit              score the board");
    println!("  reset               clear the board, keeping hint debt");
    println!("Labs:");
    println!("  lab pow <b> <e> <m>       modular exponentiation");
    println!("  lab inv <a> <m>           modular inverse");
    println!("  lab gcd <a> <b>           gcd and Bezout coefficients");
    println!("  lab prime <n>             primality check");
    println!("  lab dlog [<g> <h> <m>]    paced brute-force discrete log");
    println!("  lab curve <a> <b> <p>     toy curve orders and points");
    println!("  lab hash <text>           one input through three digests");
    println!("  lab avalanche <a> <b>     differing digest bits of two inputs");
    println!("  lab commit <m> <x> <c..>  blinded polynomial commitment");
    println!("  lab drill <pow|inv>       a practice exercise");
    println!("  quit                save and exit");
}

fn main() {
    env_logger::init();

    let mut save_dir: Option<PathBuf> = None;
    let mut profile = DEFAULT_NAMESPACE.to_string();
    let mut matching = PathMatching::Lenient;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--save" => {
                save_dir = Some(PathBuf::from(
                    args.next()
                        .unwrap_or_else(|| fatal("--save expects a directory")),
                ));
            }
            "--profile" => {
                profile = args
                    .next()
                    .unwrap_or_else(|| fatal("--profile expects a name"));
            }
            "--strict-paths" => {
                matching = PathMatching::Strict;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => fatal(&format!("unknown argument: {other}")),
        }
    }

    let save_dir = save_dir.unwrap_or_else(|| PathBuf::from("saves"));
    let store = FileStore::new(save_dir);
    let mut game = GameController::new(Catalog::builtin(), Box::new(store), profile, matching)
        .unwrap_or_else(|err| fatal(&format!("failed to open profile: {err}")));

    println!("ZK Card Clash. Type `help` for commands.");
    let mut input = String::new();
    loop {
        print!("{}", prompt_for(game.screen()));
        io::stdout().flush().ok();
        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => fatal(&format!("stdin error: {err}")),
        }
        let line = input.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(word) => word,
            None => continue,
        };
        let rest: Vec<&str> = parts.collect();
        match command {
            "help" | "?" => print_help(),
            "worlds" => {
                game.open_world_selection();
                cmd_worlds(&game);
            }
            "open" => cmd_open(&mut game, &rest),
            "scenarios" => cmd_scenarios(&game),
            "play" => cmd_play(&mut game, &rest),
            "back" => {
                game.go_back();
                cmd_where(&game);
            }
            "menu" => {
                game.go_to_main_menu();
                println!("Back at the title menu.");
            }
            "progress" => cmd_progress(&game),
            "tutorial" => cmd_tutorial(&mut game),
            "mathlab" => cmd_math_tutorial(&mut game),
            "about" => cmd_about(&mut game),
            "roadmap" => {
                game.open_expansion_plan();
                println!("Planned expansions: recursive-proof worlds, a deck");
                println!("builder, and head-to-head clashes. None are in yet.");
            }
            "hand" => cmd_hand(&game),
            "board" => cmd_board(&game),
            "inspect" => cmd_inspect(&game, &rest),
            "pick" => cmd_pick(&mut game, &rest),
            "place" => cmd_place(&mut game, &rest),
            "take" => cmd_take(&mut game, &rest),
            "hint" => cmd_hint(&mut game, &rest),
            "submit" => cmd_submit(&mut game),
            "reset" => {
                if let Err(err) = game.reset_attempt() {
                    println!("error: {err}");
                } else {
                    println!("Board cleared. Hint debt stays.");
                }
            }
            "lab" => cmd_lab(&rest),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; try `help`"),
        }
    }

    if let Err(err) = game.persist() {
        eprintln!("failed to save progress: {err}");
    }
    println!("Progress saved. Goodbye.");
}

fn prompt_for(screen: &Screen) -> String {
    match screen {
        Screen::MainMenu => "clash> ".to_string(),
        Screen::WorldSelection => "worlds> ".to_string(),
        Screen::ScenarioSelection(world) => format!("{world}> "),
        Screen::Gameplay(scenario) => format!("{scenario}> "),
        Screen::Tutorial => "tutorial> ".to_string(),
        Screen::MathTutorial => "mathlab> ".to_string(),
        Screen::WorldCompletion(_) => "complete> ".to_string(),
        Screen::About => "about> ".to_string(),
        Screen::ExpansionPlan => "roadmap> ".to_string(),
    }
}

fn cmd_where(game: &GameController) {
    match game.screen() {
        Screen::MainMenu => println!("At the title menu."),
        Screen::WorldSelection => cmd_worlds(game),
        Screen::ScenarioSelection(_) => cmd_scenarios(game),
        Screen::Gameplay(_) => cmd_board(game),
        Screen::WorldCompletion(world) => println!("World `{world}` complete."),
        other => println!("{other:?}"),
    }
}

fn cmd_worlds(game: &GameController) {
    println!("{:<18} {:<10} {}", "world", "state", "name");
    println!("{}", "-".repeat(60));
    for summary in game.world_summaries() {
        let state = if summary.completed {
            "complete"
        } else if summary.unlocked {
            "open"
        } else {
            "locked"
        };
        println!(
            "{:<18} {:<10} {}",
            summary.world.id, state, summary.world.name
        );
    }
}

fn cmd_open(game: &mut GameController, args: &[&str]) {
    let world_id = match args.first() {
        Some(id) => *id,
        None => {
            println!("Usage: open <world>");
            return;
        }
    };
    match game.select_world(world_id) {
        Ok(()) => cmd_scenarios(game),
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_scenarios(game: &GameController) {
    let world_id = match game.screen() {
        Screen::ScenarioSelection(world) => world.clone(),
        _ => {
            println!("Open a world first: `worlds`, then `open <world>`.");
            return;
        }
    };
    match game.scenario_summaries(&world_id) {
        Ok(summaries) => {
            println!("{:<24} {:<10} {:<8} title", "scenario", "state", "score");
            println!("{}", "-".repeat(70));
            for summary in summaries {
                let state = if summary.unlocked { "open" } else { "locked" };
                let score = summary
                    .score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<24} {:<10} {:<8} {}",
                    summary.scenario.id, state, score, summary.scenario.title
                );
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_play(game: &mut GameController, args: &[&str]) {
    let scenario_id = match args.first() {
        Some(id) => *id,
        None => {
            println!("Usage: play <scenario>");
            return;
        }
    };
    match game.start_scenario(scenario_id) {
        Ok(()) => {
            if let Some(scenario) = game.current_scenario() {
                println!("{}", scenario.title);
                println!("{}", scenario.brief);
                println!();
            }
            cmd_board(game);
        }
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_progress(game: &GameController) {
    println!("{:<24} {:<8} passed", "scenario", "score");
    println!("{}", "-".repeat(50));
    for world in game.catalog().worlds() {
        println!("[{}]", world.id);
        for scenario in &world.scenarios {
            let (score, passed) = match game.progress().score_for(&scenario.id) {
                Some(score) => (score.to_string(), game.progress().is_passed(&scenario.id)),
                None => ("-".to_string(), false),
            };
            println!(
                "  {:<22} {:<8} {}",
                scenario.id,
                score,
                if passed { "yes" } else { "no" }
            );
        }
    }
}

fn cmd_hand(game: &GameController) {
    let scenario = match game.current_scenario() {
        Some(scenario) => scenario,
        None => {
            println!("No scenario in progress.");
            return;
        }
    };
    println!("Hand for `{}`:", scenario.id);
    for card_id in &scenario.available_cards {
        match game.catalog().card(card_id) {
            Some(card) => println!("  {:<18} [{}] {}", card.id, card.category, card.name),
            None => println!("  {card_id}"),
        }
    }
    if let Some(attempt) = game.attempt() {
        if let Some(selected) = attempt.selected_card() {
            println!("Selected: {selected}");
        }
    }
}

fn cmd_board(game: &GameController) {
    let scenario = match game.current_scenario() {
        Some(scenario) => scenario,
        None => {
            println!("No scenario in progress.");
            return;
        }
    };
    let attempt = match game.attempt() {
        Some(attempt) => attempt,
        None => return,
    };
    for (i, (stage, slot)) in scenario.stages.iter().zip(attempt.placed()).enumerate() {
        let placed = slot.as_deref().unwrap_or("(empty)");
        println!("{}. {:<22} [{placed}]", i + 1, stage.id);
        println!("   {}", stage.prompt);
    }
    println!(
        "Hints used: {}/{HINT_LIMIT}. `submit` when every stage is filled.",
        attempt.hints_used()
    );
}

fn cmd_inspect(game: &GameController, args: &[&str]) {
    let card_id = match args.first() {
        Some(id) => *id,
        None => {
            println!("Usage: inspect <card>");
            return;
        }
    };
    match game.catalog().card(card_id) {
        Some(card) => {
            println!("{} [{}]", card.name, card.category);
            println!("{}", card.summary);
            for (attribute, rating) in &card.attributes {
                println!("  {attribute}: {rating}");
            }
        }
        None => println!("unknown card `{card_id}`"),
    }
}

fn cmd_pick(game: &mut GameController, args: &[&str]) {
    let card_id = match args.first() {
        Some(id) => *id,
        None => {
            println!("Usage: pick <card>");
            return;
        }
    };
    match game.select_card(card_id) {
        Ok(()) => println!("Picked up {card_id}. `place <stage>` to set it down."),
        Err(err) => println!("error: {err}"),
    }
}

fn parse_stage(raw: &str) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n - 1),
        _ => {
            println!("stage numbers start at 1");
            None
        }
    }
}

fn cmd_place(game: &mut GameController, args: &[&str]) {
    let stage = match args.first().and_then(|raw| parse_stage(raw)) {
        Some(stage) => stage,
        None => {
            println!("Usage: place <stage> [card]");
            return;
        }
    };
    let result = match args.get(1) {
        Some(card_id) => game.place_card(stage, card_id),
        None => game.place_selected_card(stage),
    };
    match result {
        Ok(()) => cmd_board(game),
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_take(game: &mut GameController, args: &[&str]) {
    let stage = match args.first().and_then(|raw| parse_stage(raw)) {
        Some(stage) => stage,
        None => {
            println!("Usage: take <stage>");
            return;
        }
    };
    match game.remove_card(stage) {
        Ok(card) => println!("Took {card} back into the hand."),
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_hint(game: &mut GameController, args: &[&str]) {
    let stage = match args.first().and_then(|raw| parse_stage(raw)) {
        Some(stage) => stage,
        None => {
            println!("Usage: hint <stage>");
            return;
        }
    };
    match game.reveal_hint(stage) {
        Ok(hint) => {
            println!("Stage {}: {}", hint.stage_index + 1, hint.prompt);
            if let Some(card) = hint.suggested_card {
                println!("Consider: {card}");
            }
            if hint.charged {
                println!("Hints used: {}/{HINT_LIMIT} (5 points each).", hint.hints_used);
            } else {
                println!("Already revealed; no extra charge.");
            }
        }
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_submit(game: &mut GameController) {
    let outcome = match game.submit_solution() {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("error: {err}");
            return;
        }
    };
    println!("Score: {} ({})", outcome.score, outcome.tier.label());
    println!("{}", outcome.feedback);
    match outcome.advance {
        Advance::NextScenario { scenario, delay } => {
            println!("Next up: {scenario}.");
            thread::sleep(delay);
            match game.poll_auto_advance(Instant::now()) {
                Ok(Some(_)) => cmd_play_current(game),
                Ok(None) => {}
                Err(err) => println!("error: {err}"),
            }
        }
        Advance::WorldComplete {
            world,
            unlocked_next,
        } => {
            println!("World `{world}` complete!");
            if let Some(next) = unlocked_next {
                println!("Unlocked: `{next}`. `back` to continue.");
            } else {
                println!("That was the last world. Thanks for playing.");
            }
        }
        Advance::Stay => {
            println!("`reset` to clear the board and try again.");
        }
    }
}

fn cmd_play_current(game: &GameController) {
    if let Some(scenario) = game.current_scenario() {
        println!();
        println!("{}", scenario.title);
        println!("{}", scenario.brief);
        println!();
        cmd_board(game);
    }
}

fn cmd_tutorial(game: &mut GameController) {
    game.open_tutorial();
    println!("How to play:");
    println!("  1. Each scenario poses a problem in numbered stages.");
    println!("  2. Fill every stage with a card from the dealt hand:");
    println!("     `pick <card>` then `place <stage>`, or `place <stage> <card>`.");
    println!("  3. `hint <stage>` reveals a strong card, at 5 points per stage.");
    println!("  4. `submit` scores the board from 0 to 100. Score 80 or more");
    println!("     to unlock the next scenario; pass a whole world to open");
    println!("     the next one.");
    if let Err(err) = game.finish_tutorial() {
        println!("error: {err}");
    }
}

fn cmd_math_tutorial(game: &mut GameController) {
    game.open_math_tutorial();
    println!("The math behind the cards, in three stops.");
    println!();
    let pow = mod_pow(7, 128, 13);
    println!("Modular exponentiation is fast: 7^128 mod 13 = {pow},");
    println!("computed in eight squarings, not 128 multiplications.");
    println!();
    let search_space = 101u64 - 1;
    println!("Going backwards is not: given 3^x = 37 (mod 101), brute force");
    println!("must try up to {search_space} exponents. `lab dlog 3 37 101` watches it.");
    println!();
    let value = 9u64;
    if let Some(inverse) = mod_inv(value, 13) {
        println!("Division becomes inversion: 1/{value} mod 13 = {inverse}, because");
        println!("{value} * {inverse} = {} (mod 13).", mul_mod(value, inverse, 13));
    }
    println!();
    println!("`lab drill pow` and `lab drill inv` hand out practice. Done.");
    if let Err(err) = game.finish_math_tutorial() {
        println!("error: {err}");
    }
}

fn cmd_about(game: &mut GameController) {
    game.open_about();
    println!("ZK Card Clash teaches zero-knowledge proofs by building");
    println!("protocols out of technology cards. Three worlds: commitments,");
    println!("interactive proofs, and scaling arguments. The `lab` commands");
    println!("run the real arithmetic the cards describe.");
}

// ---- labs --------------------------------------------------------------

fn cmd_lab(args: &[&str]) {
    let (sub, tail) = match args.split_first() {
        Some(split) => split,
        None => {
            println!("Usage: lab <pow|inv|gcd|prime|dlog|curve|hash|avalanche|commit|drill> ...");
            return;
        }
    };
    match *sub {
        "pow" => lab_pow(tail),
        "inv" => lab_inv(tail),
        "gcd" => lab_gcd(tail),
        "prime" => lab_prime(tail),
        "dlog" => lab_dlog(tail),
        "curve" => lab_curve(tail),
        "hash" => lab_hash(tail),
        "avalanche" => lab_avalanche(tail),
        "commit" => lab_commit(tail),
        "drill" => lab_drill(tail),
        other => println!("unknown lab `{other}`"),
    }
}

fn parse_u64(raw: &str, what: &str) -> Option<u64> {
    match raw.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("invalid {what}: `{raw}`");
            None
        }
    }
}

fn lab_pow(args: &[&str]) {
    if args.len() != 3 {
        println!("Usage: lab pow <base> <exponent> <modulus>");
        return;
    }
    let (base, exponent, modulus) = match (
        parse_u64(args[0], "base"),
        parse_u64(args[1], "exponent"),
        parse_u64(args[2], "modulus"),
    ) {
        (Some(b), Some(e), Some(m)) => (b, e, m),
        _ => return,
    };
    if modulus == 0 {
        println!("modulus must be non-zero");
        return;
    }
    println!(
        "{base}^{exponent} mod {modulus} = {}",
        mod_pow(base, exponent, modulus)
    );
}

fn lab_inv(args: &[&str]) {
    if args.len() != 2 {
        println!("Usage: lab inv <value> <modulus>");
        return;
    }
    let (value, modulus) = match (parse_u64(args[0], "value"), parse_u64(args[1], "modulus")) {
        (Some(v), Some(m)) => (v, m),
        _ => return,
    };
    if modulus == 0 {
        println!("modulus must be non-zero");
        return;
    }
    match mod_inv(value, modulus) {
        Some(inverse) => println!(
            "1/{value} mod {modulus} = {inverse}  (check: {value}*{inverse} = {} mod {modulus})",
            mul_mod(value % modulus, inverse, modulus)
        ),
        None => println!("{value} has no inverse mod {modulus}; gcd({value}, {modulus}) != 1"),
    }
}

fn lab_gcd(args: &[&str]) {
    if args.len() != 2 {
        println!("Usage: lab gcd <a> <b>");
        return;
    }
    let (a, b) = match (parse_u64(args[0], "a"), parse_u64(args[1], "b")) {
        (Some(a), Some(b)) => (a, b),
        _ => return,
    };
    let g = gcd(a, b);
    let (_, x, y) = ext_gcd(a as i128, b as i128);
    println!("gcd({a}, {b}) = {g}");
    println!("Bezout: ({x})*{a} + ({y})*{b} = {g}");
}

fn lab_prime(args: &[&str]) {
    if args.len() != 1 {
        println!("Usage: lab prime <n>");
        return;
    }
    let n = match parse_u64(args[0], "n") {
        Some(n) => n,
        None => return,
    };
    if is_probable_prime(n) {
        println!("{n} is prime");
    } else {
        println!("{n} is composite");
    }
}

fn lab_dlog(args: &[&str]) {
    let search = if args.is_empty() {
        let instance = DlogSearch::random_instance(&mut rand::thread_rng());
        println!(
            "Random instance: find x with {}^x = {} (mod {}).",
            instance.base(),
            instance.target(),
            instance.modulus()
        );
        instance
    } else {
        if args.len() != 3 {
            println!("Usage: lab dlog [<base> <target> <modulus>]");
            return;
        }
        let (base, target, modulus) = match (
            parse_u64(args[0], "base"),
            parse_u64(args[1], "target"),
            parse_u64(args[2], "modulus"),
        ) {
            (Some(b), Some(t), Some(m)) => (b, t, m),
            _ => return,
        };
        if modulus < 2 {
            println!("modulus must be at least 2");
            return;
        }
        if modulus > 100_000 {
            println!("keep the modulus at or below 100000 for the lab");
            return;
        }
        DlogSearch::new(base, target, modulus)
    };

    let interval = Duration::from_millis(100);
    let mut paced = PacedSearch::new(search, interval, 2_000);
    loop {
        thread::sleep(interval);
        match paced.poll(Instant::now()) {
            SearchStatus::Running { tried } => println!("  tried {tried} exponents..."),
            SearchStatus::Found { exponent } => {
                println!("  found x = {exponent}");
                break;
            }
            SearchStatus::Exhausted => {
                println!("  exhausted the range without a hit; the target is not a power of the base");
                break;
            }
        }
    }
}

fn lab_curve(args: &[&str]) {
    if args.len() != 3 {
        println!("Usage: lab curve <a> <b> <p>");
        return;
    }
    let (a, b, p) = match (
        parse_u64(args[0], "a"),
        parse_u64(args[1], "b"),
        parse_u64(args[2], "p"),
    ) {
        (Some(a), Some(b), Some(p)) => (a, b, p),
        _ => return,
    };
    if p <= 3 || !is_probable_prime(p) {
        println!("p must be a prime greater than 3");
        return;
    }
    if p > 1_000 {
        println!("keep p at or below 1000 for the lab");
        return;
    }
    let a_reduced = a % p;
    let b_reduced = b % p;
    let a_cubed = mul_mod(a_reduced, mul_mod(a_reduced, a_reduced, p), p);
    let discriminant = (mul_mod(4, a_cubed, p) + mul_mod(27, mul_mod(b_reduced, b_reduced, p), p)) % p;
    if discriminant == 0 {
        println!("that curve is singular; pick different coefficients");
        return;
    }
    let curve = ToyCurve::new(a, b, p);
    let points = curve.points();
    println!(
        "y^2 = x^3 + {}x + {} over F_{p}: {} points (with infinity)",
        curve.a(),
        curve.b(),
        points.len()
    );
    for point in points.iter().take(12) {
        if let CurvePoint::Affine { x, y } = point {
            println!("  ({x}, {y})  order {}", curve.order_of(*point));
        }
    }
    if points.len() > 12 {
        println!("  ... and {} more", points.len() - 12);
    }
}

fn lab_hash(args: &[&str]) {
    if args.is_empty() {
        println!("Usage: lab hash <text>");
        return;
    }
    let text = args.join(" ");
    println!("Input: {text:?}");
    for report in digest_report(text.as_bytes()) {
        println!("  {:<12} {}", report.algorithm, report.hex());
    }
}

fn lab_avalanche(args: &[&str]) {
    if args.len() != 2 {
        println!("Usage: lab avalanche <a> <b>");
        return;
    }
    let first = zk_card_clash::sha256(args[0].as_bytes());
    let second = zk_card_clash::sha256(args[1].as_bytes());
    let bits = avalanche_bits(&first, &second);
    println!("SHA-256({:?}) and SHA-256({:?}) differ in {bits} of 256 bits", args[0], args[1]);
}

fn lab_commit(args: &[&str]) {
    if args.len() < 3 {
        println!("Usage: lab commit <modulus> <point> <coefficients...>");
        println!("  commits to c0 + c1*x + ... , then opens at the point");
        return;
    }
    let modulus = match parse_u64(args[0], "modulus") {
        Some(m) if m > 0 => m,
        _ => {
            println!("modulus must be non-zero");
            return;
        }
    };
    let point = match parse_u64(args[1], "point") {
        Some(p) => p,
        None => return,
    };
    let mut coefficients = Vec::new();
    for raw in &args[2..] {
        match parse_u64(raw, "coefficient") {
            Some(c) => coefficients.push(c),
            None => return,
        }
    }
    let blinding = random_blinding(&mut rand::thread_rng());
    let commitment = commit_polynomial(&coefficients, modulus, &blinding);
    println!("commitment: {}", commitment.hex());
    let opening = open_polynomial(&coefficients, modulus, blinding, point);
    println!("opened at x = {}: value = {}", opening.point, opening.value);
    println!(
        "verification: {}",
        if verify_opening(&commitment, &opening) {
            "accepted"
        } else {
            "rejected"
        }
    );
}

fn lab_drill(args: &[&str]) {
    let kind = args.first().copied().unwrap_or("pow");
    let mut rng = rand::thread_rng();
    match kind {
        "pow" => {
            let practice = random_pow_practice(&mut rng);
            println!(
                "Compute {}^{} mod {}:",
                practice.base, practice.exponent, practice.modulus
            );
            if let Some(answer) = read_answer() {
                if answer == practice.answer {
                    println!("Correct.");
                } else {
                    println!("Not quite; the answer is {}.", practice.answer);
                }
            }
        }
        "inv" => {
            let practice = random_inverse_practice(&mut rng);
            println!(
                "Find the inverse of {} mod {}:",
                practice.value, practice.modulus
            );
            if let Some(answer) = read_answer() {
                if answer == practice.answer {
                    println!("Correct.");
                } else {
                    println!("Not quite; the answer is {}.", practice.answer);
                }
            }
        }
        other => println!("unknown drill `{other}`; try pow or inv"),
    }
}

fn read_answer() -> Option<u64> {
    print!("> ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => match line.trim().parse::<u64>() {
            Ok(answer) => Some(answer),
            Err(_) => {
                println!("that is not a number");
                None
            }
        },
    }
}
