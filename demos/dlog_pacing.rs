use std::thread;
use std::time::{Duration, Instant};

use zk_card_clash::{mod_pow, DlogSearch, PacedSearch, SearchStatus};

fn main() {
    // A search that resolves while we watch.
    let modulus = 10_007;
    let secret = 4_021;
    let target = mod_pow(5, secret, modulus);
    println!("Searching for x with 5^x = {target} (mod {modulus})...");

    let interval = Duration::from_millis(50);
    let mut paced = PacedSearch::new(DlogSearch::new(5, target, modulus), interval, 500);
    loop {
        thread::sleep(interval);
        match paced.poll(Instant::now()) {
            SearchStatus::Running { tried } => println!("  {tried} exponents tried"),
            SearchStatus::Found { exponent } => {
                println!("  found x = {exponent}");
                if mod_pow(5, exponent, modulus) != target {
                    eprintln!("found exponent does not check out");
                    std::process::exit(1);
                }
                break;
            }
            SearchStatus::Exhausted => {
                eprintln!("search exhausted; the instance was supposed to be solvable");
                std::process::exit(1);
            }
        }
    }
    println!("A resolved search cancels its own ticker: active = {}", paced.is_active());

    // An abandoned search stops costing anything once cancelled.
    println!();
    println!("Starting a hopeless search, then walking away from it...");
    let mut abandoned = PacedSearch::new(
        DlogSearch::with_bound(3, 2, 1_000_003, 1_000_000),
        interval,
        500,
    );
    thread::sleep(interval * 3);
    let before = abandoned.poll(Instant::now());
    if let SearchStatus::Running { tried } = before {
        println!("  {tried} exponents tried so far");
    }
    abandoned.cancel();
    thread::sleep(interval * 4);
    let after = abandoned.poll(Instant::now());
    println!("  after cancelling and waiting: {after:?}");
    println!("  active = {}; the elapsed ticks were dropped, not banked", abandoned.is_active());
}
