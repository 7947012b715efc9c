//! Discrete-logarithm lab: brute force on a leash.
//!
//! The lab's lesson is watching exhaustive search lose. [`DlogSearch`]
//! examines a handful of exponents per call so a frontend can show the
//! counter climb, and [`PacedSearch`] couples it to a [`Ticker`] so an
//! abandoned widget stops consuming cycles the moment it is cancelled.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::modmath::{mod_pow, mul_mod};
use crate::pacing::Ticker;

/// Where a search currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Still stepping.
    Running {
        /// Exponents examined so far.
        tried: u64,
    },
    /// A solution was found.
    Found {
        /// An `x` with `base^x = target (mod modulus)`.
        exponent: u64,
    },
    /// Every exponent in the bound was examined without a hit.
    Exhausted,
}

/// Incremental brute-force search for `x` in `base^x = target (mod
/// modulus)`, trying exponents `0, 1, 2, ...` in order.
#[derive(Clone, Debug)]
pub struct DlogSearch {
    base: u64,
    target: u64,
    modulus: u64,
    current_power: u64,
    next_exponent: u64,
    bound: u64,
    outcome: Option<SearchStatus>,
}

impl DlogSearch {
    /// A search over the full exponent range `0..modulus-1`, which
    /// covers every power the base can reach.
    ///
    /// # Panics
    ///
    /// Panics if `modulus < 2`.
    pub fn new(base: u64, target: u64, modulus: u64) -> DlogSearch {
        assert!(modulus >= 2, "modulus must be at least 2");
        DlogSearch::with_bound(base, target, modulus, modulus - 1)
    }

    /// A search that gives up after `bound` exponents. Demos use small
    /// bounds to show exhaustion without waiting for it.
    ///
    /// # Panics
    ///
    /// Panics if `modulus < 2`.
    pub fn with_bound(base: u64, target: u64, modulus: u64, bound: u64) -> DlogSearch {
        assert!(modulus >= 2, "modulus must be at least 2");
        DlogSearch {
            base: base % modulus,
            target: target % modulus,
            modulus,
            current_power: 1 % modulus,
            next_exponent: 0,
            bound,
            outcome: None,
        }
    }

    /// A fresh instance whose target is a real power of the base, so
    /// the search always has something to find.
    pub fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> DlogSearch {
        const LAB_PRIMES: [u64; 8] = [101, 211, 307, 401, 503, 601, 701, 809];
        let modulus = LAB_PRIMES[rng.gen_range(0..LAB_PRIMES.len())];
        let base = rng.gen_range(2..modulus);
        let secret = rng.gen_range(1..modulus - 1);
        let target = mod_pow(base, secret, modulus);
        DlogSearch::new(base, target, modulus)
    }

    /// The base `g` of the instance.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The target `h` the search is solving for.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The modulus `p` of the instance.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Examines up to `steps` more exponents and reports where the
    /// search stands. A resolved search stays resolved.
    pub fn advance(&mut self, steps: u64) -> SearchStatus {
        for _ in 0..steps {
            if self.outcome.is_some() {
                break;
            }
            if self.next_exponent >= self.bound {
                log::debug!("[DLOG] exhausted after {} exponents", self.bound);
                self.outcome = Some(SearchStatus::Exhausted);
                break;
            }
            if self.current_power == self.target {
                log::debug!("[DLOG] found exponent {}", self.next_exponent);
                self.outcome = Some(SearchStatus::Found {
                    exponent: self.next_exponent,
                });
                break;
            }
            self.current_power = mul_mod(self.current_power, self.base, self.modulus);
            self.next_exponent += 1;
        }
        self.status()
    }

    /// The current status without advancing.
    pub fn status(&self) -> SearchStatus {
        self.outcome.unwrap_or(SearchStatus::Running {
            tried: self.next_exponent,
        })
    }
}

/// A search driven by a repeating ticker: each elapsed tick advances
/// the search by a fixed number of steps.
#[derive(Clone, Debug)]
pub struct PacedSearch {
    search: DlogSearch,
    ticker: Ticker,
    steps_per_tick: u64,
}

impl PacedSearch {
    /// Paces a search at `steps_per_tick` exponents per `interval`,
    /// anchored at now.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn new(search: DlogSearch, interval: Duration, steps_per_tick: u64) -> PacedSearch {
        PacedSearch {
            search,
            ticker: Ticker::every(interval),
            steps_per_tick,
        }
    }

    /// Like [`PacedSearch::new`] but anchored at an explicit instant,
    /// for callers driving a fake clock.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn anchored(
        search: DlogSearch,
        interval: Duration,
        steps_per_tick: u64,
        start: Instant,
    ) -> PacedSearch {
        PacedSearch {
            search,
            ticker: Ticker::every_from(interval, start),
            steps_per_tick,
        }
    }

    /// Advances by however many ticks have elapsed and reports status.
    /// Once the search resolves, the ticker is cancelled and later
    /// polls are free.
    pub fn poll(&mut self, now: Instant) -> SearchStatus {
        let ticks = self.ticker.due(now);
        if ticks > 0 {
            let steps = self.steps_per_tick.saturating_mul(u64::from(ticks));
            self.search.advance(steps);
        }
        let status = self.search.status();
        if !matches!(status, SearchStatus::Running { .. }) {
            self.ticker.cancel();
        }
        status
    }

    /// Stops the pacing. The underlying search keeps whatever progress
    /// it made.
    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    /// Whether future polls can still advance the search.
    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// The search being paced.
    pub fn search(&self) -> &DlogSearch {
        &self.search
    }
}
