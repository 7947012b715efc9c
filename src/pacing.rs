//! Cancellable pacing for delayed and repeated work.
//!
//! The engine never sleeps or spawns threads. Anything that happens
//! "later" is a [`Ticker`] the host polls with its own clock; a ticker
//! that is cancelled before its next poll simply never fires. This
//! keeps auto-advance delays and stepped searches testable with a fake
//! clock and makes teardown a flag write instead of a race.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cadence {
    Every(Duration),
    Once(Duration),
}

/// A poll-driven timer, either repeating or one-shot.
#[derive(Clone, Debug)]
pub struct Ticker {
    cadence: Cadence,
    anchor: Instant,
    fired: bool,
    cancelled: bool,
}

impl Ticker {
    /// A repeating ticker anchored at the current instant.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn every(interval: Duration) -> Ticker {
        Ticker::every_from(interval, Instant::now())
    }

    /// A repeating ticker anchored at `start`, for callers that manage
    /// their own clock.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn every_from(interval: Duration, start: Instant) -> Ticker {
        assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Ticker {
            cadence: Cadence::Every(interval),
            anchor: start,
            fired: false,
            cancelled: false,
        }
    }

    /// A one-shot ticker that comes due `delay` after now.
    pub fn once(delay: Duration) -> Ticker {
        Ticker::once_from(delay, Instant::now())
    }

    /// A one-shot ticker that comes due `delay` after `start`.
    pub fn once_from(delay: Duration, start: Instant) -> Ticker {
        Ticker {
            cadence: Cadence::Once(delay),
            anchor: start,
            fired: false,
            cancelled: false,
        }
    }

    /// How many times the ticker has come due since the last poll.
    ///
    /// A repeating ticker reports every whole interval that elapsed and
    /// keeps its phase, so a late poll catches up without drifting. A
    /// one-shot ticker reports 1 exactly once. Cancelled tickers always
    /// report 0.
    pub fn due(&mut self, now: Instant) -> u32 {
        if self.cancelled {
            return 0;
        }
        match self.cadence {
            Cadence::Every(interval) => {
                let elapsed = now.saturating_duration_since(self.anchor);
                let ticks =
                    u32::try_from(elapsed.as_nanos() / interval.as_nanos()).unwrap_or(u32::MAX);
                if ticks > 0 {
                    self.anchor += interval.saturating_mul(ticks);
                }
                ticks
            }
            Cadence::Once(delay) => {
                if self.fired || now.saturating_duration_since(self.anchor) < delay {
                    0
                } else {
                    self.fired = true;
                    1
                }
            }
        }
    }

    /// Stops the ticker. No poll after this reports a tick.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the ticker can still fire.
    pub fn is_active(&self) -> bool {
        if self.cancelled {
            return false;
        }
        match self.cadence {
            Cadence::Every(_) => true,
            Cadence::Once(_) => !self.fired,
        }
    }
}
