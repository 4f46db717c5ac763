//! Time sources and the deadline a derivation is bounded by.
//!
//! The search never reads the system clock directly: it is handed a [`Deadline`] which
//! samples a [`Clock`]. Production code uses [`MonotonicClock`]; tests can drive a manual
//! clock to hit the timeout deterministically.

use std::time::{Duration, Instant};

/// Time allowed for one derivation attempt unless configured otherwise.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(1);

/// A source of monotonically increasing time readings.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`], with its origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A time budget measured against a [`Clock`] from the moment it was started.
#[derive(Debug, Clone, Copy)]
pub struct Deadline<C> {
    clock: C,
    started: Duration,
    budget: Duration,
}

impl<C: Clock> Deadline<C> {
    /// Start the budget now, as read from `clock`.
    #[must_use]
    pub fn start(clock: C, budget: Duration) -> Self {
        let started = clock.now();
        Self {
            clock,
            started,
            budget,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Whether more time than the budget has passed. Reaching it exactly is not enough.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.elapsed() > self.budget
    }

    #[must_use]
    pub const fn budget(&self) -> Duration {
        self.budget
    }
}
