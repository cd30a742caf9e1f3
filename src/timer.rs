//! Time probes for search time management.
//!
//! A probe answers "how many milliseconds are left in this turn". The search
//! polls it on entry to every recursive call and aborts once the answer drops
//! under the configured threshold.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the remaining turn time, in milliseconds.
///
/// Negative values mean the turn is already over.
pub trait TimeProbe {
    fn time_left(&self) -> f64;
}

impl<F> TimeProbe for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Calculate the duration from `now` until a deadline, if the deadline is in the future.
///
/// Returns `None` if the deadline has already passed.
#[inline]
fn duration_until(deadline: Instant, now: Instant) -> Option<Duration> {
    if deadline > now {
        Some(deadline - now)
    } else {
        None
    }
}

/// Wall-clock deadline for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    deadline: Instant,
}

impl Deadline {
    /// Deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Deadline {
            deadline: Instant::now() + budget,
        }
    }

    /// Deadline `ms` milliseconds from now.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }

    /// Deadline at a fixed instant.
    #[must_use]
    pub const fn at(deadline: Instant) -> Self {
        Deadline { deadline }
    }

    /// Time until the deadline, zero once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        duration_until(self.deadline, Instant::now()).unwrap_or(Duration::ZERO)
    }
}

impl TimeProbe for Deadline {
    fn time_left(&self) -> f64 {
        let now = Instant::now();
        match duration_until(self.deadline, now) {
            Some(left) => left.as_secs_f64() * 1000.0,
            None => -(now - self.deadline).as_secs_f64() * 1000.0,
        }
    }
}

/// Deterministic probe: reports `plenty` for the first `queries` polls and
/// `0.0` afterwards.
///
/// Lets tests and benchmarks cut a search off after a fixed number of nodes
/// regardless of machine speed.
#[derive(Debug)]
pub struct CountdownProbe {
    remaining: Cell<u64>,
    plenty: f64,
}

impl CountdownProbe {
    #[must_use]
    pub fn new(queries: u64) -> Self {
        CountdownProbe {
            remaining: Cell::new(queries),
            plenty: 1_000.0,
        }
    }

    /// Number of polls still answered with time to spare.
    #[must_use]
    pub fn queries_left(&self) -> u64 {
        self.remaining.get()
    }
}

impl TimeProbe for CountdownProbe {
    fn time_left(&self) -> f64 {
        let left = self.remaining.get();
        if left == 0 {
            return 0.0;
        }
        self.remaining.set(left - 1);
        self.plenty
    }
}
