//! Time sources for trial measurement.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic time readings in milliseconds.
///
/// Only differences between readings are meaningful.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by [`Instant`], measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
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
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// Every measured region spans exactly one step, which makes trial counts
/// reproducible in tests.
#[derive(Debug)]
pub struct StepClock {
    current: Cell<f64>,
    step: Cell<f64>,
}

impl StepClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            current: Cell::new(0.0),
            step: Cell::new(step_ms),
        }
    }

    pub fn set_step(&self, step_ms: f64) {
        self.step.set(step_ms);
    }

    /// Moves the clock forward without a reading, e.g. to simulate setup work.
    pub fn advance(&self, ms: f64) {
        self.current.set(self.current.get() + ms);
    }
}

impl Clock for StepClock {
    fn now(&self) -> f64 {
        let t = self.current.get();
        self.current.set(t + self.step.get());
        t
    }
}
