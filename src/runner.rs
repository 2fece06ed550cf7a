//! Single-trial execution.
//!
//! A trial hands the workload a [`Measure`] handle. The workload may do any
//! amount of untimed setup and then calls [`Measure::measure`] around the
//! region it wants timed. A trial in which the workload never calls
//! `measure` is rejected instead of being reported as a zero-length sample.

use std::hint::black_box;

use tracing::trace;

use crate::clock::Clock;
use crate::error::{BenchError, Result};

/// Capability handed to a workload once per trial to bracket its timed region.
pub struct Measure<'c> {
    clock: &'c dyn Clock,
    start: f64,
    end: f64,
    called: bool,
}

impl<'c> Measure<'c> {
    fn new(clock: &'c dyn Clock) -> Self {
        Self {
            clock,
            start: 0.0,
            end: 0.0,
            called: false,
        }
    }

    /// Times `f`. If called more than once in a trial, the last region counts.
    #[inline]
    pub fn measure<T, F>(&mut self, f: F)
    where
        F: FnOnce() -> T,
    {
        self.called = true;
        self.start = self.clock.now();
        black_box(f());
        self.end = self.clock.now();
    }

    fn elapsed(&self) -> Option<f64> {
        self.called.then(|| self.end - self.start)
    }
}

/// Runs one trial of a fancy workload and returns the measured time in ms.
pub fn run_once<F>(clock: &dyn Clock, workload: &mut F) -> Result<f64>
where
    F: FnMut(&mut Measure<'_>),
{
    let mut m = Measure::new(clock);
    workload(&mut m);
    let elapsed = m.elapsed().ok_or(BenchError::ProtocolViolation)?;
    trace!(elapsed_ms = elapsed, "trial complete");
    Ok(elapsed)
}

/// Adapts a plain workload so that the whole call is the measured region.
pub fn measure_all<T, F>(mut f: F) -> impl FnMut(&mut Measure<'_>)
where
    F: FnMut() -> T,
{
    move |m: &mut Measure<'_>| m.measure(&mut f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::StepClock;

    #[test]
    fn test_measured_region_elapsed() {
        let clock = StepClock::new(0.5);
        let elapsed = run_once(&clock, &mut |m: &mut Measure<'_>| m.measure(|| 1 + 1)).unwrap();
        assert_eq!(elapsed, 0.5);
    }

    #[test]
    fn test_setup_is_not_timed() {
        let clock = StepClock::new(1.0);
        let elapsed = run_once(&clock, &mut |m: &mut Measure<'_>| {
            clock.advance(500.0);
            m.measure(|| ());
        })
        .unwrap();
        assert_eq!(elapsed, 1.0);
    }

    #[test]
    fn test_missing_measure_is_protocol_violation() {
        let clock = StepClock::new(1.0);
        let err = run_once(&clock, &mut |_m: &mut Measure<'_>| {}).unwrap_err();
        assert!(matches!(err, BenchError::ProtocolViolation));
    }

    #[test]
    fn test_last_region_wins() {
        let clock = StepClock::new(1.0);
        let elapsed = run_once(&clock, &mut |m: &mut Measure<'_>| {
            m.measure(|| ());
            clock.set_step(4.0);
            m.measure(|| ());
        })
        .unwrap();
        assert_eq!(elapsed, 4.0);
    }

    #[test]
    fn test_plain_workload_runs_once_per_trial() {
        let clock = StepClock::new(1.0);
        let mut calls = 0;
        {
            let mut wrapped = measure_all(|| calls += 1);
            run_once(&clock, &mut wrapped).unwrap();
            run_once(&clock, &mut wrapped).unwrap();
        }
        assert_eq!(calls, 2);
    }
}
