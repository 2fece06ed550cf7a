//! Warmup and sampling phases.
//!
//! Both phases are built on [`run_once`]. Warmup runs at least
//! [`MIN_WARMUP_TRIALS`] trials and at least `warmup_time` ms, and its mean
//! trial time decides how many samples the measurement phase takes.

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::Result;
use crate::options::{BenchOptions, PartialOptions};
use crate::report::BenchmarkReport;
use crate::runner::{measure_all, run_once, Measure};
use crate::store::Session;

/// Warmup always runs at least this many trials, however fast each one is.
pub const MIN_WARMUP_TRIALS: u64 = 4;

// Upper bound on the up-front allocation for sample times.
const MAX_PREALLOCATED_SAMPLES: u64 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarmupEstimate {
    pub trials: u64,
    pub total_time: f64,
}

impl WarmupEstimate {
    /// Mean time of one warmup trial in ms.
    pub fn per_iteration(&self) -> f64 {
        self.total_time / self.trials as f64
    }
}

/// Runs warmup trials until both the trial floor and the time budget are met.
///
/// If the clock has seen no elapsed time by the end of the trial floor,
/// warmup stops there: further trials cannot move the estimate off zero.
pub fn warmup<F>(clock: &dyn Clock, warmup_time: f64, workload: &mut F) -> Result<WarmupEstimate>
where
    F: FnMut(&mut Measure<'_>),
{
    let mut trials = 0u64;
    let mut total_time = 0.0;
    while trials < MIN_WARMUP_TRIALS || total_time < warmup_time {
        if trials >= MIN_WARMUP_TRIALS && total_time <= 0.0 {
            warn!(trials, "clock registered no elapsed time during warmup");
            break;
        }
        total_time += run_once(clock, workload)?;
        trials += 1;
    }
    Ok(WarmupEstimate { trials, total_time })
}

/// Number of samples to take: the larger of the `samples` floor and the
/// count that fills `test_time` at the estimated per-iteration cost.
///
/// A zero estimate (clock too coarse to see the workload) yields the floor.
/// At least one sample is always taken so the mean is defined.
pub fn derive_sample_count(options: &BenchOptions, per_iteration: f64) -> u64 {
    let by_time = (options.test_time / per_iteration).floor();
    let count = if per_iteration > 0.0 && by_time.is_finite() && by_time > 0.0 {
        options.samples.max(by_time as u64)
    } else {
        options.samples
    };
    count.max(1)
}

fn sample<F>(clock: &dyn Clock, count: u64, workload: &mut F) -> Result<(Vec<f64>, f64)>
where
    F: FnMut(&mut Measure<'_>),
{
    let mut times = Vec::with_capacity(count.min(MAX_PREALLOCATED_SAMPLES) as usize);
    let mut total = 0.0;
    for _ in 0..count {
        let t = run_once(clock, workload)?;
        times.push(t);
        total += t;
    }
    Ok((times, total))
}

impl<C: Clock> Session<C> {
    /// Benchmarks `workload`, timing each call in full.
    pub fn run_benchmark<T, F>(
        &mut self,
        options: impl Into<PartialOptions>,
        workload: F,
    ) -> Result<BenchmarkReport>
    where
        F: FnMut() -> T,
    {
        self.run_benchmark_fancy(options, measure_all(workload))
    }

    /// Benchmarks a workload that marks its own timed region with
    /// [`Measure::measure`].
    ///
    /// A named run replaces any earlier report of the same name in this
    /// session. Nothing is recorded if any trial fails.
    pub fn run_benchmark_fancy<F>(
        &mut self,
        options: impl Into<PartialOptions>,
        mut workload: F,
    ) -> Result<BenchmarkReport>
    where
        F: FnMut(&mut Measure<'_>),
    {
        let options = options.into().resolve();
        let label = options.name.as_deref().unwrap_or("<unnamed>");
        let clock: &dyn Clock = &self.clock;

        let estimate = warmup(clock, options.warmup_time, &mut workload)?;
        let per_iteration = estimate.per_iteration();
        if !options.quiet {
            info!(
                benchmark = label,
                "warmup: {} iterations, {:.6} ms/iter estimated",
                estimate.trials,
                per_iteration
            );
        }

        let count = derive_sample_count(&options, per_iteration);
        if !options.quiet {
            info!(
                benchmark = label,
                "sampling {} iterations, ~{:.0} ms expected",
                count,
                count as f64 * per_iteration
            );
        }

        let (sample_times, total) = sample(clock, count, &mut workload)?;
        let mean_time = total / count as f64;
        if !options.quiet {
            info!(benchmark = label, "{:.6} ms/iter", mean_time);
        }
        debug!(benchmark = label, samples = count, total_ms = total, "benchmark complete");

        let report = BenchmarkReport {
            mean_time,
            sample_times,
            options,
        };
        if let Some(name) = &report.options.name {
            self.reports.insert(name.clone(), report.clone());
        }
        Ok(report)
    }
}
