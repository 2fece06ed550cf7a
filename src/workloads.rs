//! Built-in workloads for the command-line runner.
//!
//! Inputs are generated from a seeded ChaCha8 stream so repeated runs time
//! the same work.

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::RngCore;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clock::Clock;
use crate::error::Result;
use crate::options::BenchOptions;
use crate::report::BenchmarkReport;
use crate::runner::Measure;
use crate::store::Session;

const SUM_LEN: usize = 4_096;
const SORT_LEN: usize = 10_000;
const ALLOC_LEN: usize = 1_024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Workload {
    /// Empty closure; shows the harness floor.
    Noop,
    /// Wrapping sum over a fixed vector of random words.
    Sum,
    /// Sort of a shuffled vector; the copy made before sorting is untimed.
    Sort,
    /// Allocate and fill a vector.
    Alloc,
}

impl Workload {
    pub const ALL: [Workload; 4] = [Workload::Noop, Workload::Sum, Workload::Sort, Workload::Alloc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::Noop => "noop",
            Workload::Sum => "sum",
            Workload::Sort => "sort",
            Workload::Alloc => "alloc",
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    pub seed: u64,
}

impl WorkloadConfig {
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Random words summed by [`Workload::Sum`].
    pub fn sum_input(&self) -> Vec<u64> {
        let mut rng = self.rng();
        (0..SUM_LEN).map(|_| rng.next_u64()).collect()
    }

    /// Shuffled permutation sorted by [`Workload::Sort`].
    pub fn sort_input(&self) -> Vec<u32> {
        let mut input: Vec<u32> = (0..SORT_LEN as u32).collect();
        input.shuffle(&mut self.rng());
        input
    }
}

/// Runs `workload` under `options`, recorded under the workload's name.
pub fn run<C: Clock>(
    session: &mut Session<C>,
    cfg: &WorkloadConfig,
    workload: Workload,
    options: &BenchOptions,
) -> Result<BenchmarkReport> {
    let options = BenchOptions {
        name: Some(workload.as_str().to_string()),
        ..options.clone()
    };
    match workload {
        Workload::Noop => session.run_benchmark(options, || ()),
        Workload::Sum => {
            let words = cfg.sum_input();
            session.run_benchmark(options, || {
                words.iter().fold(0u64, |acc, w| acc.wrapping_add(*w))
            })
        }
        Workload::Sort => {
            let input = cfg.sort_input();
            session.run_benchmark_fancy(options, |m: &mut Measure<'_>| {
                let mut data = input.clone();
                m.measure(|| data.sort_unstable());
            })
        }
        Workload::Alloc => session.run_benchmark(options, || {
            let mut v = Vec::with_capacity(ALLOC_LEN);
            v.extend(0..ALLOC_LEN as u64);
            v
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::StepClock;

    fn tiny_options() -> BenchOptions {
        BenchOptions {
            warmup_time: 0.0,
            test_time: 0.0,
            samples: 3,
            name: None,
            quiet: true,
        }
    }

    #[test]
    fn test_every_workload_records_under_its_name() {
        let mut session = Session::with_clock(StepClock::new(1.0));
        let cfg = WorkloadConfig { seed: 7 };
        for w in Workload::ALL {
            let report = run(&mut session, &cfg, w, &tiny_options()).unwrap();
            assert_eq!(report.sample_times.len(), 3);
            assert_eq!(report.options.name.as_deref(), Some(w.as_str()));
        }
        let names: Vec<_> = session.reports().keys().cloned().collect();
        assert_eq!(names, vec!["alloc", "noop", "sort", "sum"]);
    }

    #[test]
    fn test_inputs_depend_only_on_seed() {
        let a = WorkloadConfig { seed: 42 };
        let b = WorkloadConfig { seed: 42 };
        let other = WorkloadConfig { seed: 43 };

        assert_eq!(a.sum_input(), b.sum_input());
        assert_eq!(a.sort_input(), b.sort_input());
        assert_ne!(a.sum_input(), other.sum_input());
        assert_ne!(a.sort_input(), other.sort_input());
    }

    #[test]
    fn test_sort_input_is_a_shuffled_permutation() {
        let input = WorkloadConfig { seed: 7 }.sort_input();
        let identity: Vec<u32> = (0..SORT_LEN as u32).collect();
        assert_ne!(input, identity);

        let mut sorted = input.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, identity);
    }
}
