//! Warmup-then-sample micro-benchmark harness.
//!
//! A [`Session`] owns the report registry. Workloads are run through
//! [`Session::run_benchmark`] (the whole closure is timed) or
//! [`Session::run_benchmark_fancy`] (the closure marks its own timed region
//! through a [`Measure`] handle). Named results accumulate in the session and
//! can be merged into a JSON file or rendered as a table.
//!
//! ```no_run
//! use microbench::{Session, DEFAULT_REPORT_PATH};
//!
//! let mut session = Session::new();
//! session.run_benchmark("vec_push", || {
//!     let mut v = Vec::new();
//!     for i in 0..64 {
//!         v.push(i);
//!     }
//!     v
//! })?;
//! session.run_benchmark_fancy("sort", |b| {
//!     let mut data: Vec<u32> = (0..1024).rev().collect();
//!     b.measure(|| data.sort());
//! })?;
//! session.save_reports(DEFAULT_REPORT_PATH)?;
//! session.print_table(None)?;
//! # Ok::<(), microbench::BenchError>(())
//! ```

pub mod clock;
pub mod engine;
pub mod error;
pub mod options;
pub mod report;
pub mod round;
pub mod runner;
pub mod store;
pub mod table;
pub mod workloads;

pub use clock::{Clock, MonotonicClock, StepClock};
pub use engine::{derive_sample_count, warmup, WarmupEstimate};
pub use error::{BenchError, Result};
pub use options::{BenchOptions, PartialOptions, Profile};
pub use report::{BenchmarkReport, ReportMap};
pub use round::round;
pub use runner::{run_once, Measure};
pub use store::{load_reports, merge_reports, Session, DEFAULT_REPORT_PATH};
