use clap::{Parser, Subcommand, ValueEnum};
use microbench::options::{PartialOptions, Profile};
use microbench::workloads::{self, Workload, WorkloadConfig};
use microbench::{Session, DEFAULT_REPORT_PATH};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run built-in workloads and merge their reports into a JSON file.
    Run {
        /// Workloads to run; all of them if omitted.
        #[arg(value_enum, value_name = "WORKLOAD")]
        workloads: Vec<Workload>,

        /// Report file to merge results into.
        #[arg(long, default_value = DEFAULT_REPORT_PATH)]
        out: PathBuf,
    },

    /// Print the mean time of every benchmark in a report file.
    Table {
        #[arg(value_name = "FILE", default_value = DEFAULT_REPORT_PATH)]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "microbench")]
#[command(version)]
#[command(about = "Warmup-then-sample micro-benchmark runner (JSON reports)")]
struct Args {
    #[arg(long, value_enum, default_value_t = ProfileArg::Full, global = true)]
    profile: ProfileArg,

    /// Minimum warmup duration in ms (overrides the profile).
    #[arg(long, global = true)]
    warmup_time: Option<f64>,

    /// Minimum sampling duration in ms (overrides the profile).
    #[arg(long, global = true)]
    test_time: Option<f64>,

    /// Minimum number of samples (overrides the profile).
    #[arg(long, global = true)]
    samples: Option<u64>,

    /// Suppress progress output.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Seed for workload inputs.
    #[arg(long, default_value_t = 0, global = true)]
    seed: u64,

    #[command(subcommand)]
    cmd: Command,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("microbench=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let profile: Profile = args.profile.into();
    let options = PartialOptions {
        warmup_time: args.warmup_time,
        test_time: args.test_time,
        samples: args.samples,
        name: None,
        quiet: Some(args.quiet),
    }
    .resolve_onto(profile.options());

    let mut session = Session::new();

    match args.cmd {
        Command::Run {
            workloads: requested,
            out,
        } => {
            let cfg = WorkloadConfig { seed: args.seed };
            let selected = if requested.is_empty() {
                Workload::ALL.to_vec()
            } else {
                requested
            };
            tracing::info!(
                profile = profile.as_str(),
                seed = args.seed,
                "running {} workload(s)",
                selected.len()
            );
            for w in selected {
                workloads::run(&mut session, &cfg, w, &options)?;
            }
            session.save_reports(&out)?;
            eprintln!("Reports saved: {}", out.display());
            session.print_table(Some(out.as_path()))?;
        }
        Command::Table { path } => {
            session.print_table(Some(path.as_path()))?;
        }
    }

    Ok(())
}
