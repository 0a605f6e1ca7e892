//! Merge-Insertion Sort Comparison
//!
//! Sorts the integers given on the command line with Ford-Johnson
//! merge-insertion, once over a `Vec` and once over a `LinkedList`, and prints
//! how long each took and how many comparisons it needed.
//!
//! Logging is controlled by `PMERGE_LOG` (e.g. `PMERGE_LOG=debug`).

use std::process::ExitCode;

use clap::Parser;
use log::error;

use pmerge::{run_both, RunMode, RunReport};

#[derive(Debug, Parser)]
#[command(name = "pmerge", version, about = "Ford-Johnson merge-insertion sort benchmark")]
struct Cli {
    /// Non-negative integers to sort (at least two).
    #[arg(required = true, value_name = "N")]
    values: Vec<u32>,

    /// Run both representations concurrently.
    #[arg(long)]
    parallel: bool,

    /// Only print timings and comparison counts.
    #[arg(short, long)]
    quiet: bool,
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_run(len: usize, run: &RunReport) {
    println!(
        "Time to process a range of {} elements with {} : {:.3} us",
        len,
        run.name,
        run.elapsed_us()
    );
    println!("{} comparisons: {}", run.name, run.comparisons);
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("PMERGE_LOG")
        .write_style("PMERGE_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let mode = if cli.parallel {
        RunMode::Parallel
    } else {
        RunMode::Serial
    };

    let report = match run_both(&cli.values, mode) {
        Ok(report) => report,
        Err(e) => {
            error!("sort failed: {:?}", e);
            eprintln!("Error: {}", e);
            return if e.is_internal() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            };
        }
    };

    if !cli.quiet {
        println!("Before: {}", join(&cli.values));
        println!("After:  {}", join(&report.random_access.sorted));
    }

    let len = cli.values.len();
    print_run(len, &report.random_access);
    print_run(len, &report.sequential);

    ExitCode::SUCCESS
}
