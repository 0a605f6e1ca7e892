//! Dual-Representation Runner
//!
//! Runs merge-insertion once per container family on independent copies of
//! the same values and records comparison count and elapsed time for each.
//! Formatting the results is left to the caller.

use std::time::{Duration, Instant};

use log::debug;

use crate::chain::{RandomAccess, Representation, Sequential};
use crate::comparisons::Comparisons;
use crate::error::SortError;
use crate::merge_insertion;

/// Outcome of sorting with one representation.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Container the run used.
    pub name: &'static str,
    pub sorted: Vec<u32>,
    pub comparisons: u64,
    /// Time spent building the container and sorting it.
    pub elapsed: Duration,
}

impl RunReport {
    /// Elapsed time in microseconds.
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Reports for both representations over the same values.
#[derive(Debug, Clone)]
pub struct DualReport {
    pub random_access: RunReport,
    pub sequential: RunReport,
}

impl DualReport {
    /// Whether both runs produced the same sorted values.
    pub fn outputs_match(&self) -> bool {
        self.random_access.sorted == self.sequential.sorted
    }
}

/// How the two runs are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// One after the other on the calling thread.
    #[default]
    Serial,
    /// Concurrently through `rayon::join`. Each run still owns its own input
    /// copy and counter.
    Parallel,
}

/// Sort a private copy of `values` with representation `R` and time it.
pub fn run<R: Representation>(values: &[u32]) -> Result<RunReport, SortError> {
    let input = values.to_vec();
    let mut comparisons = Comparisons::new();

    let start = Instant::now();
    let sorted = merge_insertion::sort::<R>(&input, &mut comparisons)?;
    let elapsed = start.elapsed();

    debug!(
        "{}: {} values, {} comparisons, {:?}",
        R::NAME,
        input.len(),
        comparisons.count(),
        elapsed
    );

    Ok(RunReport {
        name: R::NAME,
        sorted: sorted.into_iter().collect(),
        comparisons: comparisons.count(),
        elapsed,
    })
}

/// Sort `values` with both representations.
///
/// # Errors
/// Whatever either run reports, or [`SortError::OutputMismatch`] if the two
/// sorted outputs differ.
pub fn run_both(values: &[u32], mode: RunMode) -> Result<DualReport, SortError> {
    let (random_access, sequential) = match mode {
        RunMode::Serial => (run::<RandomAccess>(values), run::<Sequential>(values)),
        RunMode::Parallel => rayon::join(
            || run::<RandomAccess>(values),
            || run::<Sequential>(values),
        ),
    };

    let report = DualReport {
        random_access: random_access?,
        sequential: sequential?,
    };
    if !report.outputs_match() {
        return Err(SortError::OutputMismatch);
    }
    Ok(report)
}
