//! Ford-Johnson merge-insertion sort over two container representations.
//!
//! - [`merge_insertion`] holds the algorithm, written once against [`Chain`]
//! - [`random_access`] and [`sequential`] implement [`Chain`] for `Vec` and
//!   `LinkedList`
//! - [`runner`] sorts the same values with both and reports comparison counts
//!   and elapsed time

pub mod chain;
pub mod comparisons;
pub mod error;
pub mod jacobsthal;
pub mod merge_insertion;
pub mod random_access;
pub mod runner;
pub mod sequential;

pub use chain::{Chain, Keyed, RandomAccess, Representation, Sequential};
pub use comparisons::Comparisons;
pub use error::SortError;
pub use merge_insertion::{ford_johnson_bound, sort};
pub use runner::{run, run_both, DualReport, RunMode, RunReport};
