//! Sort Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Fewer than two values were supplied.
    #[error("not enough input elements: got {len}, need at least two")]
    TooFewElements { len: usize },

    /// A pending element compared greater than the winner it lost to.
    #[error("internal invariant violated: pending value {pending} is greater than its partner {partner}")]
    PartnerInvariant { pending: u32, partner: u32 },

    /// A pending element's partner is no longer in the main chain.
    #[error("internal invariant violated: partner #{tag} missing from the main chain")]
    MissingPartner { tag: usize },

    /// The two representations produced different sorted outputs.
    #[error("random-access and sequential runs disagree on the sorted output")]
    OutputMismatch,
}

impl SortError {
    /// Whether the error indicates an algorithm defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        !matches!(self, SortError::TooFewElements { .. })
    }
}
