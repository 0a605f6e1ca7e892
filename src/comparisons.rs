//! Comparison Counter
//!
//! Every value-to-value comparison made during a sort goes through a
//! [`Comparisons`] counter passed down by `&mut`. One counter belongs to one
//! top-level sort, so independent runs never share state.

/// Counts element comparisons for a single sort run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Comparisons {
    count: u64,
}

impl Comparisons {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one comparison.
    #[inline]
    pub fn bump(&mut self) {
        self.count += 1;
    }

    /// Number of comparisons recorded so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Reset the counter to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Compare `a < b`, recording the comparison.
    #[inline]
    pub fn less(&mut self, a: u32, b: u32) -> bool {
        self.bump();
        a < b
    }
}
