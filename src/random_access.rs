//! Random-Access Chain
//!
//! `Vec` as a merge-insertion main chain. Binary-search probes index directly,
//! insertion shifts the tail in memory.

use std::ops::Range;

use crate::chain::{Chain, Keyed};
use crate::comparisons::Comparisons;

impl<T> Chain<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn push_front(&mut self, item: T) {
        self.insert(0, item);
    }

    #[inline]
    fn insert_at(&mut self, index: usize, item: T) {
        self.insert(index, item);
    }

    fn locate<P>(&self, mut pred: P) -> Option<(usize, &T)>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().enumerate().find(|&(_, item)| pred(item))
    }

    fn lower_bound(&self, value: u32, range: Range<usize>, comparisons: &mut Comparisons) -> usize
    where
        T: Keyed,
    {
        let mut low = range.start;
        let mut high = range.end.min(Vec::len(self));

        while low < high {
            let mid = low + (high - low) / 2;
            if comparisons.less(self[mid].key(), value) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}
