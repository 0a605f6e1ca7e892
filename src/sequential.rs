//! Sequential Chain
//!
//! `LinkedList` as a merge-insertion main chain. There is no indexing: a
//! binary-search probe walks forward from the current lower bound, and an
//! insertion splits the list at the target position and splices it back.
//! The probe order matches the random-access chain exactly, so both count the
//! same comparisons.

use std::collections::linked_list::{Iter, LinkedList};
use std::ops::Range;

use crate::chain::{Chain, Keyed};
use crate::comparisons::Comparisons;

/// Move `iter` forward by `steps` elements.
#[inline]
fn advance<T>(iter: &mut Iter<'_, T>, steps: usize) {
    if steps > 0 {
        iter.nth(steps - 1);
    }
}

impl<T> Chain<T> for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item);
    }

    #[inline]
    fn push_front(&mut self, item: T) {
        LinkedList::push_front(self, item);
    }

    fn insert_at(&mut self, index: usize, item: T) {
        let mut tail = self.split_off(index);
        LinkedList::push_back(self, item);
        self.append(&mut tail);
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
        let mut high = range.end.min(LinkedList::len(self));

        // `at_low` always points at element `low`.
        let mut at_low = self.iter();
        advance(&mut at_low, low);

        while low < high {
            let mid = low + (high - low) / 2;
            let Some(probe) = at_low.clone().nth(mid - low) else {
                break;
            };
            if comparisons.less(probe.key(), value) {
                advance(&mut at_low, mid + 1 - low);
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}
