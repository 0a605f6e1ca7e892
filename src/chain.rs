//! Sequence Representations
//!
//! The merge-insertion engine is written once against the [`Chain`] trait and
//! instantiated for two containers:
//! - [`RandomAccess`] backed by `Vec`, where a probe is an O(1) index
//! - [`Sequential`] backed by `LinkedList`, where reaching a probe means
//!   walking the list
//!
//! Both perform the same comparisons on the same input; only the traversal
//! cost differs.

use std::collections::LinkedList;
use std::ops::Range;

use crate::comparisons::Comparisons;

/// An element ordered by a `u32` key.
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for u32 {
    #[inline]
    fn key(&self) -> u32 {
        *self
    }
}

/// Ordered container the merge-insertion engine builds its main chain in.
pub trait Chain<T>: Default + FromIterator<T> + IntoIterator<Item = T> + Sized {
    /// Number of elements in the chain.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item` at the back.
    fn push_back(&mut self, item: T);

    /// Prepend `item` at the front.
    fn push_front(&mut self, item: T);

    /// Insert `item` so that it ends up at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    fn insert_at(&mut self, index: usize, item: T);

    /// First element matching `pred`, with its position.
    fn locate<P>(&self, pred: P) -> Option<(usize, &T)>
    where
        P: FnMut(&T) -> bool;

    /// Leftmost index in `range.start..=range.end` at which `value` can be
    /// inserted keeping the chain sorted. Ties resolve to the left.
    ///
    /// The chain must be sorted by key over `range`. Each probe counts one
    /// comparison.
    fn lower_bound(&self, value: u32, range: Range<usize>, comparisons: &mut Comparisons) -> usize
    where
        T: Keyed;
}

/// A family of containers the sort can run on.
pub trait Representation {
    /// Container type for elements of type `T`.
    type Container<T>: Chain<T>;

    /// Label used in reports.
    const NAME: &'static str;
}

/// Contiguous storage with O(1) indexing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccess;

impl Representation for RandomAccess {
    type Container<T> = Vec<T>;

    const NAME: &'static str = "std::vec::Vec";
}

/// Doubly linked list reachable only by walking from an end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Representation for Sequential {
    type Container<T> = LinkedList<T>;

    const NAME: &'static str = "std::collections::LinkedList";
}

/// Check whether an iterator of keyed values is in non-descending order.
pub fn is_sorted<'a, T, I>(items: I) -> bool
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = items.into_iter();
    let Some(first) = iter.next() else {
        return true;
    };
    let mut prev = first.key();
    iter.all(|item| {
        let key = item.key();
        let ordered = prev <= key;
        prev = key;
        ordered
    })
}
