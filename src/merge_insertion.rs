//! Ford-Johnson Merge-Insertion Sort
//!
//! Sorts while spending as few comparisons as possible:
//! 1. Pair adjacent elements and compare each pair once. The larger element
//!    of a pair is its *winner*, the smaller one is *pending*.
//! 2. Recursively sort the winners. They become the main chain.
//! 3. The pending element paired with the smallest winner goes to the front
//!    of the chain without a search.
//! 4. Every other pending element is binary-searched into the chain in
//!    Jacobsthal order, searching only the prefix that ends at its winner.
//!
//! Each element carries a tag (its position within the current recursion
//! level), and each winner handed to the recursion carries its pair index.
//! Sorted winners are mapped back to their pairs by that index, so duplicate
//! values never make the winner/pending correspondence ambiguous.
//!
//! Ties inside a pair go to the first element: it becomes the winner.

use log::{debug, trace};

use crate::chain::{Chain, Keyed, Representation};
use crate::comparisons::Comparisons;
use crate::error::SortError;
use crate::jacobsthal::insertion_order;

/// A value together with its position in the current recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub value: u32,
    pub tag: usize,
}

impl Keyed for Tagged {
    #[inline]
    fn key(&self) -> u32 {
        self.value
    }
}

/// An element waiting to be inserted into the main chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    item: Tagged,
    /// Tag of the winner this element lost to. `None` for the odd leftover,
    /// which may land anywhere in the chain.
    partner: Option<usize>,
}

/// Result of one pairing round.
#[derive(Debug)]
struct Pairing<C> {
    /// Winners, each tagged with the index of its pair.
    winners: C,
    /// `(winner, loser)` per pair, in input order.
    pairs: Vec<(Tagged, Tagged)>,
    /// Unpaired last element of an odd-length level.
    leftover: Option<Tagged>,
}

fn pair_up<C: Chain<Tagged>>(level: C, comparisons: &mut Comparisons) -> Pairing<C> {
    let mut pairs = Vec::with_capacity(level.len() / 2);
    let mut leftover = None;

    let mut items = level.into_iter();
    while let Some(first) = items.next() {
        let Some(second) = items.next() else {
            leftover = Some(first);
            break;
        };
        if comparisons.less(first.value, second.value) {
            pairs.push((second, first));
        } else {
            pairs.push((first, second));
        }
    }

    let winners = pairs
        .iter()
        .enumerate()
        .map(|(index, (winner, _))| Tagged {
            value: winner.value,
            tag: index,
        })
        .collect();

    Pairing {
        winners,
        pairs,
        leftover,
    }
}

/// Turn the sorted winners back into this level's elements.
///
/// Returns the main chain (winners in sorted order, original tags restored)
/// and the pending elements in the same order as their partners, followed by
/// the leftover if there is one.
fn unpair<C: Chain<Tagged>>(
    sorted_winners: C,
    pairs: &[(Tagged, Tagged)],
    leftover: Option<Tagged>,
) -> Result<(C, Vec<Pending>), SortError> {
    let mut main_chain = C::default();
    let mut pending = Vec::with_capacity(pairs.len() + 1);

    for winner in sorted_winners {
        let &(original, loser) = pairs
            .get(winner.tag)
            .ok_or(SortError::MissingPartner { tag: winner.tag })?;
        main_chain.push_back(original);
        pending.push(Pending {
            item: loser,
            partner: Some(original.tag),
        });
    }

    if let Some(item) = leftover {
        pending.push(Pending {
            item,
            partner: None,
        });
    }

    Ok((main_chain, pending))
}

/// Exclusive upper end of the chain prefix `entry` may be inserted into.
fn search_bound<C: Chain<Tagged>>(main_chain: &C, entry: &Pending) -> Result<usize, SortError> {
    let Some(tag) = entry.partner else {
        return Ok(main_chain.len());
    };

    let (position, partner) = main_chain
        .locate(|item| item.tag == tag)
        .ok_or(SortError::MissingPartner { tag })?;

    if entry.item.value > partner.value {
        return Err(SortError::PartnerInvariant {
            pending: entry.item.value,
            partner: partner.value,
        });
    }
    Ok(position)
}

/// Sort one recursion level.
///
/// The returned chain holds exactly the elements of `level`, tags intact, in
/// non-descending order of value.
pub fn merge_insert<C: Chain<Tagged>>(level: C, comparisons: &mut Comparisons) -> Result<C, SortError> {
    let len = level.len();
    if len <= 1 {
        return Ok(level);
    }

    let Pairing {
        winners,
        pairs,
        leftover,
    } = pair_up(level, comparisons);
    trace!(
        "level of {} elements: {} pairs, leftover {:?}",
        len,
        pairs.len(),
        leftover.map(|item| item.value)
    );

    let sorted_winners = merge_insert(winners, comparisons)?;
    let (mut main_chain, pending) = unpair(sorted_winners, &pairs, leftover)?;

    // The first pending element lost to the smallest winner, so it is smaller
    // than everything in the chain.
    if let Some(first) = pending.first() {
        search_bound(&main_chain, first)?;
        main_chain.push_front(first.item);
    }

    for index in insertion_order(pending.len()) {
        let entry = &pending[index - 1];
        let bound = search_bound(&main_chain, entry)?;
        let position = main_chain.lower_bound(entry.item.value, 0..bound, comparisons);
        trace!(
            "insert pending #{} (value {}) at {} of [0, {})",
            index,
            entry.item.value,
            position,
            bound
        );
        main_chain.insert_at(position, entry.item);
    }

    Ok(main_chain)
}

/// Sort `values` with merge-insertion in the container family `R`.
///
/// `comparisons` is reset first and holds this run's comparison count on
/// return. The caller's slice is never modified.
///
/// # Errors
/// [`SortError::TooFewElements`] if fewer than two values are given. The
/// invariant variants indicate a defect in the algorithm and are never
/// expected.
pub fn sort<R: Representation>(
    values: &[u32],
    comparisons: &mut Comparisons,
) -> Result<R::Container<u32>, SortError> {
    comparisons.reset();
    if values.len() < 2 {
        return Err(SortError::TooFewElements { len: values.len() });
    }

    debug!("merge-insertion of {} values into {}", values.len(), R::NAME);
    let level: R::Container<Tagged> = values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Tagged { value, tag })
        .collect();

    let sorted = merge_insert(level, comparisons)?;
    debug!(
        "{} finished with {} comparisons",
        R::NAME,
        comparisons.count()
    );
    Ok(sorted.into_iter().map(|item| item.value).collect())
}

/// Worst-case comparison count of Ford-Johnson for `n` elements:
/// `sum_{i=1}^{n} ceil(log2(3i/4))`.
pub fn ford_johnson_bound(n: usize) -> u64 {
    (1..=n)
        .map(|i| {
            // ceil(log2(3i/4)) = ceil(log2(3i)) - 2, and 3i is never a power
            // of two, so ceil(log2(3i)) is the bit length of 3i.
            let bits = u64::from(usize::BITS - (3 * i).leading_zeros());
            bits.saturating_sub(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{is_sorted, RandomAccess, Sequential};
    use quickcheck::TestResult;
    use rand::Rng;
    use std::collections::LinkedList;

    fn sort_vec(values: &[u32]) -> (Vec<u32>, u64) {
        let mut comparisons = Comparisons::new();
        let sorted = sort::<RandomAccess>(values, &mut comparisons).unwrap();
        (sorted, comparisons.count())
    }

    fn sort_list(values: &[u32]) -> (Vec<u32>, u64) {
        let mut comparisons = Comparisons::new();
        let sorted = sort::<Sequential>(values, &mut comparisons).unwrap();
        (sorted.into_iter().collect(), comparisons.count())
    }

    fn std_sorted(values: &[u32]) -> Vec<u32> {
        let mut expected = values.to_vec();
        expected.sort();
        expected
    }

    fn tagged(values: &[u32]) -> Vec<Tagged> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Tagged { value, tag })
            .collect()
    }

    #[test]
    fn test_sort_three() {
        assert_eq!(sort_vec(&[3, 5, 1]).0, vec![1, 3, 5]);
        assert_eq!(sort_list(&[3, 5, 1]).0, vec![1, 3, 5]);
    }

    #[test]
    fn test_sort_six() {
        let values = [5, 3, 8, 1, 9, 2];
        assert_eq!(sort_vec(&values).0, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(sort_list(&values).0, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_sort_all_same() {
        assert_eq!(sort_vec(&[4, 4, 4, 4]).0, vec![4, 4, 4, 4]);
        assert_eq!(sort_list(&[4, 4, 4, 4]).0, vec![4, 4, 4, 4]);

        let values = vec![42u32; 101];
        assert_eq!(sort_vec(&values).0, values);
    }

    #[test]
    fn test_sort_two() {
        let (sorted, count) = sort_vec(&[2, 1]);
        assert_eq!(sorted, vec![1, 2]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_sort_too_few() {
        let mut comparisons = Comparisons::new();
        assert_eq!(
            sort::<RandomAccess>(&[], &mut comparisons),
            Err(SortError::TooFewElements { len: 0 })
        );
        assert_eq!(
            sort::<Sequential>(&[7], &mut comparisons).map(|_| ()),
            Err(SortError::TooFewElements { len: 1 })
        );
        assert_eq!(comparisons.count(), 0);
    }

    #[test]
    fn test_sort_resets_counter() {
        let mut comparisons = Comparisons::new();
        sort::<RandomAccess>(&[3, 1, 2], &mut comparisons).unwrap();
        let first = comparisons.count();
        sort::<RandomAccess>(&[3, 1, 2], &mut comparisons).unwrap();
        assert_eq!(comparisons.count(), first);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let values = vec![9, 1, 8, 2];
        let copy = values.clone();
        sort_vec(&values);
        assert_eq!(values, copy);
    }

    #[test]
    fn test_sort_sorted_is_unchanged() {
        let values: Vec<u32> = (0..100).collect();
        let (sorted, count) = sort_vec(&values);
        assert_eq!(sorted, values);
        assert!(count <= ford_johnson_bound(values.len()));
    }

    #[test]
    fn test_sort_reverse() {
        let values: Vec<u32> = (0..100).rev().collect();
        assert_eq!(sort_vec(&values).0, (0..100).collect::<Vec<u32>>());
        assert_eq!(sort_list(&values).0, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_sort_duplicates() {
        let values = [5, 3, 5, 1, 3, 5, 1, 1];
        assert_eq!(sort_vec(&values).0, vec![1, 1, 1, 3, 3, 5, 5, 5]);
        assert_eq!(sort_list(&values).0, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_max_values() {
        let values = [u32::MAX, 0, u32::MAX / 2, 1, u32::MAX - 1];
        assert_eq!(
            sort_vec(&values).0,
            vec![0, 1, u32::MAX / 2, u32::MAX - 1, u32::MAX]
        );
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        for len in 2..300 {
            let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..64)).collect();
            let (vec_sorted, vec_count) = sort_vec(&values);
            let (list_sorted, list_count) = sort_list(&values);

            assert_eq!(vec_sorted, std_sorted(&values));
            assert_eq!(list_sorted, vec_sorted);
            assert_eq!(list_count, vec_count);
            assert!(
                vec_count <= ford_johnson_bound(values.len()),
                "{} comparisons for {} values",
                vec_count,
                values.len()
            );
        }
    }

    #[test]
    fn test_every_small_permutation_within_bound() {
        fn permutations(values: &mut Vec<u32>, k: usize, out: &mut Vec<Vec<u32>>) {
            if k == values.len() {
                out.push(values.clone());
                return;
            }
            for i in k..values.len() {
                values.swap(k, i);
                permutations(values, k + 1, out);
                values.swap(k, i);
            }
        }

        for n in 2..=7 {
            let mut all = Vec::new();
            permutations(&mut (0..n as u32).collect(), 0, &mut all);
            for permutation in &all {
                let (sorted, count) = sort_vec(permutation);
                assert_eq!(sorted, (0..n as u32).collect::<Vec<_>>());
                assert!(count <= ford_johnson_bound(n), "{:?}: {}", permutation, count);
            }
        }
    }

    #[test]
    fn test_bound_values() {
        let known = [0, 0, 1, 3, 5, 7, 10, 13, 16, 19, 22, 26, 30];
        for (n, &expected) in known.iter().enumerate() {
            assert_eq!(ford_johnson_bound(n), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_pair_up_first_wins_ties() {
        let mut comparisons = Comparisons::new();
        let level = tagged(&[7, 7, 2, 9]);
        let pairing = pair_up(level, &mut comparisons);

        assert_eq!(comparisons.count(), 2);
        assert_eq!(pairing.pairs[0].0.tag, 0);
        assert_eq!(pairing.pairs[0].1.tag, 1);
        assert_eq!(pairing.pairs[1].0, Tagged { value: 9, tag: 3 });
        assert_eq!(pairing.pairs[1].1, Tagged { value: 2, tag: 2 });
        assert_eq!(
            pairing.winners,
            vec![Tagged { value: 7, tag: 0 }, Tagged { value: 9, tag: 1 }]
        );
        assert!(pairing.leftover.is_none());
    }

    #[test]
    fn test_odd_leftover_is_trailing_unbounded_pending() {
        let mut comparisons = Comparisons::new();
        let level: LinkedList<Tagged> = tagged(&[6, 2, 8, 4, 5]).into_iter().collect();
        let Pairing {
            winners,
            pairs,
            leftover,
        } = pair_up(level, &mut comparisons);
        assert_eq!(leftover, Some(Tagged { value: 5, tag: 4 }));
        assert_eq!(pairs.len(), 2);

        let sorted_winners = merge_insert(winners, &mut comparisons).unwrap();
        let (main_chain, pending) = unpair(sorted_winners, &pairs, leftover).unwrap();

        let chain_values: Vec<u32> = main_chain.iter().map(|item| item.value).collect();
        assert_eq!(chain_values, vec![6, 8]);
        assert_eq!(pending.len(), 3);
        assert_eq!(pending[0].item.value, 2);
        assert_eq!(pending[0].partner, Some(0));
        assert_eq!(pending[1].item.value, 4);
        assert_eq!(pending[1].partner, Some(2));
        assert_eq!(pending[2].item.value, 5);
        assert_eq!(pending[2].partner, None);

        // The leftover searches the whole chain.
        assert_eq!(search_bound(&main_chain, &pending[2]), Ok(2));
    }

    #[test]
    fn test_unpair_duplicate_winners() {
        // Equal winners must each map back to their own loser.
        let pairs = vec![
            (Tagged { value: 5, tag: 0 }, Tagged { value: 1, tag: 1 }),
            (Tagged { value: 5, tag: 2 }, Tagged { value: 3, tag: 3 }),
        ];
        let sorted_winners = vec![Tagged { value: 5, tag: 1 }, Tagged { value: 5, tag: 0 }];
        let (main_chain, pending) = unpair(sorted_winners, &pairs, None).unwrap();

        assert_eq!(main_chain, vec![pairs[1].0, pairs[0].0]);
        assert_eq!(pending[0].item.value, 3);
        assert_eq!(pending[1].item.value, 1);
    }

    #[test]
    fn test_search_bound_rejects_broken_pairs() {
        let main_chain = vec![Tagged { value: 4, tag: 0 }, Tagged { value: 9, tag: 1 }];
        let too_big = Pending {
            item: Tagged { value: 6, tag: 2 },
            partner: Some(0),
        };
        assert_eq!(
            search_bound(&main_chain, &too_big),
            Err(SortError::PartnerInvariant {
                pending: 6,
                partner: 4
            })
        );

        let orphan = Pending {
            item: Tagged { value: 1, tag: 3 },
            partner: Some(7),
        };
        assert_eq!(
            search_bound(&main_chain, &orphan),
            Err(SortError::MissingPartner { tag: 7 })
        );
    }

    #[test]
    fn test_merge_insert_keeps_tags() {
        let mut comparisons = Comparisons::new();
        let values = [3, 1, 3, 2, 1];
        let sorted = merge_insert(tagged(&values), &mut comparisons).unwrap();
        assert!(is_sorted(&sorted));

        let mut tags: Vec<usize> = sorted.iter().map(|item| item.tag).collect();
        tags.sort_unstable();
        assert_eq!(tags, vec![0, 1, 2, 3, 4]);
        for item in &sorted {
            assert_eq!(values[item.tag], item.value);
        }
    }

    quickcheck::quickcheck! {
        fn prop_sorts_as_permutation(values: Vec<u32>) -> TestResult {
            if values.len() < 2 {
                return TestResult::discard();
            }
            let (sorted, _) = sort_vec(&values);
            TestResult::from_bool(sorted == std_sorted(&values))
        }

        fn prop_representations_agree(values: Vec<u8>) -> TestResult {
            if values.len() < 2 {
                return TestResult::discard();
            }
            let values: Vec<u32> = values.into_iter().map(u32::from).collect();
            TestResult::from_bool(sort_vec(&values) == sort_list(&values))
        }

        fn prop_within_ford_johnson_bound(values: Vec<u16>) -> TestResult {
            if values.len() < 2 {
                return TestResult::discard();
            }
            let values: Vec<u32> = values.into_iter().map(u32::from).collect();
            let (_, count) = sort_vec(&values);
            TestResult::from_bool(count <= ford_johnson_bound(values.len()))
        }

        fn prop_sorting_is_idempotent(values: Vec<u32>) -> TestResult {
            if values.len() < 2 {
                return TestResult::discard();
            }
            let (once, _) = sort_vec(&values);
            let (twice, _) = sort_vec(&once);
            TestResult::from_bool(once == twice)
        }
    }
}
