//! Jacobsthal Insertion Order
//!
//! Ford-Johnson inserts pending elements in groups whose upper ends are the
//! Jacobsthal numbers `1, 3, 5, 11, 21, 43, ...` (`t(k) = t(k-1) + 2 * t(k-2)`).
//! Inside a group the largest index goes first, so every insertion searches a
//! range of at most `2^k - 1` elements.

/// Jacobsthal terms `1, 3, 5, 11, ...` that do not exceed `limit`.
///
/// The first term is always present, even for `limit == 0`, because it marks
/// the pending element inserted outside the schedule.
pub fn jacobsthal_terms(limit: usize) -> Vec<usize> {
    let mut terms = vec![1usize];
    loop {
        let k = terms.len();
        let next = if k == 1 {
            3
        } else {
            terms[k - 1] + 2 * terms[k - 2]
        };
        if next > limit {
            break;
        }
        terms.push(next);
    }
    terms
}

/// Order in which pending elements `2..=n` (1-based) are inserted.
///
/// Index `1` is never emitted: the first pending element is placed at the
/// front of the main chain before the schedule starts.
pub fn insertion_order(n: usize) -> Vec<usize> {
    if n <= 1 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(n - 1);
    let mut next_unscheduled = 2;

    for &term in jacobsthal_terms(n).iter().skip(1) {
        order.extend((next_unscheduled..=term).rev());
        next_unscheduled = term + 1;
    }

    // Tail past the last Jacobsthal term, still largest first.
    order.extend((next_unscheduled..=n).rev());
    order
}
