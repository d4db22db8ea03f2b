//! Exhaustive permutation generation.
//!
//! Permutations are produced by recursive position exchange: positions from a boundary index
//! onwards are swapped into the boundary one at a time, the suffix behind the boundary is permuted
//! recursively, and each swap is undone before trying the next candidate. Positions are treated as
//! distinct, so repeated values in the input produce repeated arrangements.
use num_traits::{CheckedMul, One};

/// The factorial of `n`, or `None` if it overflows `usize`.
///
/// This is the number of permutations of `n` distinct positions.
pub fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(usize::one(), |acc, k| CheckedMul::checked_mul(&acc, &k))
}

/// Visit every arrangement of a slice's positions, permuting it in place.
///
/// The visitor sees each of the `n!` arrangements exactly once. Every swap is paired with an
/// undo-swap, so the slice is back in its original order on return.
pub fn permutations_in_place<T, F>(items: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    exchange(items, 0, &mut visit);
}

fn exchange<T, F>(items: &mut [T], boundary: usize, visit: &mut F)
where
    F: FnMut(&[T]),
{
    if boundary + 1 >= items.len() {
        visit(items);
        return;
    }
    for i in boundary..items.len() {
        items.swap(boundary, i);
        exchange(items, boundary + 1, visit);
        items.swap(boundary, i);
    }
}

/// Upper bound on the number of arrangements reserved up front by [`permutations`].
const MAX_RESERVED: usize = 1 << 16;

fn reserve_for(n: usize) -> usize {
    factorial(n).map_or(MAX_RESERVED, |count| count.min(MAX_RESERVED))
}

/// Returns all permutations of the input sequence.
///
/// The result contains `n!` arrangements, each an owned copy. An empty input yields a single
/// empty permutation. No size limit is applied here; callers enumerating untrusted input should
/// go through [`Config::check`](crate::group::Config::check) first.
///
/// ```
/// use bijection_group::generate::permutations;
///
/// let perms = permutations(&['a', 'b', 'c']);
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec!['a', 'b', 'c']);
/// assert!(perms.contains(&vec!['c', 'a', 'b']));
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut buffer = items.to_vec();
    let mut results = Vec::with_capacity(reserve_for(items.len()));

    permutations_in_place(&mut buffer, |arrangement| results.push(arrangement.to_vec()));

    debug_assert_eq!(Some(results.len()), factorial(items.len()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(200), None);
    }

    #[test]
    fn reservation_is_capped() {
        assert_eq!(reserve_for(0), 1);
        assert_eq!(reserve_for(3), 6);
        assert_eq!(reserve_for(8), 40320);
        assert_eq!(reserve_for(9), MAX_RESERVED);
        assert_eq!(reserve_for(25), MAX_RESERVED);
        assert_eq!(reserve_for(usize::MAX), MAX_RESERVED);
    }

    #[test]
    fn empty_input() {
        assert_eq!(permutations::<u8>(&[]), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn single_input() {
        assert_eq!(permutations(&["x"]), vec![vec!["x"]]);
    }

    #[test]
    fn generation_order() {
        assert_eq!(
            permutations(&[1, 2, 3]),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 2, 1],
                vec![3, 1, 2],
            ]
        );
    }

    #[test]
    fn positions_are_distinct() {
        let perms = permutations(&[7, 7, 8]);
        assert_eq!(perms.len(), 6);
        assert_eq!(perms.iter().filter(|p| **p == vec![7, 7, 8]).count(), 2);
    }

    #[test]
    fn in_place_restores_buffer() {
        let mut buffer = vec!['p', 'q', 'r', 's'];
        let mut count = 0;
        permutations_in_place(&mut buffer, |_| count += 1);
        assert_eq!(count, 24);
        assert_eq!(buffer, vec!['p', 'q', 'r', 's']);
    }

    proptest! {
        #[test]
        fn all_distinct_rearrangements(n in 0..=6usize) {
            let items: Vec<usize> = (0..n).collect();
            let perms = permutations(&items);

            prop_assert_eq!(Some(perms.len()), factorial(n));

            let distinct: HashSet<_> = perms.iter().cloned().collect();
            prop_assert_eq!(distinct.len(), perms.len());

            for perm in perms {
                let mut sorted = perm.clone();
                sorted.sort();
                prop_assert_eq!(&sorted, &items);
            }
        }
    }
}
