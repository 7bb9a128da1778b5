//! Lexicographic permutation generation over sequence positions.
//!
//! # Algorithm
//!
//! Narayana Pandita's next-permutation step: find the longest non-increasing
//! suffix, swap its predecessor with the rightmost larger element, then
//! reverse the suffix. Starting from the identity this visits every ordering
//! of `0..n` exactly once, in lexicographic order.
//!
//! # Complexity
//!
//! Amortized O(1) per step, O(n) worst case.

/// Advances `perm` to the next lexicographic permutation in place.
///
/// Returns `false` when `perm` was the last permutation; the slice is then
/// reset to ascending order.
///
/// # Examples
///
/// ```
/// use u_route_exact::exact::next_permutation;
///
/// let mut p = [0, 1, 2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [0, 2, 1]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [0, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        perm.reverse();
        return false;
    }

    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

/// Number of permutations of `n` items (`n!`), or `None` if it overflows `u64`.
///
/// # Examples
///
/// ```
/// use u_route_exact::exact::permutation_count;
///
/// assert_eq!(permutation_count(5), Some(120));
/// assert_eq!(permutation_count(0), Some(1));
/// assert_eq!(permutation_count(21), None);
/// ```
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Iterator over every ordering of `0..n` in lexicographic order.
///
/// Yields `n!` owned orders, starting with the identity. For `n == 0` it
/// yields a single empty order.
///
/// # Examples
///
/// ```
/// use u_route_exact::exact::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    done: bool,
}

impl Permutations {
    /// Creates the iterator for `n` positions.
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(out)
    }
}
