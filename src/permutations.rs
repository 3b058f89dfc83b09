//! Enumeration of the distinct arrangements of a multiset.
//!
//! Repeated elements are indistinguishable: for a multiset of size `n` whose
//! distinct elements occur `m_1..m_r` times, exactly `n! / (m_1! * ... * m_r!)`
//! arrangements are produced, each once. The enumeration never generates raw
//! `n!` permutations and filters them; it steps from one distinct arrangement
//! to the lexicographically next one, starting from the sorted multiset.
//!
//! ```
//! use wordsense::permutations::DistinctPermutations;
//!
//! let words: Vec<String> = DistinctPermutations::new("aab".chars())
//!     .map(|arrangement| arrangement.into_iter().collect())
//!     .collect();
//! assert_eq!(words, vec!["aab", "aba", "baa"]);
//! ```

use std::iter::FusedIterator;

use crate::parser::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Fresh,
    Running,
    Done,
}

/// Lazy iterator over the distinct arrangements of a multiset, in
/// lexicographic order.
///
/// The sequence is finite and not cached; build a new iterator to restart.
#[derive(Debug, Clone)]
pub struct DistinctPermutations<T> {
    current: Vec<T>,
    stage: Stage,
}

impl<T: Ord + Clone> DistinctPermutations<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut current: Vec<T> = items.into_iter().collect();
        current.sort();
        DistinctPermutations { current, stage: Stage::Fresh }
    }
}

impl<T: Ord + Clone> Iterator for DistinctPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            // the sorted multiset is the first arrangement (and, for n <= 1, the only one)
            Stage::Fresh => {
                self.stage = Stage::Running;
                Some(self.current.clone())
            }
            Stage::Running => {
                if next_permutation(&mut self.current) {
                    Some(self.current.clone())
                } else {
                    self.stage = Stage::Done;
                    None
                }
            }
            Stage::Done => None,
        }
    }
}

impl<T: Ord + Clone> FusedIterator for DistinctPermutations<T> {}

/// Rearrange `items` into the next greater arrangement in lexicographic order.
///
/// Returns `false` (leaving `items` untouched) when `items` is already the
/// greatest arrangement. Equal elements are never swapped with each other,
/// which is what keeps every emitted arrangement distinct.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Rightmost position whose element is smaller than its successor.
    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };

    // Rightmost element strictly greater than the pivot; the suffix is
    // non-increasing, so this is the smallest such element.
    let successor = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Closed-form count of distinct arrangements: `n! / (m_1! * ... * m_r!)`.
///
/// Computed as a product of binomial coefficients so intermediate values stay
/// close to the result. Returns `None` if the count does not fit in a `u128`.
#[must_use]
pub fn count_distinct_arrangements(table: &FrequencyTable) -> Option<u128> {
    let mut total: u128 = 1;
    let mut placed: u128 = 0;
    for multiplicity in table.multiplicities() {
        let m = multiplicity as u128;
        placed += m;
        total = total.checked_mul(binomial(placed, m)?)?;
    }
    Some(total)
}

// C(n, k) via the multiplicative formula; each partial product is itself a
// binomial coefficient, so the division is exact.
fn binomial(n: u128, k: u128) -> Option<u128> {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn arrangements(s: &str) -> Vec<String> {
        DistinctPermutations::new(s.chars())
            .map(|a| a.into_iter().collect())
            .collect()
    }

    fn factorial(n: u128) -> u128 {
        (1..=n).product()
    }

    #[test]
    fn test_empty_multiset_yields_one_empty_arrangement() {
        assert_eq!(arrangements(""), vec![""]);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(arrangements("x"), vec!["x"]);
    }

    #[test]
    fn test_all_identical() {
        assert_eq!(arrangements("aaaa"), vec!["aaaa"]);
    }

    #[test]
    fn test_lexicographic_order() {
        assert_eq!(arrangements("cba"), vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn test_count_matches_closed_form() {
        for s in ["", "a", "ab", "abc", "abcdef", "aab", "aabb", "test", "mississippi", "aaaaab", "zzzzzz", "aepfel"] {
            let produced = arrangements(s);
            let distinct: HashSet<&String> = produced.iter().collect();
            let table = FrequencyTable::from(s);
            let expected = table.multiplicities().fold(factorial(s.len() as u128), |acc, m| acc / factorial(m as u128));

            assert_eq!(distinct.len(), produced.len(), "duplicate arrangement for {s:?}");
            assert_eq!(produced.len() as u128, expected, "wrong count for {s:?}");
            assert_eq!(count_distinct_arrangements(&table), Some(expected));
        }
    }

    #[test]
    fn test_every_arrangement_is_a_permutation() {
        let table = FrequencyTable::from("mehl");
        for arrangement in arrangements("mehl") {
            assert!(table.is_anagram(arrangement.chars()), "{arrangement}");
        }
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = DistinctPermutations::new("ab".chars());
        assert_eq!(iter.next(), Some(vec!['a', 'b']));
        assert_eq!(iter.next(), Some(vec!['b', 'a']));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_generic_over_ord() {
        let all: Vec<Vec<u8>> = DistinctPermutations::new([2u8, 1, 1]).collect();
        assert_eq!(all, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    }

    #[test]
    fn test_wildcard_symbol_is_permuted_like_a_letter() {
        let produced = arrangements("h.llo");
        // 5! / 2! = 60
        assert_eq!(produced.len(), 60);
        assert!(produced.contains(&"h.llo".to_string()));
    }

    #[test]
    fn test_count_overflow_is_none() {
        let letters: String = ('a'..='z').chain('A'..='Z').collect();
        // 52! does not fit in a u128
        assert_eq!(count_distinct_arrangements(&FrequencyTable::from(letters.as_str())), None);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(4, 0), Some(1));
        assert_eq!(binomial(4, 4), Some(1));
    }
}
