use std::collections::BTreeMap;

/// Character-frequency table of a normalized string: the multiset view of a
/// word or query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
    len: usize,
}

impl FrequencyTable {
    /// Total number of characters counted (the multiset's size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occurrences of `c` (zero if absent).
    #[must_use]
    pub fn get(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// The multiplicities `m_1..m_r` of the distinct characters.
    pub fn multiplicities(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.values().copied()
    }

    /// Expand back into a sorted sequence of characters.
    #[must_use]
    pub fn to_sorted_chars(&self) -> Vec<char> {
        let mut chars = Vec::with_capacity(self.len);
        for (&c, &count) in &self.counts {
            chars.extend(std::iter::repeat_n(c, count));
        }
        chars
    }

    /// True if `entry` is a rearrangement of exactly this multiset.
    #[must_use]
    pub fn is_anagram<I: IntoIterator<Item = char>>(&self, entry: I) -> bool {
        let mut remaining = self.counts.clone();
        let mut entry_len = 0;
        for c in entry {
            match remaining.get_mut(&c) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
            entry_len += 1;
        }
        entry_len == self.len
    }

    /// Number of characters of `entry` that this multiset cannot supply.
    ///
    /// Zero means every letter of `entry` is available here (per-character
    /// counts of `entry` never exceed ours).
    #[must_use]
    pub fn shortfall<I: IntoIterator<Item = char>>(&self, entry: I) -> usize {
        let mut remaining = self.counts.clone();
        let mut missing = 0;
        for c in entry {
            match remaining.get_mut(&c) {
                Some(count) if *count > 0 => *count -= 1,
                _ => missing += 1,
            }
        }
        missing
    }

    /// True if `entry` can be spelled from this multiset when up to
    /// `wildcards` characters may be filled arbitrarily.
    #[must_use]
    pub fn is_feasible<I: IntoIterator<Item = char>>(&self, entry: I, wildcards: usize) -> bool {
        self.shortfall(entry) <= wildcards
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = FrequencyTable::default();
        for c in iter {
            *table.counts.entry(c).or_insert(0) += 1;
            table.len += 1;
        }
        table
    }
}

impl From<&str> for FrequencyTable {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_len() {
        let table = FrequencyTable::from("aepfel");
        assert_eq!(table.len(), 6);
        assert_eq!(table.get('e'), 2);
        assert_eq!(table.get('z'), 0);
        assert_eq!(table.multiplicities().sum::<usize>(), table.len());
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from("");
        assert!(table.is_empty());
        assert!(table.is_anagram("".chars()));
        assert!(!table.is_anagram("a".chars()));
    }

    #[test]
    fn test_is_anagram() {
        let table = FrequencyTable::from("lhme");
        assert!(table.is_anagram("helm".chars()));
        assert!(table.is_anagram("mehl".chars()));
        assert!(!table.is_anagram("hell".chars()));
        assert!(!table.is_anagram("helme".chars()));
        assert!(!table.is_anagram("hel".chars()));
    }

    #[test]
    fn test_equal_tables_iff_anagram() {
        assert_eq!(FrequencyTable::from("test"), FrequencyTable::from("stet"));
        assert_ne!(FrequencyTable::from("test"), FrequencyTable::from("tess"));
    }

    #[test]
    fn test_shortfall_and_feasibility() {
        let table = FrequencyTable::from("hllo");
        assert_eq!(table.shortfall("hello".chars()), 1);
        assert!(table.is_feasible("hello".chars(), 1));
        assert!(!table.is_feasible("hello".chars(), 0));
        assert_eq!(table.shortfall("world".chars()), 3);
        assert!(table.is_feasible("holl".chars(), 0));
    }

    #[test]
    fn test_to_sorted_chars() {
        assert_eq!(FrequencyTable::from("mehl").to_sorted_chars(), vec!['e', 'h', 'l', 'm']);
        assert_eq!(FrequencyTable::from("aab").to_sorted_chars(), vec!['a', 'a', 'b']);
    }
}
