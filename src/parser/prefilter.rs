use crate::dictionary::DictionaryView;

use super::frequency::FrequencyTable;

/// Frequency-based pruning, selected by the query mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyFilter {
    /// Pattern mode: length is the only cheap condition.
    LengthOnly,
    /// Pure anagram mode: the entry's table must equal the query's exactly.
    Exact(FrequencyTable),
    /// Hybrid mode: every letter of the entry must be available in `letters`,
    /// with each of the `wildcards` standing in for one missing letter.
    Feasible { letters: FrequencyTable, wildcards: usize },
}

impl FrequencyFilter {
    /// Cheap necessary condition for `word` (already length-checked).
    ///
    /// `Exact` is also sufficient; `Feasible` never rejects a word that some
    /// filling of the wildcards could produce.
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        match self {
            FrequencyFilter::LengthOnly => true,
            FrequencyFilter::Exact(table) => table.is_anagram(word.chars()),
            FrequencyFilter::Feasible { letters, wildcards } => letters.is_feasible(word.chars(), *wildcards),
        }
    }
}

/// Narrow `view` to the words of exactly `len` characters that pass `filter`.
///
/// Order and duplicates of the surviving words are preserved.
#[must_use]
pub fn prune<'a>(view: &DictionaryView<'a>, len: usize, filter: &FrequencyFilter) -> DictionaryView<'a> {
    view.retain(|word| word.chars().count() == len && filter.admits(word))
}
