//! Query evaluation: anagram, pattern and hybrid lookups against a dictionary.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `Constraint` (Query parsing failed (wraps [`ConstraintError`]))
//! - S002: `Dictionary` (Dictionary source unavailable (wraps [`DictionaryError`]))
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Anagram query
//!
//! ```
//! use wordsense::dictionary::Dictionary;
//! use wordsense::solver::{self, QueryMode};
//!
//! let dictionary = Dictionary::from_words(["helm", "lehm", "mehl", "test"]);
//! let result = solver::solve_query("lhme", &dictionary, QueryMode::Auto)?;
//!
//! assert_eq!(result.matches.into_sorted_vec(), vec!["helm", "lehm", "mehl"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pattern query
//!
//! ```
//! use wordsense::dictionary::Dictionary;
//! use wordsense::solver::{self, QueryMode};
//!
//! let dictionary = Dictionary::from_words(["test", "best", "other", "test"]);
//! let result = solver::solve_query("..st", &dictionary, QueryMode::Auto)?;
//!
//! // dictionary order, duplicates preserved
//! assert_eq!(result.matches.into_vec(), vec!["test", "best", "test"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;
use std::fmt;

use instant::Instant;
use log::{debug, info};

use crate::dictionary::{Dictionary, DictionaryView};
use crate::errors::{ConstraintError, DictionaryError};
use crate::parser::matcher::{match_arrangement, match_positions};
use crate::parser::prefilter::{prune, FrequencyFilter};
use crate::parser::{Constraint, FrequencyTable};
use crate::permutations::{count_distinct_arrangements, DistinctPermutations};

/// How to interpret a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum QueryMode {
    /// Pattern if the query contains a wildcard, anagram otherwise.
    #[default]
    Auto,
    /// Rearrange all characters; wildcards float with the letters.
    Anagram,
    /// Match position by position, even without wildcards.
    Pattern,
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(QueryMode::Auto),
            "anagram" => Ok(QueryMode::Anagram),
            "pattern" => Ok(QueryMode::Pattern),
            other => Err(format!("unknown query mode '{other}' (expected auto, anagram or pattern)")),
        }
    }
}

/// A parsed query with its mode resolved. Each variant owns its pruning rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact multiset: find every rearrangement of the letters.
    Anagram { constraint: Constraint, letters: FrequencyTable },
    /// Multiset plus wildcards: the letters and the wildcards are rearranged
    /// together, and each arrangement is matched positionally.
    Hybrid { constraint: Constraint, letters: FrequencyTable, wildcards: usize },
    /// Positional pattern scanned over the dictionary in order.
    Pattern { constraint: Constraint },
}

impl Query {
    /// Parse `input` and resolve it to a query kind according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ConstraintError`] if `input` is malformed.
    pub fn parse(input: &str, mode: QueryMode) -> Result<Query, Box<ConstraintError>> {
        let constraint = input.parse::<Constraint>()?;
        let as_pattern = match mode {
            QueryMode::Auto => constraint.is_pattern(),
            QueryMode::Anagram => false,
            QueryMode::Pattern => true,
        };

        Ok(if as_pattern {
            Query::Pattern { constraint }
        } else if constraint.is_pattern() {
            let letters = constraint.frequency_table();
            let wildcards = constraint.wildcard_count();
            Query::Hybrid { constraint, letters, wildcards }
        } else {
            let letters = constraint.frequency_table();
            Query::Anagram { constraint, letters }
        })
    }

    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        match self {
            Query::Anagram { constraint, .. }
            | Query::Hybrid { constraint, .. }
            | Query::Pattern { constraint } => constraint,
        }
    }

    /// Target word length, in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraint().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraint().is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Anagram { .. } => "anagram",
            Query::Hybrid { .. } => "hybrid",
            Query::Pattern { .. } => "pattern",
        }
    }

    fn frequency_filter(&self) -> FrequencyFilter {
        match self {
            Query::Anagram { letters, .. } => FrequencyFilter::Exact(letters.clone()),
            Query::Hybrid { letters, wildcards, .. } => {
                FrequencyFilter::Feasible { letters: letters.clone(), wildcards: *wildcards }
            }
            Query::Pattern { .. } => FrequencyFilter::LengthOnly,
        }
    }

    /// Apply this query's pruning rule to `view`.
    #[must_use]
    pub fn prune<'a>(&self, view: &DictionaryView<'a>) -> DictionaryView<'a> {
        prune(view, self.len(), &self.frequency_filter())
    }

    /// Evaluate the query against `dictionary`.
    #[must_use]
    pub fn evaluate(&self, dictionary: &Dictionary) -> SolveResult {
        self.evaluate_view(&dictionary.view())
    }

    /// Evaluate the query against an existing view.
    #[must_use]
    pub fn evaluate_view(&self, view: &DictionaryView<'_>) -> SolveResult {
        let t_start = Instant::now();
        let pruned = self.prune(view);
        debug!(
            "{} query \"{}\": {} of {} words survive pruning",
            self.kind(),
            self.constraint(),
            pruned.len(),
            view.len()
        );

        let (matches, candidates_examined) = match self {
            Query::Anagram { letters, .. } => anagram_matches(letters, &pruned),
            Query::Hybrid { constraint, .. } => hybrid_matches(constraint, &pruned),
            Query::Pattern { constraint } => pattern_matches(constraint, &pruned),
        };

        debug!(
            "examined {candidates_examined} candidates, found {} matches in {:.3}s",
            matches.len(),
            t_start.elapsed().as_secs_f64()
        );

        SolveResult {
            matches,
            kind: self.kind(),
            dictionary_size: view.len(),
            pruned_size: pruned.len(),
            candidates_examined,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\" (length {})", self.kind(), self.constraint(), self.len())
    }
}

/// Words found by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches {
    /// Multiset modes: distinct words, no order.
    Set(HashSet<String>),
    /// Pattern mode: dictionary order, duplicates preserved.
    Ordered(Vec<String>),
}

impl Matches {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Matches::Set(set) => set.len(),
            Matches::Ordered(list) => list.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        match self {
            Matches::Set(set) => set.contains(word),
            Matches::Ordered(list) => list.iter().any(|w| w == word),
        }
    }

    /// Into a list: sets in unspecified order, ordered matches unchanged.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Matches::Set(set) => set.into_iter().collect(),
            Matches::Ordered(list) => list,
        }
    }

    /// Into a list with a stable order: sets are sorted, ordered matches keep
    /// dictionary order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<String> {
        match self {
            Matches::Set(set) => {
                let mut list: Vec<String> = set.into_iter().collect();
                list.sort();
                list
            }
            Matches::Ordered(list) => list,
        }
    }
}

/// Result of one query, with the bookkeeping used for diagnostics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub matches: Matches,
    /// `"anagram"`, `"hybrid"` or `"pattern"`.
    pub kind: &'static str,
    /// Words in the view the query ran against.
    pub dictionary_size: usize,
    /// Words left after pruning.
    pub pruned_size: usize,
    /// Arrangements generated (multiset modes) or words scanned (pattern mode).
    pub candidates_examined: usize,
}

impl IntoIterator for SolveResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_sorted_vec().into_iter()
    }
}

/// Unified error type for the query pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The query string could not be parsed.
    #[error("constraint error: {0}")]
    Constraint(#[from] Box<ConstraintError>),

    /// The dictionary could not be read.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Constraint(_) => "S001",
            SolverError::Dictionary(_) => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::Constraint(_) => "Query parsing failed",
            SolverError::Dictionary(_) => "Dictionary source unavailable",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::Constraint(_) => "The query could not be parsed. This wraps an underlying ConstraintError (see Constraint Errors section for specific error codes). No dictionary work is done for a malformed query.",
            SolverError::Dictionary(_) => "The dictionary could not be loaded. This wraps an underlying DictionaryError. No partial results are produced.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::Constraint(ce) => ce.help(),
            SolverError::Dictionary(de) => de.help(),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::Constraint(ce) => format!("{}\n  caused by: {}", self.code(), ce.display_detailed()),
            SolverError::Dictionary(de) => format!("{}\n  caused by: {}", self.code(), de.display_detailed()),
        }
    }
}

/// Parse `input` with `mode` and evaluate it against `dictionary`.
///
/// # Errors
///
/// Returns [`SolverError::Constraint`] if the query is malformed; the
/// dictionary is not touched in that case.
pub fn solve_query(input: &str, dictionary: &Dictionary, mode: QueryMode) -> Result<SolveResult, SolverError> {
    let query = Query::parse(input, mode)?;
    info!("Solving {query} against {} words", dictionary.len());
    Ok(query.evaluate(dictionary))
}

/// Generate the distinct arrangements of `letters` and look each one up.
fn anagram_matches(letters: &FrequencyTable, pruned: &DictionaryView<'_>) -> (Matches, usize) {
    let mut found = HashSet::new();
    let mut examined = 0;

    // exact pruning leaves only true anagrams; with none left there is nothing to look up
    if pruned.is_empty() {
        return (Matches::Set(found), examined);
    }

    if let Some(expected) = count_distinct_arrangements(letters) {
        debug!("{expected} distinct arrangements to test");
    }

    for arrangement in DistinctPermutations::new(letters.to_sorted_chars()) {
        examined += 1;
        let word: String = arrangement.into_iter().collect();
        if pruned.contains(&word) {
            found.insert(word);
        }
    }

    (Matches::Set(found), examined)
}

/// Rearrange letters and wildcards together; match every arrangement
/// positionally against every surviving word and union the hits.
fn hybrid_matches(constraint: &Constraint, pruned: &DictionaryView<'_>) -> (Matches, usize) {
    let mut found = HashSet::new();
    let mut examined = 0;

    if pruned.is_empty() {
        return (Matches::Set(found), examined);
    }

    let symbols: Vec<char> = constraint.positions.iter().map(|p| p.symbol()).collect();
    let mut remaining: Vec<(&str, Vec<char>)> =
        pruned.words().iter().map(|&w| (w, w.chars().collect())).collect();

    for arrangement in DistinctPermutations::new(symbols) {
        examined += 1;
        remaining.retain(|(word, chars)| {
            if match_arrangement(chars, &arrangement) {
                found.insert((*word).to_string());
                false
            } else {
                true
            }
        });
        if remaining.is_empty() {
            break;
        }
    }

    (Matches::Set(found), examined)
}

/// Single ordered scan of the length-pruned dictionary.
fn pattern_matches(constraint: &Constraint, pruned: &DictionaryView<'_>) -> (Matches, usize) {
    let mut found = Vec::new();
    for &word in pruned.words() {
        let chars: Vec<char> = word.chars().collect();
        if match_positions(&chars, &constraint.positions) {
            found.push(word.to_string());
        }
    }
    (Matches::Ordered(found), pruned.len())
}
