//! Character classes and the normalization applied to both dictionary words
//! and user queries.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Marks a position that matches exactly one arbitrary character.
pub const WILDCARD: char = '.';

/// Regex metacharacters. Queries are not regexes, so these are refused
/// rather than read as literals.
pub(crate) const RESERVED_CHARS: &str = "*+?[](){}|^$\\";

/// Fixed diacritic substitutions, applied after lower-casing.
pub(crate) const SUBSTITUTIONS: [(char, &str); 4] = [
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
];

static SUBSTITUTION_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SUBSTITUTIONS.into_iter().collect());

pub(crate) trait WordChar {
    fn is_wildcard(&self) -> bool;
    fn is_reserved(&self) -> bool;
    /// True for anything that may appear as a literal in a query.
    fn is_word_char(&self) -> bool;
}

impl WordChar for char {
    fn is_wildcard(&self) -> bool {
        *self == WILDCARD
    }
    fn is_reserved(&self) -> bool {
        RESERVED_CHARS.contains(*self)
    }
    fn is_word_char(&self) -> bool {
        !self.is_wildcard() && !self.is_reserved() && !self.is_whitespace() && !self.is_control()
    }
}

/// Lower-case `raw` and expand the diacritics in [`SUBSTITUTIONS`].
///
/// The wildcard and any other character outside the table pass through
/// unchanged, so the function is idempotent:
/// `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// use wordsense::word_char::normalize;
///
/// assert_eq!(normalize("Äpfel"), "aepfel");
/// assert_eq!(normalize("Straße"), "strasse");
/// assert_eq!(normalize("H.LLO"), "h.llo");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        match SUBSTITUTION_MAP.get(&c) {
            Some(digraph) => normalized.push_str(digraph),
            None => normalized.push(c),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hallo"), "hallo");
        assert_eq!(normalize("WELT"), "welt");
    }

    #[test]
    fn test_normalize_umlauts() {
        assert_eq!(normalize("Äpfel"), "aepfel");
        assert_eq!(normalize("Öl"), "oel");
        assert_eq!(normalize("Über"), "ueber");
        assert_eq!(normalize("müde"), "muede");
    }

    #[test]
    fn test_normalize_sharp_s() {
        assert_eq!(normalize("Fuß"), "fuss");
        // capital sharp s lower-cases to 'ß' first
        assert_eq!(normalize("FUẞ"), "fuss");
    }

    #[test]
    fn test_normalize_changes_length() {
        assert_eq!("Äpfel".chars().count(), 5);
        assert_eq!(normalize("Äpfel").chars().count(), 6);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Äpfel", "Straße", "e..l", "", "z.B.", "ÖLÜBERÄ"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_normalize_keeps_wildcards_and_other_chars() {
        assert_eq!(normalize("..st"), "..st");
        assert_eq!(normalize("é-1"), "é-1");
    }

    #[test]
    fn test_char_classes() {
        assert!(WILDCARD.is_wildcard());
        assert!(!WILDCARD.is_word_char());
        assert!('a'.is_word_char());
        assert!('é'.is_word_char());
        assert!('-'.is_word_char());
        assert!(!' '.is_word_char());
        assert!(!'\t'.is_word_char());
        for c in RESERVED_CHARS.chars() {
            assert!(c.is_reserved());
            assert!(!c.is_word_char());
        }
    }
}
