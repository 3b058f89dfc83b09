use super::frequency::FrequencyTable;
use crate::errors::ConstraintError;
use crate::word_char::{normalize, WordChar, WILDCARD};
use nom::{
    branch::alt,
    character::complete::{char as nom_char, satisfy},
    combinator::map,
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `ConstraintError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<ConstraintError>>;

/// One position of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Lit(char), // must match this character exactly
    Wildcard,  // '.': matches exactly one arbitrary character
}

impl Position {
    /// The character this position is written as in a query.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Position::Lit(c) => c,
            Position::Wildcard => WILDCARD,
        }
    }

    #[must_use]
    pub fn matches(self, c: char) -> bool {
        match self {
            Position::Lit(lit) => lit == c,
            Position::Wildcard => true,
        }
    }
}

impl From<char> for Position {
    fn from(c: char) -> Self {
        if c.is_wildcard() { Position::Wildcard } else { Position::Lit(c) }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A normalized query, split into positions.
///
/// The constraint is mode-agnostic: it records what the user typed. Whether
/// it is evaluated as an anagram, a pattern or the hybrid of both is decided
/// by [`crate::solver::Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// The query after normalization.
    pub normalized: String,
    pub positions: Vec<Position>,
}

impl Constraint {
    /// Target length of matching words, in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True iff at least one position is a wildcard.
    #[must_use]
    pub fn is_pattern(&self) -> bool {
        self.wildcard_count() > 0
    }

    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.positions.iter().filter(|p| matches!(p, Position::Wildcard)).count()
    }

    /// The literal (non-wildcard) characters, in query order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.iter().filter_map(|p| match p {
            Position::Lit(c) => Some(*c),
            Position::Wildcard => None,
        })
    }

    /// Frequency table of the literal characters.
    #[must_use]
    pub fn frequency_table(&self) -> FrequencyTable {
        self.letters().collect()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for Constraint {
    type Err = Box<ConstraintError>;

    /// Normalize `raw_query` and tokenize it one position at a time.
    ///
    /// An empty query is valid and yields a zero-length constraint.
    fn from_str(raw_query: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(raw_query);
        let mut rest = normalized.as_str();
        let mut positions = Vec::with_capacity(normalized.len());

        while !rest.is_empty() {
            match position(rest) {
                Ok((next, pos)) => {
                    positions.push(pos);
                    rest = next;
                }
                Err(nom::Err::Failure(e)) => return Err(e),
                Err(_) => {
                    // `rest` is non-empty here, so there is an offending char
                    let invalid_char = rest.chars().next().unwrap_or(WILDCARD);
                    let query = normalized.clone();
                    let position = positions.len();
                    return Err(Box::new(if invalid_char.is_reserved() {
                        ConstraintError::ReservedCharacter { query, invalid_char, position }
                    } else {
                        ConstraintError::InvalidCharacter { query, invalid_char, position }
                    }));
                }
            }
        }

        Ok(Constraint { normalized, positions })
    }
}

// === Token parsers ===

fn wildcard(input: &'_ str) -> PResult<'_, Position> {
    map(nom_char(WILDCARD), |_| Position::Wildcard).parse(input)
}

fn literal(input: &'_ str) -> PResult<'_, Position> {
    map(satisfy(|c: char| c.is_word_char()), Position::Lit).parse(input)
}

fn position(input: &'_ str) -> PResult<'_, Position> {
    alt((wildcard, literal)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters() {
        let constraint = "lhme".parse::<Constraint>().unwrap();
        assert_eq!(constraint.len(), 4);
        assert!(!constraint.is_pattern());
        assert_eq!(
            constraint.positions,
            vec![Position::Lit('l'), Position::Lit('h'), Position::Lit('m'), Position::Lit('e')]
        );
    }

    #[test]
    fn test_parse_pattern() {
        let constraint = "e..l".parse::<Constraint>().unwrap();
        assert!(constraint.is_pattern());
        assert_eq!(constraint.wildcard_count(), 2);
        assert_eq!(
            constraint.positions,
            vec![Position::Lit('e'), Position::Wildcard, Position::Wildcard, Position::Lit('l')]
        );
        assert_eq!(constraint.letters().collect::<String>(), "el");
    }

    #[test]
    fn test_parse_normalizes_input() {
        let constraint = "ÄPFEL".parse::<Constraint>().unwrap();
        assert_eq!(constraint.normalized, "aepfel");
        assert_eq!(constraint.len(), 6);
        assert_eq!(constraint.to_string(), "aepfel");
    }

    #[test]
    fn test_empty_query_is_not_an_error() {
        let constraint = "".parse::<Constraint>().unwrap();
        assert!(constraint.is_empty());
        assert!(!constraint.is_pattern());
        assert!(constraint.frequency_table().is_empty());
    }

    #[test]
    fn test_frequency_table_ignores_wildcards() {
        let constraint = "h.llo".parse::<Constraint>().unwrap();
        let table = constraint.frequency_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get('l'), 2);
        assert_eq!(table.get(WILDCARD), 0);
    }

    #[test]
    fn test_reserved_character_error() {
        let err = "e*l".parse::<Constraint>().unwrap_err();
        assert!(matches!(
            *err,
            ConstraintError::ReservedCharacter { invalid_char: '*', position: 1, .. }
        ));
    }

    #[test]
    fn test_reserved_bracket_error() {
        let err = "h[a".parse::<Constraint>().unwrap_err();
        assert!(matches!(*err, ConstraintError::ReservedCharacter { invalid_char: '[', position: 1, .. }));
    }

    #[test]
    fn test_whitespace_error() {
        let err = "l h".parse::<Constraint>().unwrap_err();
        assert!(matches!(*err, ConstraintError::InvalidCharacter { invalid_char: ' ', position: 1, .. }));
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_position_after_substitution() {
        // 'Ü' expands to two characters, so the '?' sits at position 2
        let err = "Ü?".parse::<Constraint>().unwrap_err();
        assert!(matches!(*err, ConstraintError::ReservedCharacter { position: 2, .. }));
    }

    #[test]
    fn test_position_matches() {
        assert!(Position::Wildcard.matches('x'));
        assert!(Position::Lit('a').matches('a'));
        assert!(!Position::Lit('a').matches('b'));
        assert_eq!(Position::from('.'), Position::Wildcard);
        assert_eq!(Position::from('q'), Position::Lit('q'));
    }

    #[test]
    fn test_non_ascii_literals() {
        let constraint = "café".parse::<Constraint>().unwrap();
        assert_eq!(constraint.len(), 4);
        assert_eq!(constraint.positions[3], Position::Lit('é'));
    }
}
