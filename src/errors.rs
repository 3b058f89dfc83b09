//! Error types for query parsing and dictionary loading, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! - E001: `ReservedCharacter` (Reserved metacharacter in query)
//! - E002: `InvalidCharacter` (Whitespace or control character in query)
//! - E003: `NomError` (Low-level tokenizer error)
//! - D001: `SourceUnavailable` (Dictionary source cannot be read)
//!
//! # Examples
//!
//! ```
//! use wordsense::errors::ConstraintError;
//! use wordsense::parser::Constraint;
//!
//! match "a*c".parse::<Constraint>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("'*' is reserved"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Errors raised while turning a query string into a constraint.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintError {
    #[error("Query \"{query}\" contains reserved character '{invalid_char}' at position {position}")]
    ReservedCharacter { query: String, invalid_char: char, position: usize },

    #[error("Query \"{query}\" contains invalid character {invalid_char:?} at position {position}")]
    InvalidCharacter { query: String, invalid_char: char, position: usize },

    // nom tokenizer error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl<'a> NomParseError<&'a str> for Box<ConstraintError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ConstraintError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ConstraintError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConstraintError::ReservedCharacter { .. } => "E001",
            ConstraintError::InvalidCharacter { .. } => "E002",
            ConstraintError::NomError(_) => "E003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConstraintError::ReservedCharacter { .. } => "Reserved metacharacter in query",
            ConstraintError::InvalidCharacter { .. } => "Whitespace or control character in query",
            ConstraintError::NomError(_) => "Low-level tokenizer error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConstraintError::ReservedCharacter { .. } => "The query contains one of `* + ? [ ] ( ) { } | ^ $ \\`. These characters are reserved and never match literally; only `.` acts as a wildcard.",
            ConstraintError::InvalidCharacter { .. } => "The query contains a space, tab, newline or other control character. Queries are single words without separators.",
            ConstraintError::NomError(_) => "The tokenizer failed in an unexpected way. This usually indicates a bug rather than bad input.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConstraintError::ReservedCharacter { .. } => Some("Use '.' for each unknown letter, e.g. 'e..l' instead of 'e*l'"),
            ConstraintError::InvalidCharacter { .. } => Some("Remove spaces from the query, e.g. 'lhme' instead of 'l h m e'"),
            ConstraintError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Errors raised while reading a dictionary source.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "D001",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "Dictionary source cannot be read",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::SourceUnavailable { .. } => "The dictionary file does not exist, is not readable, or is not valid UTF-8. No query is evaluated without a dictionary.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::SourceUnavailable { .. } => Some("Pass a readable word list with --dictionary or set WORDSENSE_DICTIONARY"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
