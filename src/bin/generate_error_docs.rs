//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `SolverError`, `ConstraintError` and `DictionaryError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use wordsense::errors::{ConstraintError, DictionaryError};
use wordsense::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_constraint_error_variants() -> Vec<ConstraintError> {
    vec![
        ConstraintError::ReservedCharacter { query: "e*l".to_string(), invalid_char: '*', position: 1 },
        ConstraintError::InvalidCharacter { query: "l h".to_string(), invalid_char: ' ', position: 1 },
        ConstraintError::NomError(nom::error::ErrorKind::Satisfy),
    ]
}

fn missing_dictionary() -> DictionaryError {
    DictionaryError::SourceUnavailable {
        path: "wordlist-german.txt".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }
}

fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![missing_dictionary()]
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::Constraint(Box::new(ConstraintError::ReservedCharacter {
            query: "e*l".to_string(),
            invalid_char: '*',
            position: 1,
        })),
        SolverError::Dictionary(missing_dictionary()),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is generated from the source code. Do not edit manually.**\n");

    println!("## Solver Errors\n");
    println!("Top-level errors. Each wraps one of the more specific errors below.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Constraint Errors\n");
    println!("Errors in the query string, reported before any dictionary work.\n");
    generate_error_docs!(all_constraint_error_variants());

    println!("## Dictionary Errors\n");
    println!("Errors while reading the word list.\n");
    generate_error_docs!(all_dictionary_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_documented_code_is_unique() {
        let mut codes = HashSet::new();
        for e in all_solver_error_variants() {
            assert!(codes.insert(e.code()));
        }
        for e in all_constraint_error_variants() {
            assert!(codes.insert(e.code()));
        }
        for e in all_dictionary_error_variants() {
            assert!(codes.insert(e.code()));
        }
        assert_eq!(codes.len(), 6);
    }
}
