use crate::dictionary::Dictionary;
use crate::log::init_logger;
use crate::solver::{Query, QueryMode, SolverError};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // report the innermost error, which carries the specific code
        match &e {
            SolverError::Constraint(ce) => WasmError {
                code: ce.code().to_string(),
                message: ce.to_string(),
                description: ce.description().to_string(),
                details: ce.details().to_string(),
                help: ce.help().map(str::to_string),
            },
            SolverError::Dictionary(de) => WasmError {
                code: de.code().to_string(),
                message: de.to_string(),
                description: de.description().to_string(),
                details: de.details().to_string(),
                help: de.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let sections = [Some(format!("{} ({}): {}", e.code, e.description, e.message)), Some(e.details), e.help];
        let text: Vec<String> = sections.into_iter().flatten().filter(|s| !s.is_empty()).collect();

        js_sys::Error::new(&text.join("\n\n")).into()
    }
}

fn serialization_error(what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    matches: Vec<String>,
    mode: String,
    pruned_size: usize,
    candidates_examined: usize,
}

/// JS entry: (input: string, words: string[], mode: "auto" | "anagram" | "pattern")
///
/// `words` is normalized like a loaded dictionary. Anagram matches come back
/// sorted, pattern matches in the order of `words`.
#[wasm_bindgen]
pub fn solve_query_wasm(input: &str, words: JsValue, mode: &str) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass a string array, e.g. ['helm', 'lehm', 'mehl']".to_string()),
    })?;

    let mode = mode.parse::<QueryMode>().map_err(|message| WasmError {
        code: "WASM003".to_string(),
        message,
        description: "Invalid query mode".to_string(),
        details: "The mode parameter selects how the query is read.".to_string(),
        help: Some("Use 'auto', 'anagram' or 'pattern'".to_string()),
    })?;

    // parse before touching the word list
    let query = Query::parse(input, mode).map_err(|ce| WasmError::from(SolverError::from(ce)))?;
    let dictionary = Dictionary::from_words(&words);
    let result = query.evaluate(&dictionary);

    let wasm_result = WasmSolveResult {
        mode: result.kind.to_string(),
        pruned_size: result.pruned_size,
        candidates_examined: result.candidates_examined,
        matches: result.matches.into_sorted_vec(),
    };

    to_value(&wasm_result).map_err(|e| serialization_error("query result", e))
}

/// Parse a newline-separated word list into normalized words, returned as a
/// JavaScript string array.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_dictionary(text: &str) -> Result<JsValue, JsValue> {
    let dictionary = Dictionary::parse_from_str(text);
    to_value(&dictionary.words).map_err(|e| serialization_error("dictionary", e))
}
