use crate::board::Board;
use crate::dictionary::DictionaryIndex;
use crate::errors::BoardError;
use crate::log::init_logger;
use crate::solver::{SolveStatus, Solver};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B001", "WASM001")
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

impl From<BoardError> for WasmError {
    fn from(e: BoardError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize the panic hook and logging.
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
    words: Vec<String>,
    status: String,
}

fn string_array(value: JsValue, param: &str, code: &str) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WasmError {
        code: code.to_string(),
        message: format!("{param} must be string[]: {e}"),
        description: format!("Invalid {param} format"),
        details: format!("The {param} parameter must be a JavaScript array of strings."),
        help: Some("Ensure you're passing a valid string array, e.g., ['f', 'e', 't', 'a']".to_string()),
    })
}

/// JS entry: (letters: string[], words: string[])
/// returns { words: string[], status: "completed" | "timed_out" | "cancelled" }
#[wasm_bindgen]
pub fn solve_board_wasm(letters: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let letters = string_array(letters, "letters", "WASM001")?;
    let words = string_array(words, "words", "WASM002")?;

    let board = Board::from_tokens(&letters).map_err(WasmError::from)?;
    let dictionary = DictionaryIndex::build(&words);

    let result = Solver::new(&board, &dictionary).solve_with(&Default::default());
    let status = match result.status {
        SolveStatus::Completed => "completed",
        SolveStatus::TimedOut { .. } => "timed_out",
        SolveStatus::Cancelled => "cancelled",
    };

    to_value(&WasmSolveResult { words: result.words, status: status.to_string() }).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Parse a newline-separated word list into a `string[]`.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, lowercase: bool) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, lowercase);
    to_value(&word_list.words).map_err(|e| {
        WasmError {
            code: "WASM004".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize word list".to_string(),
            details: "The word list could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
