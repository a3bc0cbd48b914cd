//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `BoardError` and `WordListError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use boggle::errors::{BoardError, WordListError};

/// Print one documentation section per error value. Works for any type with
/// `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
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

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_board_error_variants() -> Vec<BoardError> {
    vec![
        BoardError::NotSquare { len: 10 },
        BoardError::InvalidTile { token: "qu".to_string() },
    ]
}

fn all_word_list_error_variants() -> Vec<WordListError> {
    vec![WordListError::Io {
        path: PathBuf::from("dict.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }]
}

fn main() {
    println!("# Error Codes\n");
    println!("This file is generated by `cargo run --bin generate_error_docs`. Do not edit by hand.\n");

    println!("## Board Errors (B0xx)\n");
    generate_error_docs!(all_board_error_variants());

    println!("## Word List Errors (W0xx)\n");
    generate_error_docs!(all_word_list_error_variants());
}
