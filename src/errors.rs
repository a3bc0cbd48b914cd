//! Error types for board construction and word-list loading, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - B001: `NotSquare` (Letter count is not a perfect square)
//! - B002: `InvalidTile` (Board token is not a single character)
//! - W001: `Io` (Dictionary file could not be read)
//!
//! # Examples
//!
//! ```
//! use boggle::board::Board;
//! use boggle::errors::BoardError;
//!
//! match Board::build("abcdefghij".chars()) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "B001");
//!         println!("Error: {}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("10 letters cannot form a square board"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Failure to build a [`crate::board::Board`] from the supplied letters.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board must be square: {len} letters is not a perfect square")]
    NotSquare { len: usize },

    #[error("invalid tile \"{token}\": each board cell must be exactly one character")]
    InvalidTile { token: String },
}

/// Failure to load a dictionary word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BoardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::NotSquare { .. } => "B001",
            BoardError::InvalidTile { .. } => "B002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BoardError::NotSquare { .. } => "Letter count is not a perfect square",
            BoardError::InvalidTile { .. } => "Board token is not a single character",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BoardError::NotSquare { .. } => "Only NxN boards are supported. The number of letters supplied must be 0, 1, 4, 9, 16, 25, ... so that the board dimension is a whole number.",
            BoardError::InvalidTile { .. } => "Every board cell holds one letter. Multi-character tiles (such as 'qu') and empty tokens are not supported.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::NotSquare { .. } => Some("Supply N*N letters, e.g. 9 letters for a 3x3 board or 16 for a 4x4 board"),
            BoardError::InvalidTile { .. } => Some("Pass one letter per cell, separated by spaces: 'f e t a p o l k m'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl WordListError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "W001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "Dictionary file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "The dictionary file is missing, unreadable, or not valid UTF-8. The underlying I/O error is attached as the source.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::Io { .. } => Some("Check the path and make sure the file is a UTF-8 text file with one word per line"),
        }
    }

    /// Formats the error with code and optional help text
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
