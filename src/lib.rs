// Reusable library API — visible to both CLI and WASM builds
pub mod board;
pub mod collector;
pub mod dictionary;
pub mod errors;
pub mod log;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::Board;
pub use dictionary::DictionaryIndex;
pub use errors::{BoardError, WordListError};
pub use solver::{SolveOptions, SolveResult, SolveStatus, Solver};
pub use word_list::WordList;
