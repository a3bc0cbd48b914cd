use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use boggle::board::Board;
use boggle::dictionary::DictionaryIndex;
use boggle::errors::{BoardError, WordListError};
use boggle::solver::{SolveOptions, SolveStatus, Solver};
use boggle::word_list::WordList;

/// Boggle word-search solver
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    dictionary: String,

    /// Board letters, one per cell, row by row (N*N of them, e.g. "f e t a p o l k m")
    #[arg(required = true, num_args = 1..)]
    letters: Vec<String>,

    /// Lowercase the dictionary and the board letters before solving
    #[arg(short, long)]
    lowercase: bool,

    /// Give up after this many seconds and print what was found so far
    #[arg(short, long)]
    timeout: Option<f64>,

    /// Print words sorted by length, then alphabetically
    #[arg(short, long)]
    sorted: bool,
}

/// Entry point of the Boggle CLI.
///
/// Delegates to [`try_main`], printing any error in its detailed form before
/// exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(board_err) = e.downcast_ref::<BoardError>() {
            eprintln!("Error: {}", board_err.display_detailed());
        } else if let Some(word_list_err) = e.downcast_ref::<WordListError>() {
            eprintln!("Error: {}", word_list_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Build the board (fails fast on a non-square letter count).
/// 2. Load the dictionary and index it.
/// 3. Solve, then print each word on stdout and diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let tokens: Vec<String> = if cli.lowercase {
        cli.letters.iter().map(|t| t.to_lowercase()).collect()
    } else {
        cli.letters.clone()
    };
    let board = Board::from_tokens(&tokens)?;
    log::debug!("board:\n{board}");

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary, cli.lowercase)?;
    let dictionary = DictionaryIndex::from_word_list(&word_list);
    let load_secs = t_load.elapsed().as_secs_f64();

    let time_budget = cli.timeout.map(Duration::try_from_secs_f64).transpose()?;
    let t_solve = Instant::now();
    let result = Solver::new(&board, &dictionary).solve_with(&SolveOptions { time_budget, stop: None });
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let status = result.status.clone();
    let mut words = result.words;
    if cli.sorted {
        words.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));
    }
    for word in &words {
        println!("{word}");
    }

    if let SolveStatus::TimedOut { elapsed } = status {
        eprintln!("⚠️  Timed out after {:.1}s; some words may be missing", elapsed.as_secs_f64());
    }
    eprintln!(
        "Loaded {} words in {:.3}s; solved {}x{} board in {:.3}s ({} words).",
        word_list.len(),
        load_secs,
        board.dimension(),
        board.dimension(),
        solve_secs,
        words.len()
    );

    Ok(())
}
