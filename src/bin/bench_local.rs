//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of boards on *your* machine.
//! - Loads and indexes the dictionary once, then solves each board several times
//!   and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- words.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- words.txt -r 5`
//! - Print a few words per board:    `cargo run --bin bench_local --release -- words.txt -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - Dictionary loading and indexing are timed separately from solving.
//! - One warm-up solve per board is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use boggle::board::Board;
use boggle::dictionary::DictionaryIndex;
use boggle::solver::{SolveOptions, Solver};
use boggle::word_list::WordList;

/// Simple local benchmark runner: index the dictionary once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    dictionary: String,

    /// Lowercase dictionary words while loading
    #[arg(short, long)]
    lowercase: bool,

    /// Number of repeats per board (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print up to this many words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a name and the board letters, row by row.
struct Case {
    name: &'static str,
    letters: &'static str,
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "3x3 example", letters: "fetapolkm" },
        Case { name: "4x4 classic", letters: "stngeiaedrlssepo" },
        Case { name: "4x4 vowels", letters: "aeioueaiouaeioue" },
        Case { name: "5x5 mixed", letters: "serspatglinesersatrsdmeno" },
        Case { name: "6x6 mixed", letters: "plantsriaterdonestalinecoratsetinrap" },
    ]
}

fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary, cli.lowercase)?;
    let dictionary = DictionaryIndex::from_word_list(&word_list);
    eprintln!(
        "Indexed {} words ({} prefixes) in {:.3}s",
        dictionary.word_count(),
        dictionary.prefix_count(),
        t_load.elapsed().as_secs_f64()
    );

    let cases = get_cases();
    let mut summary: Vec<(&str, f64, usize, u64)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let board = Board::build(case.letters.chars())?;
        let solver = Solver::new(&board, &dictionary);
        eprintln!("\n[{:02}] {} ({}x{})", idx + 1, case.name, board.dimension(), board.dimension());

        let _warmup = solver.solve();

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_words: Vec<String> = Vec::new();
        let mut last_explored = 0;

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = black_box(solver).solve_with(&SolveOptions::default());
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            last_explored = result.explored;
            last_words = result.words;

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} words, {} extensions)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_words.len(),
                last_explored
            );
        }

        let med = median(times);
        if cli.print_limit > 0 {
            last_words.sort();
            for word in last_words.iter().take(cli.print_limit) {
                println!("{word}");
            }
        }

        eprintln!("  → median {:.4}s over {} run(s)", med, cli.num_repeats);
        summary.push((case.name, med, last_words.len(), last_explored));
    }

    eprintln!("\n=== Summary ===");
    eprintln!("{:<16} {:>10} {:>8} {:>12}", "board", "median(s)", "words", "extensions");
    for (name, med, count, explored) in summary {
        eprintln!("{name:<16} {med:>10.4} {count:>8} {explored:>12}");
    }

    Ok(())
}
