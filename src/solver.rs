//! Depth-first backtracking search over the board, pruned by the dictionary's prefix set.
//!
//! Each traversal step, for a cell and the path built so far:
//!
//! 1. skip cells off the board or already on the path,
//! 2. append the cell's letter,
//! 3. stop if the path is not a dictionary prefix (no extension can be a word),
//! 4. record the path if it is a word of at least [`MIN_WORD_LEN`] letters,
//! 5. mark the cell, recurse into its neighbors, then unmark and drop the letter.
//!
//! The path buffer and visited grid are shared across the whole solve and are
//! empty again after every starting cell.
//!
//! # Examples
//!
//! ```
//! use boggle::board::Board;
//! use boggle::dictionary::DictionaryIndex;
//! use boggle::solver::Solver;
//!
//! let board = Board::build("fetapolkm".chars())?;
//! let dictionary = DictionaryIndex::build(["to", "top", "tea", "tepal", "zebra"]);
//!
//! let mut words = Solver::new(&board, &dictionary).solve();
//! words.sort();
//! assert_eq!(words, vec!["tea", "tepal", "to", "top"]);
//! # Ok::<(), boggle::errors::BoardError>(())
//! ```
//!
//! ## Stopping early
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use boggle::board::Board;
//! use boggle::dictionary::DictionaryIndex;
//! use boggle::solver::{SolveOptions, SolveStatus, Solver};
//!
//! let board = Board::build("fetapolkm".chars())?;
//! let dictionary = DictionaryIndex::build(["to", "top"]);
//! let stop = AtomicBool::new(true);
//!
//! let result = Solver::new(&board, &dictionary)
//!     .solve_with(&SolveOptions { stop: Some(&stop), ..SolveOptions::default() });
//! assert_eq!(result.status, SolveStatus::Cancelled);
//! assert!(result.words.is_empty());
//! # Ok::<(), boggle::errors::BoardError>(())
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use instant::Instant;
use log::{debug, info, warn};

use crate::board::Board;
use crate::collector::ResultCollector;
use crate::dictionary::DictionaryIndex;

/// Shortest word that counts as a find. Single letters never do.
pub const MIN_WORD_LEN: usize = 2;

/// How a solve ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every starting cell was fully explored.
    Completed,

    /// The time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },

    /// The caller's stop flag was raised.
    Cancelled,
}

/// Outcome of [`Solver::solve_with`].
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Distinct words found, in unspecified order. Partial if the solve stopped early.
    pub words: Vec<String>,
    pub status: SolveStatus,
    /// Number of path extensions attempted (letters pushed onto the path).
    pub explored: u64,
}

impl IntoIterator for SolveResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Optional limits for a solve. The default runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions<'a> {
    /// Wall-clock limit for the whole solve.
    pub time_budget: Option<Duration>,
    /// Cooperative cancellation flag, polled at every traversal step.
    pub stop: Option<&'a AtomicBool>,
}

/// Keeps track of elapsed time against an optional limit.
struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Stop conditions for one solve. Once tripped it stays tripped.
struct StopCheck<'a> {
    budget: TimeBudget,
    flag: Option<&'a AtomicBool>,
    tripped: Option<SolveStatus>,
}

impl<'a> StopCheck<'a> {
    fn new(options: &SolveOptions<'a>) -> Self {
        Self {
            budget: TimeBudget::new(options.time_budget),
            flag: options.stop,
            tripped: None,
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.tripped.is_some() {
            return true;
        }
        if self.flag.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            self.tripped = Some(SolveStatus::Cancelled);
        } else if self.budget.expired() {
            self.tripped = Some(SolveStatus::TimedOut { elapsed: self.budget.elapsed() });
        }
        self.tripped.is_some()
    }

    fn into_status(self) -> SolveStatus {
        self.tripped.unwrap_or(SolveStatus::Completed)
    }
}

/// The string spelled so far and the cells it occupies.
struct PathState {
    buffer: String,
    visited: Vec<bool>,
    depth: usize,
}

impl PathState {
    fn new(cells: usize) -> Self {
        Self {
            buffer: String::with_capacity(cells),
            visited: vec![false; cells],
            depth: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.depth == 0 && self.buffer.is_empty() && !self.visited.contains(&true)
    }

    /// Push `letter` and mark cell `index`; both are undone when the guard drops.
    fn enter(&mut self, index: usize, letter: char) -> PathGuard<'_> {
        self.buffer.push(letter);
        self.visited[index] = true;
        self.depth += 1;
        PathGuard { path: self, index }
    }
}

/// One step of the current path. Dropping it restores the path exactly as it was.
struct PathGuard<'p> {
    path: &'p mut PathState,
    index: usize,
}

impl Deref for PathGuard<'_> {
    type Target = PathState;

    fn deref(&self) -> &PathState {
        &*self.path
    }
}

impl DerefMut for PathGuard<'_> {
    fn deref_mut(&mut self) -> &mut PathState {
        &mut *self.path
    }
}

impl Drop for PathGuard<'_> {
    fn drop(&mut self) {
        self.path.depth -= 1;
        self.path.visited[self.index] = false;
        self.path.buffer.pop();
    }
}

/// Everything a solve accumulates besides the path itself.
struct Search<'o> {
    results: ResultCollector,
    stop: StopCheck<'o>,
    explored: u64,
}

impl<'o> Search<'o> {
    fn new(options: &SolveOptions<'o>) -> Self {
        Self {
            results: ResultCollector::new(),
            stop: StopCheck::new(options),
            explored: 0,
        }
    }
}

/// Finds every dictionary word on a board.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    board: &'a Board,
    dictionary: &'a DictionaryIndex,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(board: &'a Board, dictionary: &'a DictionaryIndex) -> Self {
        Self { board, dictionary }
    }

    /// Every word of at least [`MIN_WORD_LEN`] letters traceable as a simple path.
    /// Order is unspecified.
    #[must_use]
    pub fn solve(&self) -> Vec<String> {
        self.solve_with(&SolveOptions::default()).words
    }

    /// Like [`Solver::solve`], but honoring a time budget and a stop flag.
    /// Words found before a stop are returned.
    #[must_use]
    pub fn solve_with(&self, options: &SolveOptions<'_>) -> SolveResult {
        debug!(
            "solving {0}x{0} board against {1} words ({2} prefixes)",
            self.board.dimension(),
            self.dictionary.word_count(),
            self.dictionary.prefix_count()
        );

        let mut path = PathState::new(self.board.len());
        let mut search = Search::new(options);
        for (row, col) in self.board.cells() {
            self.visit(row, col, &mut path, &mut search);
            debug_assert!(path.is_empty(), "path state leaked past ({row}, {col})");
            if search.stop.tripped.is_some() {
                break;
            }
        }

        self.finish(search)
    }

    /// Words reachable on paths starting at `(row, col)` only.
    /// An off-board start yields nothing.
    #[must_use]
    pub fn solve_from(&self, row: usize, col: usize) -> Vec<String> {
        let mut path = PathState::new(self.board.len());
        let mut search = Search::new(&SolveOptions::default());
        self.visit(row, col, &mut path, &mut search);
        self.finish(search).words
    }

    fn finish(&self, search: Search<'_>) -> SolveResult {
        let status = search.stop.into_status();
        match &status {
            SolveStatus::Completed => {}
            SolveStatus::TimedOut { elapsed } => warn!(
                "solve timed out after {:.3}s; {} words found so far",
                elapsed.as_secs_f64(),
                search.results.len()
            ),
            SolveStatus::Cancelled => info!("solve cancelled; {} words found so far", search.results.len()),
        }
        debug!("found {} words in {} extensions", search.results.len(), search.explored);

        SolveResult {
            words: search.results.into_vec(),
            status,
            explored: search.explored,
        }
    }

    fn visit(&self, row: usize, col: usize, path: &mut PathState, search: &mut Search<'_>) {
        if search.stop.should_stop() {
            return;
        }
        let Some(letter) = self.board.letter_at(row, col) else {
            return;
        };
        let index = self.board.index(row, col);
        if path.visited[index] {
            return;
        }

        let mut step = path.enter(index, letter);
        search.explored += 1;

        if !self.dictionary.is_prefix(&step.buffer) {
            return;
        }
        if step.depth >= MIN_WORD_LEN && self.dictionary.is_word(&step.buffer) {
            search.results.insert(&step.buffer);
        }

        for (r, c) in self.board.neighbors(row, col) {
            self.visit(r, c, &mut step, search);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    fn sample_board() -> Board {
        Board::build("fetapolkm".chars()).unwrap()
    }

    #[test]
    fn test_solve_small_dictionary() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top", "tea", "tepal"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(sorted(words), vec!["tea", "tepal", "to", "top"]);
    }

    #[test]
    fn test_single_letter_words_excluded() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["a", "f", "fe"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(words, vec!["fe"]);
    }

    #[test]
    fn test_no_cell_reuse() {
        // "aba" needs the single 'a' twice
        let board = Board::build("abcd".chars()).unwrap();
        let dictionary = DictionaryIndex::build(["aba", "ab", "abdc"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(sorted(words), vec!["ab", "abdc"]);
    }

    #[test]
    fn test_repeated_letters_use_distinct_cells() {
        let board = Board::build("aaaa".chars()).unwrap();
        let dictionary = DictionaryIndex::build(["aa", "aaaa", "aaaaa"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(sorted(words), vec!["aa", "aaaa"]);
    }

    #[test]
    fn test_prefix_only_entries_never_reported() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["tepal"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(words, vec!["tepal"]);
    }

    #[test]
    fn test_empty_dictionary_prunes_at_first_letter() {
        let board = sample_board();
        let dictionary = DictionaryIndex::default();

        let result = Solver::new(&board, &dictionary).solve_with(&SolveOptions::default());
        assert!(result.words.is_empty());
        assert_eq!(result.status, SolveStatus::Completed);
        assert_eq!(result.explored, 9);
    }

    #[test]
    fn test_one_by_one_board() {
        let board = Board::build(['a']).unwrap();
        let dictionary = DictionaryIndex::build(["a", "aa"]);

        assert!(Solver::new(&board, &dictionary).solve().is_empty());
    }

    #[test]
    fn test_zero_by_zero_board() {
        let board = Board::build(std::iter::empty()).unwrap();
        let dictionary = DictionaryIndex::build(["ab"]);

        assert!(Solver::new(&board, &dictionary).solve().is_empty());
    }

    #[test]
    fn test_solve_from_single_cell() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top", "tea", "pot"]);
        let solver = Solver::new(&board, &dictionary);

        assert_eq!(sorted(solver.solve_from(0, 2)), vec!["tea", "to", "top"]);
        assert_eq!(solver.solve_from(1, 1), vec!["pot"]);
        assert!(solver.solve_from(3, 3).is_empty());
    }

    #[test]
    fn test_solve_from_union_matches_solve() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top", "tea", "pot", "opal", "mope", "km"]);
        let solver = Solver::new(&board, &dictionary);

        let mut union: Vec<String> = board
            .cells()
            .flat_map(|(r, c)| solver.solve_from(r, c))
            .collect();
        union.sort();
        union.dedup();

        assert_eq!(union, sorted(solver.solve()));
    }

    #[test]
    fn test_stop_mid_solve_keeps_partial_words() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top", "tea", "pot"]);
        let solver = Solver::new(&board, &dictionary);

        let mut path = PathState::new(board.len());
        let mut search = Search::new(&SolveOptions::default());

        // 't' at (0, 2) explores fully
        solver.visit(0, 2, &mut path, &mut search);
        assert!(path.is_empty());
        let explored_before_stop = search.explored;
        assert!(explored_before_stop > 0);

        search.stop.tripped = Some(SolveStatus::Cancelled);

        // 'p' at (1, 1) would find "pot", but the stop fires first
        solver.visit(1, 1, &mut path, &mut search);
        {
            // a stop seen below a live step still unwinds it
            let mut step = path.enter(board.index(1, 1), 'p');
            solver.visit(1, 2, &mut step, &mut search);
            assert_eq!(step.depth, 1);
        }
        assert!(path.is_empty());
        assert_eq!(search.explored, explored_before_stop);

        let result = solver.finish(search);
        assert_eq!(result.status, SolveStatus::Cancelled);
        assert_eq!(sorted(result.words), vec!["tea", "to", "top"]);
    }

    #[test]
    fn test_raised_stop_flag_cancels_immediately() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top"]);
        let stop = AtomicBool::new(true);

        let result = Solver::new(&board, &dictionary)
            .solve_with(&SolveOptions { stop: Some(&stop), ..SolveOptions::default() });
        assert_eq!(result.status, SolveStatus::Cancelled);
        assert!(result.words.is_empty());
        assert_eq!(result.explored, 0);
    }

    #[test]
    fn test_zero_time_budget_times_out() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top"]);

        let result = Solver::new(&board, &dictionary)
            .solve_with(&SolveOptions { time_budget: Some(Duration::ZERO), ..SolveOptions::default() });
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert!(result.words.is_empty());
    }

    #[test]
    fn test_generous_budget_completes() {
        let board = sample_board();
        let dictionary = DictionaryIndex::build(["to", "top"]);
        let stop = AtomicBool::new(false);

        let result = Solver::new(&board, &dictionary).solve_with(&SolveOptions {
            time_budget: Some(Duration::from_secs(60)),
            stop: Some(&stop),
        });
        assert_eq!(result.status, SolveStatus::Completed);
        assert_eq!(sorted(result.words), vec!["to", "top"]);
    }

    #[test]
    fn test_path_guard_restores_state() {
        let mut path = PathState::new(4);
        {
            let mut first = path.enter(0, 'a');
            {
                let second = first.enter(3, 'b');
                assert_eq!(second.buffer, "ab");
                assert!(second.visited[0] && second.visited[3]);
                assert_eq!(second.depth, 2);
            }
            assert_eq!(first.buffer, "a");
            assert!(!first.visited[3]);
        }
        assert!(path.is_empty());
    }

    #[test]
    fn test_multibyte_letters() {
        let board = Board::build("étéa".chars()).unwrap();
        let dictionary = DictionaryIndex::build(["été", "té"]);

        let words = Solver::new(&board, &dictionary).solve();
        assert_eq!(sorted(words), vec!["té", "été"]);
    }
}
