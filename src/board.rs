//! The square letter grid.
//!
//! Cells are addressed by `(row, col)` with both coordinates in `0..N`. Letters are
//! stored row-major, so `letters[row * N + col]` is the cell's letter and the input
//! `f e t a p o l k m` reads as
//!
//! ```text
//! f e t
//! a p o
//! l k m
//! ```

use std::fmt;

use crate::errors::BoardError;

/// A cell coordinate: `(row, col)`.
pub type Cell = (usize, usize);

/// Neighbor offsets, in the order the solver visits them.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An immutable N×N grid of single-character tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: Vec<char>,
    dimension: usize,
}

impl Board {
    /// Build a board from exactly N² letters, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] if the letter count is not a perfect square.
    pub fn build<I: IntoIterator<Item = char>>(letters: I) -> Result<Board, BoardError> {
        let letters: Vec<char> = letters.into_iter().collect();
        let dimension = letters.len().isqrt();
        if dimension * dimension != letters.len() {
            return Err(BoardError::NotSquare { len: letters.len() });
        }

        Ok(Board { letters, dimension })
    }

    /// Build a board from command-line style tokens, one token per cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTile`] for any token that is not exactly one
    /// character, then [`BoardError::NotSquare`] as for [`Board::build`].
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Board, BoardError> {
        let letters = tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(BoardError::InvalidTile { token: token.to_string() }),
                }
            })
            .collect::<Result<Vec<char>, BoardError>>()?;

        Self::build(letters)
    }

    /// Side length N.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells (N²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }

    /// Flat index of an in-bounds cell.
    #[must_use]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.contains(row, col), "cell ({row}, {col}) out of bounds");
        row * self.dimension + col
    }

    /// The letter at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if self.contains(row, col) {
            Some(self.letters[self.index(row, col)])
        } else {
            None
        }
    }

    /// In-bounds neighbors of `(row, col)`, in the fixed order
    /// `(-1,-1) (-1,0) (-1,+1) (0,-1) (0,+1) (+1,-1) (+1,0) (+1,+1)`.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains(r, c).then_some((r, c))
        })
    }

    /// Every cell, rows outer and columns inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.dimension;
        (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.chunks(self.dimension.max(1)) {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
