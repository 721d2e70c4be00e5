//! The [`Grid`] type — a fixed-size square board of [`CellState`]s.
//!
//! A `Grid` is an owned value: the generation engine receives a borrowed
//! snapshot and returns a replacement, so cloning copies the cells rather
//! than sharing them. All addressed access is bounds-checked; out-of-range
//! coordinates surface as [`OutOfRange`], never as a panic.

use std::fmt;

use crate::cell::CellState;

// ---------------------------------------------------------------------------
// OutOfRange
// ---------------------------------------------------------------------------

/// Error returned when a coordinate lies outside `[0, size)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutOfRange {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate ({}, {}) outside {size}x{size} grid",
            self.row,
            self.col,
            size = self.size
        )
    }
}

impl std::error::Error for OutOfRange {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// The eight relative neighbor offsets, (−1,−1) through (+1,+1), excluding
/// (0,0).
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

/// A square grid of cell states, stored row-major.
///
/// The grid is not toroidal: cells past an edge are simply absent, so a
/// border cell has fewer than eight candidate neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid of the given dimension with every cell dead.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    /// Create a grid by calling `f` for every `(row, col)` in row-major
    /// order.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> CellState) -> Self {
        let mut grid = Self::new(size);
        for row in 0..size {
            for col in 0..size {
                grid.cells[row * size + col] = f(row, col);
            }
        }
        grid
    }

    /// The grid dimension N (the board is N×N).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    #[inline]
    pub fn is_valid_coordinate(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfRange> {
        if self.is_valid_coordinate(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(OutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, OutOfRange> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), OutOfRange> {
        let i = self.index(row, col)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Count the live cells among the up-to-eight neighbors of `(row, col)`.
    ///
    /// Each of the eight offsets is examined against the current grid;
    /// off-grid neighbors contribute nothing. The result is in `[0, 8]`
    /// (at most 5 for an edge cell, 3 for a corner cell).
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_valid_coordinate(r, c) && self.cells[r * self.size + c].is_live() {
                count += 1;
            }
        }
        count
    }

    /// Number of live cells on the whole board.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    /// Set every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Row-major iterator over `(row, col, state)` triples.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            next: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(row, col, state)` triples of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    next: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (usize, usize, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.grid.cells.len() {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some((i / self.grid.size, i % self.grid.size, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (usize, usize, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
