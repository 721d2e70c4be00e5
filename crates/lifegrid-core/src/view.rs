//! The render model: [`BoardView`], [`ViewFrame`], and frame diffing.
//!
//! A [`BoardView`] is what a model draws and a driver consumes: the board's
//! cell states plus one HUD line. Diffing two consecutive views yields a
//! [`ViewFrame`] of only the changed cells, so terminal drivers repaint
//! damage instead of the whole screen.

use crate::cell::CellState;
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// BoardView
// ---------------------------------------------------------------------------

/// A drawable snapshot of the board plus a HUD line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    size: usize,
    cells: Vec<CellState>,
    hud: String,
}

impl BoardView {
    /// Create an all-dead view with an empty HUD.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
            hud: String::new(),
        }
    }

    /// The board dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The HUD line.
    #[inline]
    pub fn hud(&self) -> &str {
        &self.hud
    }

    /// Replace the HUD line.
    pub fn set_hud(&mut self, hud: impl Into<String>) {
        self.hud = hud.into();
    }

    /// The cell state at `(row, col)`; dead if out of range.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col]
        } else {
            CellState::Dead
        }
    }

    /// Write the cell state at `(row, col)`; out-of-range writes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, state: CellState) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = state;
        }
    }

    /// Copy every cell of `grid` into this view. The grid must have the
    /// view's dimension; extra cells of a larger grid are ignored.
    pub fn copy_grid(&mut self, grid: &Grid) {
        for (row, col, state) in grid.iter() {
            self.set_cell(row, col, state);
        }
    }

    /// Row-major `(row, col, state)` triples of the whole board.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / size, i % size, state))
    }

    /// The frame that repaints everything: all size² cells plus the HUD.
    ///
    /// Used when no previous view exists to diff against — at startup and
    /// after the display surface was lost (resize).
    pub fn full_frame(&self) -> ViewFrame {
        ViewFrame {
            cells: self
                .iter()
                .map(|(row, col, state)| CellPatch { row, col, state })
                .collect(),
            size: self.size,
            hud: Some(self.hud.clone()),
        }
    }

    /// Compute the changes from `prev` to `self`.
    ///
    /// The frame holds every cell whose state differs, plus the HUD line
    /// when it changed. Note that diffing against a fresh [`BoardView::new`]
    /// view emits only the live cells; a repaint of the whole surface needs
    /// [`BoardView::full_frame`].
    pub fn diff(&self, prev: &BoardView) -> ViewFrame {
        let mut cells = Vec::new();
        for (row, col, state) in self.iter() {
            if prev.cell(row, col) != state {
                cells.push(CellPatch { row, col, state });
            }
        }
        ViewFrame {
            cells,
            size: self.size,
            hud: (self.hud != prev.hud).then(|| self.hud.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewFrame / CellPatch
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPatch {
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// A set of cell changes between two consecutive views (a diff frame).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewFrame {
    pub cells: Vec<CellPatch>,
    pub size: usize,
    /// The new HUD line, present only when it changed.
    pub hud: Option<String>,
}

impl ViewFrame {
    /// Whether flushing this frame would repaint nothing.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.hud.is_none()
    }
}
