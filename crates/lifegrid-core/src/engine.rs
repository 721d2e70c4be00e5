//! The generation engine — computes the next board from the current one.
//!
//! Stepping is split into two phases so the simultaneous-update invariant is
//! explicit and independently testable: [`scan`] decides every cell's fate
//! against the unmodified input grid and records the decisions in a
//! [`Transition`]; [`Transition::apply`] then writes all of them at once.
//! No cell's fate can ever observe another cell's already-updated state.

use crate::cell::CellState;
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// The change sets produced by one scan: cells becoming live (`births`) and
/// cells becoming dead (`deaths`).
///
/// The two sets are disjoint by construction — a cell scheduled to be born
/// was dead, a cell scheduled to die was live — so the order they are
/// applied in does not matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    births: Vec<(usize, usize)>,
    deaths: Vec<(usize, usize)>,
}

impl Transition {
    /// Cells transitioning to live, in row-major order.
    pub fn births(&self) -> &[(usize, usize)] {
        &self.births
    }

    /// Cells transitioning to dead, in row-major order.
    pub fn deaths(&self) -> &[(usize, usize)] {
        &self.deaths
    }

    /// Whether the step changes nothing (the grid is a still life).
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }

    /// Write both change sets into `grid`.
    ///
    /// Coordinates outside `grid` are skipped; a transition produced by
    /// [`scan`] is always in range for a grid of the scanned size.
    pub fn apply(&self, grid: &mut Grid) {
        for &(row, col) in &self.births {
            grid.set(row, col, CellState::Live).ok();
        }
        for &(row, col) in &self.deaths {
            grid.set(row, col, CellState::Dead).ok();
        }
    }
}

// ---------------------------------------------------------------------------
// scan / next_generation
// ---------------------------------------------------------------------------

/// Decide every cell's fate against the current grid without mutating it.
///
/// For each cell, the live-neighbor count `n` is taken from `grid` and the
/// rule table applied:
/// - live with `n < 2` or `n > 3` → scheduled to die,
/// - dead with `n == 3` → scheduled to be born,
/// - anything else → unchanged.
pub fn scan(grid: &Grid) -> Transition {
    let mut transition = Transition::default();
    for (row, col, state) in grid.iter() {
        let n = grid.count_live_neighbors(row, col);
        match state {
            CellState::Live if n < 2 || n > 3 => transition.deaths.push((row, col)),
            CellState::Dead if n == 3 => transition.births.push((row, col)),
            _ => {}
        }
    }
    transition
}

/// Compute the next generation of `grid`.
///
/// Total over any grid: there is no failure path, and equal inputs always
/// produce equal outputs.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    scan(grid).apply(&mut next);
    next
}
