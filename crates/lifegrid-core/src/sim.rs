//! The [`Simulation`] controller — owns the current board.
//!
//! External collaborators (app model, drivers) go through this type: it
//! exposes step/clear/randomize/toggle and a read-only view of the grid.
//! It has no notion of running or paused; whoever calls [`Simulation::step`]
//! owns the cadence.

use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use crate::cell::CellState;
use crate::engine;
use crate::grid::{Grid, OutOfRange};

/// Probability used for random seeding when the caller has no opinion.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.5;

/// Owns the current [`Grid`], a random source, and the generation counter.
pub struct Simulation {
    grid: Grid,
    rng: SmallRng,
    generation: u64,
}

impl Simulation {
    /// Create a simulation over an empty `size`×`size` board, with the
    /// random source seeded from the OS (runs are non-deterministic).
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            rng: rand::make_rng(),
            generation: 0,
        }
    }

    /// Create a simulation with a deterministic random source.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self {
            grid: Grid::new(size),
            rng: SmallRng::seed_from_u64(seed),
            generation: 0,
        }
    }

    /// Read-only view of the current board.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps since the last seed/clear.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells on the board.
    #[inline]
    pub fn population(&self) -> usize {
        self.grid.live_count()
    }

    /// Advance the board by one generation.
    pub fn step(&mut self) {
        self.grid = engine::next_generation(&self.grid);
        self.generation += 1;
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Reseed the board: each cell is independently set live with
    /// probability `p` (clamped to `[0, 1]`). Resets the generation counter.
    pub fn randomize(&mut self, p: f64) {
        let p = p.clamp(0.0, 1.0);
        let size = self.grid.size();
        self.grid = Grid::from_fn(size, |_, _| {
            if self.rng.random_range(0.0..1.0) < p {
                CellState::Live
            } else {
                CellState::Dead
            }
        });
        self.generation = 0;
    }

    /// Replace the board with the given live cells, skipping any that fall
    /// outside it. Resets the generation counter.
    pub fn seed_pattern(&mut self, cells: &[(usize, usize)]) {
        self.grid.clear();
        for &(row, col) in cells {
            self.grid.set(row, col, CellState::Live).ok();
        }
        self.generation = 0;
    }

    /// Flip the cell at `(row, col)` in place.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), OutOfRange> {
        let state = self.grid.get(row, col)?;
        self.grid.set(row, col, state.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_simulation_starts_empty_and_randomizes() {
        let mut sim = Simulation::new(8);
        assert_eq!(sim.population(), 0);
        sim.randomize(1.0);
        assert_eq!(sim.population(), 64);
    }

    #[test]
    fn step_advances_generation() {
        let mut sim = Simulation::with_seed(5, 1);
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn step_runs_the_engine() {
        let mut sim = Simulation::with_seed(5, 1);
        sim.seed_pattern(&[(2, 1), (2, 2), (2, 3)]);
        sim.step();
        assert_eq!(sim.grid().get(1, 2), Ok(CellState::Live));
        assert_eq!(sim.grid().get(2, 2), Ok(CellState::Live));
        assert_eq!(sim.grid().get(3, 2), Ok(CellState::Live));
        assert_eq!(sim.grid().get(2, 1), Ok(CellState::Dead));
        assert_eq!(sim.grid().get(2, 3), Ok(CellState::Dead));
        assert_eq!(sim.population(), 3);
    }

    #[test]
    fn clear_resets_board_and_counter() {
        let mut sim = Simulation::with_seed(4, 2);
        sim.randomize(1.0);
        sim.step();
        sim.clear();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        for (_, _, state) in sim.grid().iter() {
            assert_eq!(state, CellState::Dead);
        }
    }

    #[test]
    fn randomize_extremes() {
        let mut sim = Simulation::with_seed(6, 3);
        sim.randomize(1.0);
        assert_eq!(sim.population(), 36);
        sim.randomize(0.0);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn randomize_clamps_probability() {
        let mut sim = Simulation::with_seed(4, 4);
        sim.randomize(7.5);
        assert_eq!(sim.population(), 16);
        sim.randomize(-1.0);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn randomize_is_reproducible_under_a_seed() {
        let mut a = Simulation::with_seed(8, 42);
        let mut b = Simulation::with_seed(8, 42);
        a.randomize(DEFAULT_LIVE_PROBABILITY);
        b.randomize(DEFAULT_LIVE_PROBABILITY);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn randomize_resets_generation() {
        let mut sim = Simulation::with_seed(4, 5);
        sim.step();
        sim.step();
        sim.randomize(0.5);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn toggle_twice_restores_the_cell() {
        let mut sim = Simulation::with_seed(4, 6);
        sim.toggle_cell(1, 2).unwrap();
        assert_eq!(sim.grid().get(1, 2), Ok(CellState::Live));
        sim.toggle_cell(1, 2).unwrap();
        assert_eq!(sim.grid().get(1, 2), Ok(CellState::Dead));
    }

    #[test]
    fn toggle_out_of_range_fails() {
        let mut sim = Simulation::with_seed(4, 7);
        let err = sim.toggle_cell(4, 0).unwrap_err();
        assert_eq!(err.size, 4);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn seed_pattern_skips_out_of_range_cells() {
        let mut sim = Simulation::with_seed(4, 8);
        sim.seed_pattern(&[(0, 0), (9, 9), (3, 3)]);
        assert_eq!(sim.population(), 2);
        assert_eq!(sim.grid().get(0, 0), Ok(CellState::Live));
        assert_eq!(sim.grid().get(3, 3), Ok(CellState::Live));
    }
}
