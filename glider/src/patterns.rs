//! Classic Game-of-Life seed patterns and centered placement.

/// A named seed pattern as `(row, col)` offsets from its top-left corner.
#[derive(Copy, Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Still life: a 2×2 block.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator: three cells in a row.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator: two blocks blinking at each other.
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

/// The classic diagonal spaceship.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Methuselah: stabilises only after ~1100 generations.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Period-15 oscillator.
pub const PENTADECATHLON: Pattern = Pattern {
    name: "pentadecathlon",
    cells: &[
        (0, 1),
        (1, 1),
        (2, 0),
        (2, 2),
        (3, 1),
        (4, 1),
        (5, 1),
        (6, 1),
        (7, 0),
        (7, 2),
        (8, 1),
        (9, 1),
    ],
};

/// Period-3 oscillator.
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    cells: &[
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 8),
        (0, 9),
        (0, 10),
        (2, 0),
        (2, 5),
        (2, 7),
        (2, 12),
        (3, 0),
        (3, 5),
        (3, 7),
        (3, 12),
        (4, 0),
        (4, 5),
        (4, 7),
        (4, 12),
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 8),
        (5, 9),
        (5, 10),
        (7, 2),
        (7, 3),
        (7, 4),
        (7, 8),
        (7, 9),
        (7, 10),
        (8, 0),
        (8, 5),
        (8, 7),
        (8, 12),
        (9, 0),
        (9, 5),
        (9, 7),
        (9, 12),
        (10, 0),
        (10, 5),
        (10, 7),
        (10, 12),
        (12, 2),
        (12, 3),
        (12, 4),
        (12, 8),
        (12, 9),
        (12, 10),
    ],
};

/// The lightweight spaceship, travelling horizontally.
pub const LWSS: Pattern = Pattern {
    name: "lwss",
    cells: &[
        (0, 1),
        (0, 4),
        (1, 0),
        (2, 0),
        (2, 4),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
    ],
};

/// The patterns bound to the digit keys, in key order `1`..`9`.
pub const ALL: [Pattern; 9] = [
    BLOCK,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    R_PENTOMINO,
    PENTADECATHLON,
    PULSAR,
    LWSS,
];

impl Pattern {
    /// The pattern's bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }

    /// The pattern's cells centered on a `size`×`size` board.
    ///
    /// Cells that fall outside the board (a pattern wider than the board)
    /// are dropped; the simulation skips them anyway when seeding.
    pub fn stamp(&self, size: usize) -> Vec<(usize, usize)> {
        let (rows, cols) = self.extent();
        let top = size.saturating_sub(rows) / 2;
        let left = size.saturating_sub(cols) / 2;
        self.cells
            .iter()
            .map(|&(r, c)| (r + top, c + left))
            .filter(|&(r, c)| r < size && c < size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::{next_generation, CellState, Grid};

    fn grid_from(size: usize, cells: &[(usize, usize)]) -> Grid {
        Grid::from_fn(size, |row, col| {
            if cells.contains(&(row, col)) {
                CellState::Live
            } else {
                CellState::Dead
            }
        })
    }

    #[test]
    fn stamp_centers_the_pattern() {
        let cells = BLOCK.stamp(30);
        assert_eq!(cells, vec![(14, 14), (14, 15), (15, 14), (15, 15)]);
    }

    #[test]
    fn stamp_drops_cells_off_a_tiny_board() {
        // The pulsar does not fit on a 5x5 board; whatever lands inside is
        // kept, the rest dropped.
        let cells = PULSAR.stamp(5);
        assert!(cells.iter().all(|&(r, c)| r < 5 && c < 5));
        assert!(cells.len() < PULSAR.cells.len());
    }

    #[test]
    fn block_is_a_still_life() {
        let g = grid_from(10, &BLOCK.stamp(10));
        assert_eq!(next_generation(&g), g);
    }

    #[test]
    fn oscillators_have_period_two() {
        for pattern in [BLINKER, TOAD, BEACON] {
            let g = grid_from(12, &pattern.stamp(12));
            let after_two = next_generation(&next_generation(&g));
            assert_eq!(after_two, g, "{} should oscillate", pattern.name);
            assert_ne!(next_generation(&g), g, "{} should not be still", pattern.name);
        }
    }

    #[test]
    fn glider_translates_diagonally() {
        // After four generations a glider has moved one cell down-right.
        let start = GLIDER.stamp(20);
        let mut g = grid_from(20, &start);
        for _ in 0..4 {
            g = next_generation(&g);
        }
        let moved: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(g, grid_from(20, &moved));
    }

    #[test]
    fn digit_bindings_cover_nine_patterns() {
        assert_eq!(ALL.len(), 9);
        for pattern in ALL {
            assert!(!pattern.cells.is_empty());
            let (rows, cols) = pattern.extent();
            assert!(rows <= 15 && cols <= 15, "{} fits the board", pattern.name);
        }
    }
}
