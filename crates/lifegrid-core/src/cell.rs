//! The [`CellState`] type — a single binary cell.

/// The state of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Dead,
    Live,
}

impl CellState {
    /// Whether the cell is live.
    #[inline]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }

    /// The opposite state. Applying this twice returns the original state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dead => Self::Live,
            Self::Live => Self::Dead,
        }
    }
}

impl Default for CellState {
    #[inline]
    fn default() -> Self {
        Self::Dead
    }
}
