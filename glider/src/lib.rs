//! Glider — an interactive Game of Life in the terminal.

pub mod model;
pub mod patterns;

pub use model::{LifeModel, BOARD_SIZE, TICK_INTERVAL};
