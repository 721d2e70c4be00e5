//! **lifegrid-core** — Conway's Game of Life simulation core.
//!
//! This crate provides the simulation itself and the plain-data seams around
//! it: binary cell states, a bounds-checked grid, the two-phase generation
//! engine, the simulation controller, input messages, a render model, and
//! the Elm-architecture application loop. It depends on no rendering or
//! input technology; drivers live in separate crates.

pub mod app;
pub mod cell;
pub mod engine;
pub mod grid;
pub mod messages;
pub mod sim;
pub mod view;

pub use app::{cmd, App, AppConfig, Context, Driver, Effect, Model};
pub use cell::CellState;
pub use engine::{next_generation, scan, Transition};
pub use grid::{Grid, OutOfRange};
pub use messages::{Key, Msg};
pub use sim::Simulation;
pub use view::{BoardView, CellPatch, ViewFrame};
