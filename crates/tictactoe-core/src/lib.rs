//! Core types for tic-tac-toe.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Mark`] for the two players
//! - [`Coordinate`] for grid cells
//! - [`Grid`] for the bounded, sparse N×N board

mod coordinate;
mod grid;
mod mark;

pub use coordinate::Coordinate;
pub use grid::{Grid, GridError};
pub use mark::Mark;
