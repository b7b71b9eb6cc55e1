//! Win detection.
//!
//! The engine is rule-agnostic: after every accepted move it asks the active
//! [`GameRules`] whether the grid now has a winner. Ties are decided by the
//! engine itself from grid occupancy.

mod lines;

pub use lines::LineRules;

use std::fmt;
use tictactoe_core::{Grid, Mark};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given mark completed a winning line.
    Win(Mark),
    /// The grid filled up with no winner.
    Tie,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Trait for deciding the winner of a grid.
///
/// Implementations must be pure: the engine calls this after every move and
/// relies on it having no side effects.
pub trait GameRules {
    /// Returns the winning mark, or `None` if nobody has won yet.
    fn winner(&self, grid: &Grid<Mark>) -> Option<Mark>;
}

impl<R: GameRules + ?Sized> GameRules for Box<R> {
    fn winner(&self, grid: &Grid<Mark>) -> Option<Mark> {
        (**self).winner(grid)
    }
}
