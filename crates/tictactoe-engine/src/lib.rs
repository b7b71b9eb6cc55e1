//! Turn engine and win detection for square-grid tic-tac-toe.
//!
//! This crate provides:
//! - [`GameRules`] - Trait for deciding whether a grid has a winner
//! - [`LineRules`] - Rows, columns and both diagonals generated for any size
//! - [`Engine`] - Alternating turns, terminal detection and notification
//! - [`SharedEngine`] - A lock-guarded handle for driving one game from many threads
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, OutcomeLog, Outcome};
//! use tictactoe_core::Mark;
//!
//! let mut engine = Engine::with_size(3, OutcomeLog::default()).unwrap();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.turn(x, y).unwrap();
//! }
//! assert!(engine.is_finished());
//! assert_eq!(engine.sink().outcomes(), &[Outcome::Win(Mark::Cross)]);
//! ```

mod engine;
pub mod rules;
mod shared;

pub use engine::{Engine, EngineError, OutcomeLog, OutcomeSink};
pub use rules::{GameRules, LineRules, Outcome};
pub use shared::SharedEngine;
