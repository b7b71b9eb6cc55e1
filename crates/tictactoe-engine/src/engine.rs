//! Turn management with terminal detection.
//!
//! The [`Engine`] owns the grid and alternates turns between the two marks,
//! starting with [`Mark::Cross`]. After every accepted move it asks its
//! [`GameRules`] for a winner and, failing that, checks whether the grid is
//! full. Either condition finishes the game and is reported exactly once to
//! the [`OutcomeSink`].

use crate::rules::{GameRules, LineRules, Outcome};
use thiserror::Error;
use tictactoe_core::{Coordinate, Grid, GridError, Mark};

/// Error type for engine operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The grid rejected the move.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The game has already ended.
    #[error("game is over")]
    GameIsOver,
}

/// Receives the final outcome of a game.
///
/// Called at most once per engine, on the move that ends the game.
pub trait OutcomeSink {
    fn game_finished(&mut self, outcome: Outcome);
}

impl<F: FnMut(Outcome)> OutcomeSink for F {
    fn game_finished(&mut self, outcome: Outcome) {
        self(outcome)
    }
}

/// A sink that records every outcome it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeLog {
    outcomes: Vec<Outcome>,
}

impl OutcomeLog {
    /// Returns the recorded outcomes in arrival order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the most recent outcome.
    pub fn last(&self) -> Option<Outcome> {
        self.outcomes.last().copied()
    }
}

impl OutcomeSink for OutcomeLog {
    fn game_finished(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }
}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone)]
pub struct Engine<R, S> {
    /// Board contents.
    grid: Grid<Mark>,
    /// Win detection.
    rules: R,
    /// Notified on the terminal transition.
    sink: S,
    /// Mark that places on the next accepted move.
    next_turn: Mark,
    /// Set once the game has ended.
    outcome: Option<Outcome>,
    /// Accepted moves in order.
    moves: Vec<(Mark, Coordinate)>,
}

impl<S: OutcomeSink> Engine<LineRules, S> {
    /// Creates a game on an empty `size × size` grid with the standard lines.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero or negative.
    pub fn with_size(size: i32, sink: S) -> Result<Self, GridError> {
        let grid = Grid::new(size)?;
        Ok(Self::new(grid, LineRules::for_size(size), sink))
    }
}

impl<R: GameRules, S: OutcomeSink> Engine<R, S> {
    /// Creates a game on the given grid.
    pub fn new(grid: Grid<Mark>, rules: R, sink: S) -> Self {
        Engine {
            grid,
            rules,
            sink,
            next_turn: Mark::Cross,
            outcome: None,
            moves: Vec::new(),
        }
    }

    /// Returns the mark that moves next.
    pub fn next_turn(&self) -> Mark {
        self.next_turn
    }

    /// Returns true if the game has ended.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the outcome if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid<Mark> {
        &self.grid
    }

    /// Returns the accepted moves in order.
    pub fn moves(&self) -> &[(Mark, Coordinate)] {
        &self.moves
    }

    /// Returns the outcome sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Places the next mark at `(x, y)`.
    ///
    /// On success the turn either passes to the other mark or, if the move
    /// won or filled the grid, the game finishes and the sink is notified.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GameIsOver`] if the game has already ended, or
    /// [`EngineError::Grid`] if the coordinate is outside the grid or already
    /// occupied. Nothing changes on error.
    pub fn turn(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        if self.outcome.is_some() {
            tracing::debug!(x, y, "move rejected: game is over");
            return Err(EngineError::GameIsOver);
        }

        let mark = self.next_turn;
        let coordinate = Coordinate::new(x, y);
        if let Err(e) = self.grid.put(mark, coordinate) {
            tracing::debug!(%mark, %coordinate, error = %e, "move rejected");
            return Err(e.into());
        }
        self.moves.push((mark, coordinate));
        tracing::debug!(%mark, %coordinate, ply = self.moves.len(), "move accepted");

        if let Some(winner) = self.rules.winner(&self.grid) {
            self.finish(Outcome::Win(winner));
            return Ok(());
        }

        if !self.grid.has_coordinate_available() {
            self.finish(Outcome::Tie);
            return Ok(());
        }

        self.next_turn = mark.opposite();
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        tracing::info!(%outcome, plies = self.moves.len(), "game finished");
        self.sink.game_finished(outcome);
    }
}
