//! Lock-guarded engine handle.

use crate::engine::{Engine, EngineError, OutcomeSink};
use crate::rules::{GameRules, Outcome};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictactoe_core::Mark;

/// A cloneable handle to one [`Engine`] shared between threads.
///
/// Each [`turn`](SharedEngine::turn) runs entirely under a single lock, so
/// two racing winning moves can never both be accepted.
#[derive(Debug)]
pub struct SharedEngine<R, S> {
    inner: Arc<Mutex<Engine<R, S>>>,
}

impl<R, S> Clone for SharedEngine<R, S> {
    fn clone(&self) -> Self {
        SharedEngine {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: GameRules, S: OutcomeSink> SharedEngine<R, S> {
    pub fn new(engine: Engine<R, S>) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // The engine only mutates after every check has passed, so a panic in
    // another holder cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Engine<R, S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Engine::turn`].
    pub fn turn(&self, x: i32, y: i32) -> Result<(), EngineError> {
        self.lock().turn(x, y)
    }

    pub fn next_turn(&self) -> Mark {
        self.lock().next_turn()
    }

    pub fn is_finished(&self) -> bool {
        self.lock().is_finished()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.lock().outcome()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&Engine<R, S>) -> T) -> T {
        f(&self.lock())
    }
}
