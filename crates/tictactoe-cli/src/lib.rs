//! Command-line driver for tic-tac-toe games.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration loading
//! - [`input`] - Parsing moves typed by the players

pub mod config;
pub mod input;
