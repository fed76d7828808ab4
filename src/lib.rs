//! # Connect Four
//!
//! A two-player console Connect Four on boards from 5x5 up to 9x9, with
//! multi-game sessions and cumulative scoring.
//!
//! ## Modules
//!
//! - [`game`] — Board engine (gravity drops, win/draw resolution), players,
//!   game status, and pure input classifiers
//! - [`ui`] — Console turn controller and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — tracing subscriber setup for the binaries
//! - [`drills`] — Small standalone exercises

pub mod config;
pub mod drills;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
