//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 rack. Pieces fall to the lowest open slot
//! of a column; four in a line vertically, horizontally or diagonally wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: slots and neighbor topology, the rack with
//!   gravity and win detection, players, per-game session state
//! - [`console`] — Line-oriented game loop over any reader/writer pair
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
