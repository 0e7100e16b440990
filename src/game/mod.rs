//! Core Connect Four game logic: slots and their neighbor topology, the rack
//! with gravity and win detection, players, and the per-game session state.

mod board;
mod player;
mod slot;
mod state;

pub use board::{Axis, Board, Placement, COLS, CONNECT, ROWS};
pub use player::Player;
pub use slot::{Coord, Direction, Slot};
pub use state::{GameOutcome, GameState};
