//! Terminal UI: an interactive ratatui view for two players sharing one
//! keyboard.

mod app;
mod game_view;

pub use app::App;
