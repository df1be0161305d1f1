//! nonogram-tui - Terminal UI for the nonogram viewer
//!
//! Renders an [`nonogram_app::Engine`]'s state with ratatui and feeds
//! terminal key presses back into it.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
