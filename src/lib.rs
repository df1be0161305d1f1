//! Nonogram Viewer Library
//!
//! Terminal client for a remote nonogram solving service: pick a built-in
//! puzzle, see the solved grid.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{load_settings, run_headless, run_with_settings, Overrides};
pub use headless::HeadlessExit;
