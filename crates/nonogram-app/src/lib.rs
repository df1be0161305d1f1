//! nonogram-app - Application state and orchestration for the nonogram viewer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that owns the request lifecycle and teardown flag,
//! and configuration loading. It knows nothing about terminals; the TUI and
//! headless runners sit on top of it.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, CatalogPhase, DisplayConfig, SolvePhase, SolveTracker};
