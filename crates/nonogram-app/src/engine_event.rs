//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Renderers and the headless runner use them instead
//! of polling `AppState`.

use nonogram_core::{PuzzleId, SolutionGrid};

use crate::state::{CatalogPhase, SolvePhase};

/// Domain events emitted by the Engine.
///
/// Each event describes the state *after* the change, so a subscriber that
/// only sees the latest event of a kind still has a consistent view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Catalog axis moved
    CatalogChanged {
        phase: CatalogPhase,
        /// Identifiers once loaded, in server order
        puzzles: Vec<PuzzleId>,
        error: Option<String>,
    },

    /// A different puzzle was selected
    SelectionChanged { id: Option<PuzzleId> },

    /// Solve axis moved, or a new solve started for the same phase
    SolveChanged {
        id: Option<PuzzleId>,
        phase: SolvePhase,
        grid: Option<SolutionGrid>,
        error: Option<String>,
    },

    /// Cell size or clue display changed
    DisplayChanged { cell_size_px: u16, show_clues: bool },

    /// Engine is tearing down; no further events follow
    Shutdown,
}

impl EngineEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CatalogChanged { .. } => "catalog_changed",
            Self::SelectionChanged { .. } => "selection_changed",
            Self::SolveChanged { .. } => "solve_changed",
            Self::DisplayChanged { .. } => "display_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
