//! Message types for the application (TEA pattern)

use nonogram_core::{PuzzleCatalog, PuzzleId, RequestFailure, SolutionGrid};

use crate::input_key::InputKey;

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Periodic redraw tick
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────
    /// Automatic load at startup; honored once
    LoadCatalog,

    /// Explicit user retry after a failed load
    RetryCatalog,

    CatalogLoaded { catalog: PuzzleCatalog },

    CatalogLoadFailed { failure: RequestFailure },

    // ─────────────────────────────────────────────────────────
    // Selection and solving
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorHome,
    CursorEnd,

    /// Select the puzzle under the list cursor
    SelectAtCursor,

    /// Select a puzzle by id and start solving it
    SelectPuzzle { id: PuzzleId },

    /// Solve response, tagged with the sequence number it was issued under
    SolveCompleted {
        seq: u64,
        id: PuzzleId,
        grid: SolutionGrid,
    },

    SolveFailed {
        seq: u64,
        id: PuzzleId,
        failure: RequestFailure,
    },

    // ─────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────
    CellSizeUp,
    CellSizeDown,
    SetCellSize(u16),
    ToggleClues,
}
