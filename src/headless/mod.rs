//! Headless mode - JSON event output instead of the TUI
//!
//! Every [`EngineEvent`] becomes one line of NDJSON on stdout. Each object
//! carries an `"event"` tag and a millisecond `"timestamp"`.
//!
//! ```json
//! {"event":"catalog_changed","phase":"list_loaded","puzzles":["p1","p2"],"error":null,"timestamp":1704700001000}
//! {"event":"selection_changed","id":"p1","timestamp":1704700002000}
//! {"event":"solve_changed","id":"p1","phase":"solution_ready","height":2,"width":3,"rows":["#.#","###"],"error":null,"timestamp":1704700003000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use nonogram_app::state::{CatalogPhase, SolvePhase};
use nonogram_app::EngineEvent;
use nonogram_core::{PuzzleId, SolutionGrid};
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, HeadlessExit};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    CatalogChanged {
        phase: CatalogPhase,
        puzzles: Vec<PuzzleId>,
        error: Option<String>,
        timestamp: i64,
    },

    SelectionChanged {
        id: Option<PuzzleId>,
        timestamp: i64,
    },

    /// `rows` draws the grid with `#` for filled and `.` for empty cells
    SolveChanged {
        id: Option<PuzzleId>,
        phase: SolvePhase,
        height: Option<usize>,
        width: Option<usize>,
        rows: Option<Vec<String>>,
        error: Option<String>,
        timestamp: i64,
    },

    DisplayChanged {
        cell_size_px: u16,
        show_clues: bool,
        timestamp: i64,
    },

    Shutdown {
        timestamp: i64,
    },

    /// Something the runner itself rejected
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line.
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one JSON line and flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn from_engine(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::CatalogChanged {
                phase,
                puzzles,
                error,
            } => Self::CatalogChanged {
                phase: *phase,
                puzzles: puzzles.clone(),
                error: error.clone(),
                timestamp,
            },
            EngineEvent::SelectionChanged { id } => Self::SelectionChanged {
                id: id.clone(),
                timestamp,
            },
            EngineEvent::SolveChanged {
                id,
                phase,
                grid,
                error,
            } => Self::SolveChanged {
                id: id.clone(),
                phase: *phase,
                height: grid.as_ref().map(SolutionGrid::height),
                width: grid.as_ref().map(SolutionGrid::width),
                rows: grid.as_ref().map(grid_rows),
                error: error.clone(),
                timestamp,
            },
            EngineEvent::DisplayChanged {
                cell_size_px,
                show_clues,
            } => Self::DisplayChanged {
                cell_size_px: *cell_size_px,
                show_clues: *show_clues,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// One string per row, `#` filled and `.` empty.
pub fn grid_rows(grid: &SolutionGrid) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|&filled| if filled { '#' } else { '.' }).collect())
        .collect()
}
