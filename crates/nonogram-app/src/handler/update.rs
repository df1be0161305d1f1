//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{catalog, keys::handle_key, solve, UpdateResult};

/// Rows skipped by PageUp/PageDown in the catalog list
const PAGE_SIZE: isize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => catalog::handle_load(state),
        Message::RetryCatalog => catalog::handle_retry(state),
        Message::CatalogLoaded { catalog } => catalog::handle_loaded(state, catalog),
        Message::CatalogLoadFailed { failure } => catalog::handle_failed(state, failure),

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.move_cursor(-1);
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.move_cursor(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.move_cursor(-PAGE_SIZE);
            UpdateResult::none()
        }
        Message::PageDown => {
            state.move_cursor(PAGE_SIZE);
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.cursor_to_start();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.cursor_to_end();
            UpdateResult::none()
        }
        Message::SelectAtCursor => match state.cursor_puzzle() {
            Some(id) => UpdateResult::message(Message::SelectPuzzle { id: id.clone() }),
            None => UpdateResult::none(),
        },
        Message::SelectPuzzle { id } => solve::handle_select(state, id),
        Message::SolveCompleted { seq, id, grid } => {
            solve::handle_completed(state, seq, id, grid)
        }
        Message::SolveFailed { seq, id, failure } => solve::handle_failed(state, seq, id, failure),

        // ─────────────────────────────────────────────────────────
        // Display Messages
        // ─────────────────────────────────────────────────────────
        Message::CellSizeUp => {
            state.display.grow();
            debug!("Cell size {}px", state.display.cell_size_px());
            UpdateResult::none()
        }
        Message::CellSizeDown => {
            state.display.shrink();
            debug!("Cell size {}px", state.display.cell_size_px());
            UpdateResult::none()
        }
        Message::SetCellSize(px) => {
            state.display.set_cell_size_px(px);
            UpdateResult::none()
        }
        Message::ToggleClues => {
            state.display.show_clues = !state.display.show_clues;
            UpdateResult::none()
        }
    }
}
