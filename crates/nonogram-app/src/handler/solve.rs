//! Selection and solve transitions
//!
//! Every selection issues a new sequence number. A response is applied only
//! if it carries the latest number, so an older request resolving late can
//! never overwrite a newer selection.

use nonogram_core::{PuzzleId, RequestFailure, RequestState, SolutionGrid};
use tracing::{debug, info, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Select `id` and start solving it.
///
/// Clears any previous grid or error immediately. Ignored unless `id` is in
/// the loaded catalog.
pub(crate) fn handle_select(state: &mut AppState, id: PuzzleId) -> UpdateResult {
    let Some(position) = state.loaded_catalog().and_then(|c| c.position(&id)) else {
        warn!("Ignoring selection of '{}': not in the loaded catalog", id);
        return UpdateResult::none();
    };

    let seq = state.solve_tracker.issue();
    info!("Solving '{}' (seq {})", id, seq);

    state.cursor = position;
    state.selected = Some(id.clone());
    state.solve = RequestState::Pending;

    UpdateResult::action(UpdateAction::SolvePuzzle { id, seq })
}

pub(crate) fn handle_completed(
    state: &mut AppState,
    seq: u64,
    id: PuzzleId,
    grid: SolutionGrid,
) -> UpdateResult {
    if !state.solve_tracker.is_current(seq) {
        debug!(
            "Discarding stale solution for '{}' (seq {}, latest {})",
            id,
            seq,
            state.solve_tracker.latest()
        );
        return UpdateResult::none();
    }

    info!("Solution ready for '{}' ({}x{})", id, grid.height(), grid.width());
    state.solve = RequestState::Succeeded(grid);
    UpdateResult::none()
}

pub(crate) fn handle_failed(
    state: &mut AppState,
    seq: u64,
    id: PuzzleId,
    failure: RequestFailure,
) -> UpdateResult {
    if !state.solve_tracker.is_current(seq) {
        debug!(
            "Discarding stale solve failure for '{}' (seq {}, latest {})",
            id,
            seq,
            state.solve_tracker.latest()
        );
        return UpdateResult::none();
    }

    warn!("Solve of '{}' failed: {}", id, failure);
    state.solve = RequestState::Failed(failure);
    UpdateResult::none()
}
