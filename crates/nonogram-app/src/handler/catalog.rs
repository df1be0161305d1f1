//! Catalog load transitions
//!
//! `ListLoading -> ListLoaded | ListFailed`. Results only land while the
//! catalog is loading; a retry is only taken from `ListFailed`.

use nonogram_core::{PuzzleCatalog, RequestFailure, RequestState};
use tracing::{debug, info, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Automatic load at startup. Issued at most once.
pub(crate) fn handle_load(state: &mut AppState) -> UpdateResult {
    if state.catalog_requested {
        debug!("Catalog load already issued, ignoring");
        return UpdateResult::none();
    }
    state.catalog_requested = true;
    state.catalog = RequestState::Pending;
    info!("Loading puzzle catalog");
    UpdateResult::action(UpdateAction::FetchCatalog)
}

/// Explicit retry, only after a failure.
pub(crate) fn handle_retry(state: &mut AppState) -> UpdateResult {
    if !state.catalog.is_failed() {
        debug!("Catalog retry ignored while {}", state.catalog.label());
        return UpdateResult::none();
    }
    state.catalog_requested = true;
    state.catalog = RequestState::Pending;
    info!("Retrying puzzle catalog");
    UpdateResult::action(UpdateAction::FetchCatalog)
}

pub(crate) fn handle_loaded(state: &mut AppState, catalog: PuzzleCatalog) -> UpdateResult {
    if !state.catalog.is_pending() {
        debug!("Discarding catalog response while {}", state.catalog.label());
        return UpdateResult::none();
    }
    info!("Catalog loaded with {} puzzles", catalog.len());
    state.catalog = RequestState::Succeeded(catalog);
    state.cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_failed(state: &mut AppState, failure: RequestFailure) -> UpdateResult {
    if !state.catalog.is_pending() {
        debug!("Discarding catalog failure while {}", state.catalog.label());
        return UpdateResult::none();
    }
    warn!("Catalog load failed: {}", failure);
    state.catalog = RequestState::Failed(failure);
    UpdateResult::none()
}
