//! Application state (Model in TEA pattern)

use nonogram_core::{PuzzleCatalog, PuzzleId, RequestFailure, RequestState, SolutionGrid};
use serde::Serialize;

use crate::config::Settings;

/// Whether the viewer keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Catalog axis of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPhase {
    ListLoading,
    ListLoaded,
    ListFailed,
}

/// Solve axis of the state machine, re-entered on every selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvePhase {
    Idle,
    Solving,
    SolutionReady,
    SolveFailed,
}

/// Issues sequence numbers to solve requests.
///
/// Only a response tagged with the latest issued number may touch state.
#[derive(Debug, Clone, Default)]
pub struct SolveTracker {
    latest: u64,
}

impl SolveTracker {
    /// Tag a new request. Numbers start at 1 and only increase.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Highest number issued so far, 0 before the first request.
    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

/// How the solved grid is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    cell_size_px: u16,
    pub show_clues: bool,
}

impl DisplayConfig {
    pub const MIN_CELL_SIZE_PX: u16 = 12;
    pub const MAX_CELL_SIZE_PX: u16 = 40;
    pub const DEFAULT_CELL_SIZE_PX: u16 = 22;
    pub const CELL_SIZE_STEP_PX: u16 = 2;

    pub fn new(cell_size_px: u16, show_clues: bool) -> Self {
        Self {
            cell_size_px: Self::clamp(cell_size_px),
            show_clues,
        }
    }

    pub fn cell_size_px(&self) -> u16 {
        self.cell_size_px
    }

    /// Set the cell size, clamped into the supported range.
    pub fn set_cell_size_px(&mut self, px: u16) {
        self.cell_size_px = Self::clamp(px);
    }

    pub fn grow(&mut self) {
        self.set_cell_size_px(self.cell_size_px.saturating_add(Self::CELL_SIZE_STEP_PX));
    }

    pub fn shrink(&mut self) {
        self.set_cell_size_px(self.cell_size_px.saturating_sub(Self::CELL_SIZE_STEP_PX));
    }

    fn clamp(px: u16) -> u16 {
        px.clamp(Self::MIN_CELL_SIZE_PX, Self::MAX_CELL_SIZE_PX)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE_PX, true)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Puzzle list request
    pub catalog: RequestState<PuzzleCatalog>,

    /// Puzzle the user picked last; kept when its solve fails
    pub selected: Option<PuzzleId>,

    /// Solve request for `selected`
    pub solve: RequestState<SolutionGrid>,

    pub display: DisplayConfig,

    /// Highlighted row in the catalog list
    pub cursor: usize,

    pub solve_tracker: SolveTracker,

    /// Set once the automatic catalog load has been issued
    pub catalog_requested: bool,

    /// API documentation link shown in the header
    pub docs_url: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State at application start: catalog pending, nothing selected.
    pub fn new() -> Self {
        Self {
            phase: AppPhase::Running,
            catalog: RequestState::Pending,
            selected: None,
            solve: RequestState::Idle,
            display: DisplayConfig::default(),
            cursor: 0,
            solve_tracker: SolveTracker::default(),
            catalog_requested: false,
            docs_url: None,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            display: DisplayConfig::new(settings.ui.cell_size_px, settings.ui.show_clues),
            docs_url: settings.api.resolved_docs_url(),
            ..Self::new()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn catalog_phase(&self) -> CatalogPhase {
        match &self.catalog {
            RequestState::Succeeded(_) => CatalogPhase::ListLoaded,
            RequestState::Failed(_) => CatalogPhase::ListFailed,
            RequestState::Idle | RequestState::Pending => CatalogPhase::ListLoading,
        }
    }

    pub fn solve_phase(&self) -> SolvePhase {
        match &self.solve {
            RequestState::Idle => SolvePhase::Idle,
            RequestState::Pending => SolvePhase::Solving,
            RequestState::Succeeded(_) => SolvePhase::SolutionReady,
            RequestState::Failed(_) => SolvePhase::SolveFailed,
        }
    }

    /// Loaded catalog, if any.
    pub fn loaded_catalog(&self) -> Option<&PuzzleCatalog> {
        self.catalog.value()
    }

    /// Grid of the current selection, once solved.
    pub fn solution(&self) -> Option<&SolutionGrid> {
        self.solve.value()
    }

    pub fn catalog_error(&self) -> Option<&RequestFailure> {
        self.catalog.failure()
    }

    pub fn solve_error(&self) -> Option<&RequestFailure> {
        self.solve.failure()
    }

    /// Puzzle under the list cursor.
    pub fn cursor_puzzle(&self) -> Option<&PuzzleId> {
        self.loaded_catalog()?.get(self.cursor)
    }

    /// Move the cursor by `delta` rows, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.loaded_catalog().map(PuzzleCatalog::len).unwrap_or(0);
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        let len = self.loaded_catalog().map(PuzzleCatalog::len).unwrap_or(0);
        self.cursor = len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonogram_core::FailureKind;

    fn loaded(ids: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.catalog = RequestState::Succeeded(ids.iter().copied().collect::<PuzzleCatalog>());
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.catalog_phase(), CatalogPhase::ListLoading);
        assert_eq!(state.solve_phase(), SolvePhase::Idle);
        assert!(state.selected.is_none());
        assert_eq!(state.display.cell_size_px(), 22);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_clamps_cell_size() {
        let mut settings = Settings::default();
        settings.ui.cell_size_px = 200;
        settings.ui.show_clues = false;

        let state = AppState::with_settings(&settings);
        assert_eq!(state.display.cell_size_px(), 40);
        assert!(!state.display.show_clues);
    }

    #[test]
    fn test_display_config_steps_and_clamps() {
        let mut display = DisplayConfig::new(0, true);
        assert_eq!(display.cell_size_px(), 12);

        display.shrink();
        assert_eq!(display.cell_size_px(), 12);

        display.grow();
        assert_eq!(display.cell_size_px(), 14);

        display.set_cell_size_px(39);
        display.grow();
        assert_eq!(display.cell_size_px(), 40);
    }

    #[test]
    fn test_solve_tracker() {
        let mut tracker = SolveTracker::default();
        assert!(!tracker.is_current(0));

        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
        assert_eq!(tracker.latest(), b);
    }

    #[test]
    fn test_phases_follow_request_state() {
        let mut state = loaded(&["p1"]);
        assert_eq!(state.catalog_phase(), CatalogPhase::ListLoaded);

        state.catalog = RequestState::Failed(RequestFailure::new(FailureKind::Network, "down"));
        assert_eq!(state.catalog_phase(), CatalogPhase::ListFailed);

        state.solve = RequestState::Pending;
        assert_eq!(state.solve_phase(), SolvePhase::Solving);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut state = loaded(&["a", "b", "c"]);

        state.move_cursor(-1);
        assert_eq!(state.cursor, 0);

        state.move_cursor(5);
        assert_eq!(state.cursor, 2);
        assert_eq!(state.cursor_puzzle().map(|id| id.as_str()), Some("c"));

        state.cursor_to_start();
        assert_eq!(state.cursor, 0);

        state.cursor_to_end();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_cursor_without_catalog() {
        let mut state = AppState::new();
        state.move_cursor(1);
        state.cursor_to_end();
        assert_eq!(state.cursor, 0);
        assert!(state.cursor_puzzle().is_none());
    }
}
