//! Full-frame rendering tests

use super::*;
use crate::test_utils::{loaded_state, solved_state, TestTerminal};
use nonogram_core::{FailureKind, RequestFailure, RequestState};

#[test]
fn test_startup_frame() {
    let mut term = TestTerminal::new();
    let state = AppState::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Nonogram Viewer"));
    assert!(term.buffer_contains("Loading"));
    assert!(term.buffer_contains("Select a puzzle"));
    assert!(term.buffer_contains("Nothing to show yet"));
}

#[test]
fn test_catalog_failure_frame() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    state.catalog = RequestState::Failed(RequestFailure::new(
        FailureKind::HttpStatus,
        "Failed to load list: 500",
    ));
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Failed to load"));
    assert!(term.buffer_contains("List Failed"));
}

#[test]
fn test_loaded_catalog_lists_ids_in_order() {
    let mut term = TestTerminal::new();
    let state = loaded_state(&["p1", "p2"]);
    term.draw_with(|frame| view(frame, &state));

    let content = term.content();
    let p1 = content.find("p1").unwrap();
    let p2 = content.find("p2").unwrap();
    assert!(p1 < p2);
}

#[test]
fn test_solved_frame_shows_grid_and_size() {
    let mut term = TestTerminal::new();
    let state = solved_state(&["p1", "p2"], "p2", 3, 5);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Size: 3 × 5"));
    assert!(term.buffer_contains("█"));
    assert!(term.buffer_contains("Solve Solved"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut term = TestTerminal::compact();
    let state = solved_state(&["p1"], "p1", 30, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("p1"));
}

