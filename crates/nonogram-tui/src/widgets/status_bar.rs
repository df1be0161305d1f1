//! Status bar widget
//!
//! Request status for both axes on the left, key hints on the right.

use nonogram_app::state::{AppState, CatalogPhase};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn build_status(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());

        let (icon, label, style) = styles::catalog_indicator(self.state.catalog_phase());
        let catalog = Span::styled(format!("{} List {}", icon, label), style);

        let (icon, label, style) = styles::solve_indicator(self.state.solve_phase());
        let solve = Span::styled(format!("{} Solve {}", icon, label), style);

        vec![Span::raw(" "), catalog, separator, solve]
    }

    fn build_hints(&self) -> Vec<Span<'static>> {
        let mut hints = vec![("↑↓", "move"), ("⏎", "solve"), ("+/-", "size"), ("c", "clues")];
        if self.state.catalog_phase() == CatalogPhase::ListFailed {
            hints.push(("r", "retry"));
        }
        hints.push(("q", "quit"));

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = Line::from(self.build_status());
        let status_width = status.width() as u16;
        Paragraph::new(status).render(area, buf);

        let hints = Line::from(self.build_hints());
        // Hints only when they fit beside the status
        if status_width + hints.width() as u16 + 1 <= area.width {
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_state, solved_state, TestTerminal};
    use nonogram_core::{FailureKind, RequestFailure, RequestState};

    #[test]
    fn test_initial_status() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&AppState::new()), term.area());

        assert!(term.buffer_contains("List Loading"));
        assert!(term.buffer_contains("Solve Idle"));
        assert!(term.buffer_contains("quit"));
        assert!(!term.buffer_contains("retry"));
    }

    #[test]
    fn test_solved_status() {
        let state = solved_state(&["p1"], "p1", 2, 2);
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("List Loaded"));
        assert!(term.buffer_contains("Solve Solved"));
    }

    #[test]
    fn test_retry_hint_after_catalog_failure() {
        let mut state = AppState::new();
        state.catalog = RequestState::Failed(RequestFailure::new(FailureKind::Network, "down"));

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("List Failed"));
        assert!(term.buffer_contains("retry"));
    }

    #[test]
    fn test_narrow_terminal_drops_hints() {
        let state = loaded_state(&["p1"]);
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("List Loaded"));
        assert!(!term.buffer_contains("quit"));
    }
}
