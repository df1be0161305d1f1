//! Semantic style builders

use nonogram_app::state::{CatalogPhase, SolvePhase};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" for the highlighted list row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Grid styles ---
pub fn cell_filled() -> Style {
    Style::default().fg(palette::CELL_FILLED)
}

pub fn cell_empty() -> Style {
    Style::default().fg(palette::CELL_EMPTY)
}

pub fn clue() -> Style {
    Style::default().fg(palette::CLUE)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Phase indicators ---

/// Icon, label and style for the catalog axis
pub fn catalog_indicator(phase: CatalogPhase) -> (&'static str, &'static str, Style) {
    match phase {
        CatalogPhase::ListLoading => ("◌", "Loading", Style::default().fg(palette::STATUS_YELLOW)),
        CatalogPhase::ListLoaded => ("●", "Loaded", Style::default().fg(palette::STATUS_GREEN)),
        CatalogPhase::ListFailed => ("✗", "Failed", status_red()),
    }
}

/// Icon, label and style for the solve axis
pub fn solve_indicator(phase: SolvePhase) -> (&'static str, &'static str, Style) {
    match phase {
        SolvePhase::Idle => ("○", "Idle", text_muted()),
        SolvePhase::Solving => ("◌", "Solving", Style::default().fg(palette::STATUS_YELLOW)),
        SolvePhase::SolutionReady => ("●", "Solved", Style::default().fg(palette::STATUS_GREEN)),
        SolvePhase::SolveFailed => ("✗", "Failed", status_red()),
    }
}
