//! Solved grid panel
//!
//! Title is the selected puzzle. Below it a status line (solving, error, or
//! the grid size) and then the grid itself, optionally framed by clues.

use nonogram_app::state::{AppState, DisplayConfig};
use nonogram_core::{format_clue, to_renderable, Clues, RequestState, SolutionGrid};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const FILLED: &str = "█";
const EMPTY: &str = "·";

/// Terminal columns and rows one grid cell takes at `cell_size_px`.
///
/// Every 12 px is one row; cells are twice as wide as tall so they look
/// square in a typical terminal font.
pub fn cell_extent(cell_size_px: u16) -> (u16, u16) {
    let scale = (cell_size_px / DisplayConfig::MIN_CELL_SIZE_PX).max(1);
    (scale * 2, scale)
}

pub struct GridView<'a> {
    state: &'a AppState,
}

impl<'a> GridView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self) -> Span<'a> {
        match &self.state.selected {
            Some(id) => Span::styled(format!(" {} ", id), styles::accent_bold()),
            None => Span::styled(" Select a puzzle ", styles::text_secondary()),
        }
    }

    fn render_status_line(&self, area: Rect, buf: &mut Buffer) {
        let left = match &self.state.solve {
            RequestState::Pending => Some(Span::styled("Solving…", styles::text_muted())),
            RequestState::Failed(failure) => {
                Some(Span::styled(failure.message.as_str(), styles::status_red()))
            }
            _ => None,
        };
        if let Some(span) = left {
            buf.set_span(area.x, area.y, &span, area.width);
        }

        if let Some(grid) = self.state.solution() {
            let size = Line::from(Span::styled(
                format!("Size: {} × {}", grid.height(), grid.width()),
                styles::text_secondary(),
            ));
            Paragraph::new(size)
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let status_area = Rect { height: 1, ..inner };
        self.render_status_line(status_area, buf);

        let body = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };

        match self.state.solution() {
            Some(grid) if !grid.is_empty() => {
                render_grid(grid, self.state.display, body, buf);
            }
            _ => {
                let placeholder_y = body.y + body.height / 2;
                if body.height > 0 {
                    let line = Rect {
                        y: placeholder_y,
                        height: 1,
                        ..body
                    };
                    Paragraph::new(Span::styled("Nothing to show yet", styles::text_muted()))
                        .alignment(Alignment::Center)
                        .render(line, buf);
                }
            }
        }
    }
}

/// Draw `grid` into `area`, clipping whatever does not fit.
fn render_grid(grid: &SolutionGrid, display: DisplayConfig, area: Rect, buf: &mut Buffer) {
    let (cell_w, cell_h) = cell_extent(display.cell_size_px());

    let clues = display.show_clues.then(|| Clues::from_grid(grid));
    let label_width = clues
        .as_ref()
        .map(|c| saturating_u16(c.row_label_width()).saturating_add(1))
        .unwrap_or(0)
        .min(area.width);
    let header_rows = clues
        .as_ref()
        .map(|c| saturating_u16(c.column_depth()))
        .unwrap_or(0)
        .min(area.height);

    let origin_x = area.x.saturating_add(label_width);
    let origin_y = area.y.saturating_add(header_rows);

    if let Some(clues) = &clues {
        render_column_clues(clues, origin_x, area, header_rows, cell_w, buf);
        render_row_clues(clues, area, origin_y, label_width, cell_h, buf);
    }

    let filled_cell = FILLED.repeat(cell_w as usize);
    let empty_cell = format!("{}{}", EMPTY, " ".repeat(cell_w as usize - 1));

    for cell in to_renderable(grid) {
        let x = origin_x as usize + cell.col_index * cell_w as usize;
        let y = origin_y as usize + cell.row_index * cell_h as usize;
        if x + cell_w as usize > area.right() as usize {
            continue;
        }

        let (symbol, style) = if cell.filled {
            (&filled_cell, styles::cell_filled())
        } else {
            (&empty_cell, styles::cell_empty())
        };
        for dy in 0..cell_h as usize {
            if y + dy >= area.bottom() as usize {
                break;
            }
            buf.set_stringn(x as u16, (y + dy) as u16, symbol, cell_w as usize, style);
        }
    }
}

/// Column clues stacked above each column, bottom-aligned.
fn render_column_clues(
    clues: &Clues,
    origin_x: u16,
    area: Rect,
    depth: u16,
    cell_w: u16,
    buf: &mut Buffer,
) {
    for (col, clue) in clues.columns.iter().enumerate() {
        let x = origin_x as usize + col * cell_w as usize;
        if x + cell_w as usize > area.right() as usize {
            break;
        }

        let entries: Vec<String> = if clue.is_empty() {
            vec![format_clue(clue)]
        } else {
            clue.iter().map(usize::to_string).collect()
        };
        // Entries that do not fit above the grid drop off the top
        let skip = entries.len().saturating_sub(depth as usize);
        let shown = saturating_u16(entries.len() - skip);
        let top = area.y.saturating_add(depth - shown);
        for (i, entry) in entries.iter().skip(skip).enumerate() {
            let y = top.saturating_add(saturating_u16(i));
            if y >= area.bottom() {
                break;
            }
            let text = format!("{:>width$}", entry, width = cell_w as usize);
            buf.set_stringn(x as u16, y, text, cell_w as usize, styles::clue());
        }
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Row clues right-aligned to the left of each row.
fn render_row_clues(
    clues: &Clues,
    area: Rect,
    origin_y: u16,
    label_width: u16,
    cell_h: u16,
    buf: &mut Buffer,
) {
    let text_width = label_width.saturating_sub(1).min(area.width) as usize;
    for (row, clue) in clues.rows.iter().enumerate() {
        let y = origin_y as usize + row * cell_h as usize;
        if y >= area.bottom() as usize {
            break;
        }
        let text = format!("{:>width$}", format_clue(clue), width = text_width);
        buf.set_stringn(area.x, y as u16, text, text_width, styles::clue());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use nonogram_api::test_utils::test_catalog;
    use nonogram_core::{FailureKind, PuzzleId, RequestFailure};

    fn sample_grid() -> SolutionGrid {
        SolutionGrid::new(
            3,
            5,
            vec![
                vec![true, false, true, false, true],
                vec![false, false, false, false, false],
                vec![true, true, true, true, true],
            ],
        )
        .unwrap()
    }

    fn solved_state(show_clues: bool) -> AppState {
        let mut state = AppState::new();
        state.catalog = RequestState::Succeeded(test_catalog(&["p1"]));
        state.selected = Some(PuzzleId::from("p1"));
        state.solve = RequestState::Succeeded(sample_grid());
        state.display.show_clues = show_clues;
        state
    }

    #[test]
    fn test_cell_extent_scales_with_size() {
        assert_eq!(cell_extent(12), (2, 1));
        assert_eq!(cell_extent(22), (2, 1));
        assert_eq!(cell_extent(24), (4, 2));
        assert_eq!(cell_extent(40), (6, 3));
    }

    #[test]
    fn test_idle_shows_prompt() {
        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&AppState::new()), term.area());

        assert!(term.buffer_contains("Select a puzzle"));
        assert!(term.buffer_contains("Nothing to show yet"));
    }

    #[test]
    fn test_solving_shows_progress_without_grid() {
        let mut state = solved_state(false);
        state.solve = RequestState::Pending;

        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("p1"));
        assert!(term.buffer_contains("Solving…"));
        assert!(!term.buffer_contains(FILLED));
    }

    #[test]
    fn test_failure_shows_error() {
        let mut state = solved_state(false);
        state.solve =
            RequestState::Failed(RequestFailure::new(FailureKind::HttpStatus, "Solve failed: 404"));

        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("Solve failed: 404"));
        assert!(term.buffer_contains("Nothing to show yet"));
    }

    #[test]
    fn test_renders_every_filled_cell() {
        let state = solved_state(false);
        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("Size: 3 × 5"));
        // 22px → 2 columns per cell
        assert_eq!(term.content().matches(FILLED).count(), 8 * 2);
        assert_eq!(term.content().matches(EMPTY).count(), 7);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let state = solved_state(false);
        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("██· ██· ██"));
        assert!(term.buffer_contains("· · · · · "));
        assert!(term.buffer_contains("██████████"));
    }

    #[test]
    fn test_clues_rendered_when_enabled() {
        let state = solved_state(true);
        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        // Row clues: "1 1 1", "0", "5"
        assert!(term.buffer_contains("1 1 1 ██"));
        assert!(term.buffer_contains("    0 · "));
        assert!(term.buffer_contains("    5 ██"));
    }

    #[test]
    fn test_deep_column_clues_are_clipped() {
        // One column alternating filled/empty: 20 runs stacked above it
        let cells = (0..40).map(|r| vec![r % 2 == 0]).collect();
        let mut state = solved_state(true);
        state.solve = RequestState::Succeeded(SolutionGrid::new(40, 1, cells).unwrap());

        let mut term = TestTerminal::compact();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("Size: 40 × 1"));
        // Every header row holds a clue; the rest are clipped
        assert!(term.content().matches(" 1").count() >= 8);
    }

    #[test]
    fn test_row_clue_wider_than_u16_is_clamped() {
        let width = 70_000;
        let row = (0..width).map(|c| c % 2 == 0).collect();
        let mut state = solved_state(true);
        state.solve = RequestState::Succeeded(SolutionGrid::new(1, width, vec![row]).unwrap());

        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("1 1 1 1"));
        // The clue takes the whole width, leaving no room for cells
        assert!(!term.buffer_contains(FILLED));
    }

    #[test]
    fn test_empty_grid_renders_placeholder() {
        let mut state = solved_state(false);
        state.solve = RequestState::Succeeded(SolutionGrid::blank(0, 0));

        let mut term = TestTerminal::new();
        term.render_widget(GridView::new(&state), term.area());

        assert!(term.buffer_contains("Size: 0 × 0"));
        assert!(term.buffer_contains("Nothing to show yet"));
    }
}
