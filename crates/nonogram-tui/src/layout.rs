//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the catalog list column, borders included
pub const CATALOG_WIDTH: u16 = 28;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, docs link and cell size
    pub header: Rect,

    /// Puzzle list on the left
    pub catalog: Rect,

    /// Solved grid on the right
    pub grid: Rect,

    /// One-line key hints and request status
    pub status: Rect,
}

/// Create the main screen layout.
///
/// The catalog column shrinks to a third of the width on narrow terminals.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let catalog_width = CATALOG_WIDTH.min(rows[1].width / 3);
    let columns =
        Layout::horizontal([Constraint::Length(catalog_width), Constraint::Min(0)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        catalog: columns[0],
        grid: columns[1],
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 100, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.catalog.width, CATALOG_WIDTH);
        assert_eq!(layout.catalog.height, 20);
        assert_eq!(layout.grid.x, CATALOG_WIDTH);
        assert_eq!(layout.grid.width, 100 - CATALOG_WIDTH);
    }

    #[test]
    fn test_narrow_terminal_shrinks_catalog() {
        let layout = create(Rect::new(0, 0, 45, 12));
        assert_eq!(layout.catalog.width, 15);
        assert_eq!(layout.catalog.width + layout.grid.width, 45);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.catalog.height + layout.status.height,
            area.height
        );
    }
}
