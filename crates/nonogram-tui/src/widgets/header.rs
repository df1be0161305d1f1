//! Header bar widget
//!
//! Title on the left; cell size, clue toggle and the API docs link on the
//! right. The right section is dropped piece by piece on narrow terminals.

use nonogram_app::state::DisplayConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title, display settings and docs link
pub struct MainHeader<'a> {
    display: DisplayConfig,
    docs_url: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            docs_url: None,
        }
    }

    pub fn with_docs_url(mut self, docs_url: Option<&'a str>) -> Self {
        self.docs_url = docs_url;
        self
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("▦", styles::accent()),
            Span::raw(" "),
            Span::styled("Nonogram Viewer", styles::accent_bold()),
        ])
    }

    fn display_line(&self) -> Line<'static> {
        let clues = if self.display.show_clues { "on" } else { "off" };
        Line::from(vec![
            Span::styled("Cell ", styles::text_muted()),
            Span::styled(
                format!("{}px", self.display.cell_size_px()),
                styles::text_secondary(),
            ),
            Span::styled("  Clues ", styles::text_muted()),
            Span::styled(clues, styles::text_secondary()),
            Span::raw(" "),
        ])
    }

    fn docs_line(&self) -> Option<Line<'a>> {
        self.docs_url.map(|url| {
            Line::from(vec![
                Span::styled("API docs ", styles::text_muted()),
                Span::styled(url, styles::accent()),
                Span::raw("  "),
            ])
        })
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right-aligned: [docs] [display], whatever fits after the title
        let mut right = self.display_line().spans;
        let display_only = Line::from(right.clone());
        if let Some(docs) = self.docs_line() {
            let mut spans = docs.spans;
            spans.append(&mut right);
            right = spans;
        }

        for line in [Line::from(right), display_only] {
            let width = line.width() as u16;
            if title_width + width + 2 <= inner.width {
                let x = inner.x + inner.width - width;
                buf.set_line(x, inner.y, &line, width);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(DisplayConfig::default()), term.area());

        assert!(term.buffer_contains("Nonogram Viewer"));
        assert!(term.buffer_contains("Cell 22px"));
        assert!(term.buffer_contains("Clues on"));
    }

    #[test]
    fn test_header_renders_docs_url() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = MainHeader::new(DisplayConfig::new(30, false))
            .with_docs_url(Some("http://localhost:8080/swagger-ui/index.html"));
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("API docs http://localhost:8080/swagger-ui/index.html"));
        assert!(term.buffer_contains("Cell 30px"));
        assert!(term.buffer_contains("Clues off"));
    }

    #[test]
    fn test_header_drops_docs_when_narrow() {
        let mut term = TestTerminal::compact();
        let header = MainHeader::new(DisplayConfig::default())
            .with_docs_url(Some("http://localhost:8080/swagger-ui/index.html"));
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Nonogram Viewer"));
        assert!(!term.buffer_contains("swagger"));
    }
}
