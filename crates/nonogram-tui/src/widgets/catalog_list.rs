//! Puzzle catalog list
//!
//! Renders whichever catalog state applies: loading, failed (with the retry
//! hint), empty, or the list itself with the cursor row highlighted.

use nonogram_app::state::AppState;
use nonogram_core::{PuzzleCatalog, RequestState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

pub struct CatalogList<'a> {
    state: &'a AppState,
}

impl<'a> CatalogList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_list(&self, catalog: &PuzzleCatalog, area: Rect, buf: &mut Buffer) {
        // Marker column plus a space
        let text_width = (area.width as usize).saturating_sub(2);
        let selected = self.state.selected.as_ref();

        let items: Vec<ListItem> = catalog
            .iter()
            .map(|id| {
                let marker = if Some(id) == selected { "●" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, styles::accent()),
                    Span::raw(" "),
                    Span::raw(truncate_to_width(id.as_str(), text_width)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .style(styles::text_primary())
            .highlight_style(styles::focused_selected());
        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

impl Widget for CatalogList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Puzzles ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match &self.state.catalog {
            RequestState::Idle | RequestState::Pending => {
                Paragraph::new(Span::styled("Loading…", styles::text_muted())).render(inner, buf);
            }
            RequestState::Failed(failure) => {
                let lines = vec![
                    Line::from(Span::styled(failure.message.as_str(), styles::status_red())),
                    Line::raw(""),
                    Line::from(vec![
                        Span::styled("Press ", styles::text_muted()),
                        Span::styled("r", styles::keybinding()),
                        Span::styled(" to retry", styles::text_muted()),
                    ]),
                ];
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            RequestState::Succeeded(catalog) if catalog.is_empty() => {
                Paragraph::new(Span::styled("No puzzles found.", styles::text_muted()))
                    .render(inner, buf);
            }
            RequestState::Succeeded(catalog) => self.render_list(catalog, inner, buf),
        }
    }
}

/// Cut `text` to at most `max` columns, ending in `…` when shortened.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
