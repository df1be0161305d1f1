//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use nonogram_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state and draws, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header =
        widgets::MainHeader::new(state.display).with_docs_url(state.docs_url.as_deref());
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::CatalogList::new(state), areas.catalog);
    frame.render_widget(widgets::GridView::new(state), areas.grid);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
