//! Dashboard ticker component
//!
//! Renders the decorative hex ticker strip. Purely cosmetic: the cells are
//! random values refreshed on data changes, drifting left with the
//! animation tick and clipped to the frame width.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_ticker(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    if state.ticker_cells.is_empty() {
        return;
    }

    // Rotate the strip one cell every other tick for the marquee drift
    let len = state.ticker_cells.len();
    let offset = (state.tick / 2) % len;

    let mut spans = Vec::with_capacity(len * 2);
    for (i, cell) in state
        .ticker_cells
        .iter()
        .cycle()
        .skip(offset)
        .take(len)
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            cell.clone(),
            Style::default().fg(Color::Gray),
        ));
    }

    let ticker = Paragraph::new(Line::from(spans));
    f.render_widget(ticker, area);
}
