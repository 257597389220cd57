//! Dashboard header component
//!
//! Renders the title and connection gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and connection gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("ETH DEPOSIT TRACKER v{}", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Connection gauge: green and draining toward the next scheduled sync
    // when connected, animated while a fetch is in flight or reconnecting.
    let animated = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
    let (progress_text, gauge_color, progress_percent) = if state.last_applied_seq().is_none() {
        // Nothing applied yet, first poll still in flight
        ("CONNECTING...".to_string(), Color::LightBlue, animated)
    } else if state.sync_in_flight() {
        ("SYNCING...".to_string(), Color::LightCyan, animated)
    } else if state.is_connected {
        let label = match state.last_block {
            Some(block) => format!("CONNECTED - LAST BLOCK: {}", block),
            None => "CONNECTED - No deposits yet".to_string(),
        };
        let remaining = (state.next_sync_fraction().unwrap_or(1.0) * 100.0) as u16;
        (label, Color::LightGreen, remaining)
    } else {
        (
            format!(
                "DISCONNECTED - Retrying every {}s",
                state.poll_interval.as_secs()
            ),
            Color::LightRed,
            animated,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
