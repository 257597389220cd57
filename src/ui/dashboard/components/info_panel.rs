//! Dashboard info panel component
//!
//! Renders session information panel

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render session info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    // Connection status first, it is the headline fact
    let (status_text, status_color) = if state.is_connected {
        ("Status: Connected", Color::Green)
    } else {
        ("Status: Disconnected", Color::Red)
    };
    info_lines.push(Line::from(vec![Span::styled(
        status_text,
        Style::default().fg(status_color),
    )]));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { api_base_url: _ } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("API: {}", state.environment.api_base_url()),
        Style::default().fg(Color::LightBlue),
    )]));

    // Version info
    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    // Poll cadence and counters
    info_lines.push(Line::from(vec![Span::styled(
        format!("Poll every: {}s", state.poll_interval.as_secs()),
        Style::default().fg(Color::LightYellow),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!("Polls applied: {}", state.polls_applied()),
        Style::default().fg(Color::LightYellow),
    )]));

    // Head block and last sync time
    let last_block_text = match state.last_block {
        Some(block) => format!("Last block: {}", block),
        None => "Last block: -".to_string(),
    };
    info_lines.push(Line::from(vec![Span::styled(
        last_block_text,
        Style::default().fg(Color::LightCyan),
    )]));

    let last_sync_text = match state.last_synced_at() {
        Some(timestamp) => format!("Last sync: {}", timestamp),
        None => "Last sync: -".to_string(),
    };
    info_lines.push(Line::from(vec![Span::styled(
        last_sync_text,
        Style::default().fg(Color::LightCyan),
    )]));

    let info_block = Block::default()
        .title("SESSION INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
