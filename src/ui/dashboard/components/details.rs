//! Deposit detail modal component
//!
//! Renders the full record for one captured deposit over the dashboard

use super::super::utils::centered_rect;
use crate::deposit::Deposit;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

fn field_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Render the detail modal for one deposit. The record was captured when the
/// modal opened, so the fields stay put even while polls keep refreshing the
/// table underneath.
pub fn render_details(f: &mut Frame, deposit: &Deposit) {
    let area = centered_rect(70, 50, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        field_line(
            "Block Number",
            deposit.block_number.to_string(),
            Color::LightGreen,
        ),
        field_line("Timestamp", deposit.display_timestamp(), Color::White),
        field_line("Fee (ETH)", deposit.fee.clone(), Color::LightYellow),
        field_line("Hash", deposit.hash.clone(), Color::White),
    ];
    match &deposit.pubkey {
        Some(pubkey) => {
            lines.push(field_line("Public Key", pubkey.clone(), Color::White));
            lines.push(field_line(
                "Type",
                "External".to_string(),
                Color::LightGreen,
            ));
        }
        None => {
            lines.push(field_line(
                "Type",
                "Internal".to_string(),
                Color::LightBlue,
            ));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ESC/X] Close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title("TRANSACTION DETAILS")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let modal = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(modal, area);
}
