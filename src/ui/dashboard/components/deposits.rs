//! Dashboard deposits table component
//!
//! Renders the deposit records table for the active view

use super::super::state::DashboardState;
use super::super::utils::short_hex;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState,
};

const HASH_CELL_WIDTH: usize = 18;
const PUBKEY_CELL_WIDTH: usize = 18;

/// Render the deposits table. The view decides the heading and whether the
/// pubkey column appears; the rows themselves are the same either way.
pub fn render_deposits_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let title = format!("{} ({})", state.view.heading(), state.deposits.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if state.deposits.is_empty() {
        let empty_text = if state.is_connected {
            "No deposits found"
        } else {
            "No deposits found - waiting for indexer"
        };
        let placeholder = Paragraph::new(empty_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let show_pubkey = state.view.shows_pubkey();

    let mut header_cells = vec![
        Cell::from("BLOCK"),
        Cell::from("TIMESTAMP"),
        Cell::from("FEE (ETH)"),
        Cell::from("HASH"),
    ];
    if show_pubkey {
        header_cells.push(Cell::from("PUBKEY"));
    }
    let header = Row::new(header_cells)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = state.deposits.iter().map(|deposit| {
        let mut cells = vec![
            Cell::from(deposit.block_number.to_string()),
            Cell::from(deposit.display_timestamp()),
            Cell::from(deposit.fee.clone()),
            Cell::from(short_hex(&deposit.hash, HASH_CELL_WIDTH)),
        ];
        if show_pubkey {
            let pubkey_text = match &deposit.pubkey {
                Some(pubkey) => short_hex(pubkey, PUBKEY_CELL_WIDTH),
                None => "-".to_string(),
            };
            cells.push(Cell::from(pubkey_text));
        }
        Row::new(cells)
    });

    let mut widths = vec![
        Constraint::Length(10),
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];
    if show_pubkey {
        widths.push(Constraint::Fill(1));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(30, 40, 50))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected_row));
    f.render_stateful_widget(table, area, &mut table_state);
}
