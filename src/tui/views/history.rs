//! History tab: every transaction, newest first, with the running balance

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

use super::render_placeholder;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines = app.ledger.account.running_balances();
    if lines.is_empty() {
        render_placeholder(frame, area, "History", "No transactions yet");
        return;
    }

    let header = Row::new(vec!["Date", "Type", "Category", "Description", "Amount", "Balance"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = lines
        .iter()
        .rev()
        .map(|line| {
            let txn = line.transaction;
            let amount_color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };

            Row::new(vec![
                Cell::from(txn.timestamp().format(&app.settings.date_format).to_string()),
                Cell::from(txn.kind().to_string()),
                Cell::from(txn.category().to_string()),
                Cell::from(txn.description().to_string()),
                Cell::from(app.settings.format_money(txn.signed_amount()))
                    .style(Style::default().fg(amount_color)),
                Cell::from(app.settings.format_money(line.balance)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(17),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Min(16),
        Constraint::Length(18),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" History ({}) ", lines.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_transaction));
    frame.render_stateful_widget(table, area, &mut state);
}
