//! Budgets tab: spending against each monthly limit

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::display::format_progress_bar;
use crate::models::BudgetUsage;
use crate::tui::app::App;

use super::render_placeholder;

fn usage_color(usage: &BudgetUsage) -> Color {
    if usage.is_over_budget {
        Color::Red
    } else if usage.is_near_limit() {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let usages = app
        .ledger
        .manager
        .check_all_budgets(&app.ledger.account, app.period);

    let title = format!("Budgets for {}", app.period.label());
    if usages.is_empty() {
        render_placeholder(frame, area, &title, "No budgets set");
        return;
    }

    let header = Row::new(vec!["Category", "Limit", "Spent", "Remaining", "Used"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let money = |m| app.settings.format_money(m);
    let rows: Vec<Row> = usages
        .iter()
        .map(|usage| {
            let color = usage_color(usage);
            Row::new(vec![
                Cell::from(usage.category.clone()),
                Cell::from(money(usage.limit)),
                Cell::from(money(usage.spent)),
                Cell::from(money(usage.remaining)).style(Style::default().fg(color)),
                Cell::from(format_progress_bar(usage.usage_percentage, 20))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(30),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );

    frame.render_widget(table, area);
}
