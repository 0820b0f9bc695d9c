//! Overview tab: account totals, the selected month, balance trend and
//! budget alerts

use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = OverviewLayout::new(area);

    render_account(frame, app, layout.account);
    render_month(frame, app, layout.month);
    render_trend(frame, app, layout.trend);
    render_alerts(frame, app, layout.alerts);
}

fn label_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_account(frame: &mut Frame, app: &App, area: Rect) {
    let account = &app.ledger.account;
    let money = |m: Money| app.settings.format_money(m);

    let lines = vec![
        Line::from(Span::styled(
            account.owner_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        label_line("Balance", money(account.balance()), Color::Green),
        label_line("Opening", money(account.initial_balance()), Color::White),
        label_line(
            "Transactions",
            account.transaction_count().to_string(),
            Color::White,
        ),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Account ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_month(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.ledger.account.monthly_summary(app.period);
    let money = |m: Money| app.settings.format_money(m);

    let net_color = if summary.net_income.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        label_line("Income", money(summary.total_income), Color::Green),
        label_line("Expenses", money(summary.total_expense), Color::Red),
        label_line("Net", money(summary.net_income), net_color),
        label_line(
            "Transactions",
            summary.transaction_count.to_string(),
            Color::White,
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.period.label()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_trend(frame: &mut Frame, app: &App, area: Rect) {
    // Up to today for the current month, the whole month otherwise
    let month_end = app
        .period
        .next()
        .start_date()
        .pred_opt()
        .unwrap_or(app.today);
    let last_day = month_end.min(app.today).max(app.period.start_date());

    let balances = app.ledger.account.daily_balances(last_day, last_day.day());
    let data: Vec<u64> = balances
        .iter()
        .map(|(_, balance)| balance.cents().max(0) as u64)
        .collect();

    let title = match balances.last() {
        Some((day, balance)) => format!(
            " Balance trend to {} ({}) ",
            day.format("%d %b"),
            app.settings.format_money(*balance)
        ),
        None => " Balance trend ".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&data)
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(sparkline, area);
}

fn render_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let alerts = app
        .ledger
        .manager
        .budget_alerts(&app.ledger.account, app.period);

    let items: Vec<ListItem> = if alerts.is_empty() {
        vec![ListItem::new(Span::styled(
            "All budgets are within their limits.",
            Style::default().fg(Color::Green),
        ))]
    } else {
        alerts
            .iter()
            .map(|alert| {
                let color = if alert.is_over_budget() {
                    Color::Red
                } else {
                    Color::Yellow
                };
                ListItem::new(Span::styled(alert.to_string(), Style::default().fg(color)))
            })
            .collect()
    };

    let block = Block::default().borders(Borders::ALL).title(" Alerts ");
    frame.render_widget(List::new(items).block(block), area);
}
