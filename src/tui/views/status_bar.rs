//! Status bar view
//!
//! Shows the balance, the selected month and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let balance = app.ledger.account.balance();

    let mut spans = vec![
        Span::styled(" Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            app.settings.format_money(balance),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(app.period.label(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
    ];

    match &app.status_message {
        Some(message) => spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => spans.push(Span::styled(
            "Tab/1-4 view  [ ] month  t this month  j/k scroll  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
