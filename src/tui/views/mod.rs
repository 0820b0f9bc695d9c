//! Dashboard views
//!
//! One module per tab, plus the tab bar and status bar.

pub mod budgets;
pub mod goals;
pub mod history;
pub mod overview;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::{centered_rect, AppLayout};

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Overview => overview::render(frame, app, layout.main),
        ActiveView::History => history::render(frame, app, layout.main),
        ActiveView::Budgets => budgets::render(frame, app, layout.main),
        ActiveView::Goals => goals::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(view.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.ledger.account.owner_name())),
        )
        .select(app.active_view.index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw a bordered panel with a centered message
pub(crate) fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(text, centered_rect(80, 20, inner));
}
