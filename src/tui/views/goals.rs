//! Goals tab: one gauge per savings goal

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::models::GoalProgress;
use crate::tui::app::App;

use super::render_placeholder;

const GAUGE_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let progress = app.ledger.manager.all_goals_progress_on(app.today);
    if progress.is_empty() {
        render_placeholder(frame, area, "Goals", "No savings goals yet");
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Goals ({}) ", progress.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height / GAUGE_HEIGHT).max(1) as usize;
    let constraints: Vec<Constraint> = progress
        .iter()
        .take(visible)
        .map(|_| Constraint::Length(GAUGE_HEIGHT))
        .collect();

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (goal, slot) in progress.iter().zip(slots.iter()) {
        frame.render_widget(goal_gauge(goal, app), *slot);
    }
}

fn goal_gauge(goal: &GoalProgress, app: &App) -> Gauge<'static> {
    let money = |m| app.settings.format_money(m);

    let (color, detail) = if goal.is_achieved {
        (Color::Green, "achieved".to_string())
    } else if goal.days_remaining == 0 {
        (Color::Red, "deadline passed".to_string())
    } else {
        (
            Color::Cyan,
            format!(
                "{} days left, {}/day",
                goal.days_remaining,
                money(goal.daily_savings_needed)
            ),
        )
    };

    let title = format!(
        " {}: {} of {} ({}) ",
        goal.name,
        money(goal.saved_amount),
        money(goal.target_amount),
        detail
    );

    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color))
        .ratio((goal.progress_percentage / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", goal.progress_percentage))
}
