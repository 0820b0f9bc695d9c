//! Key handling for the dashboard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Tabs
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.set_view(ActiveView::ALL[index]);
        }

        // Month
        KeyCode::Char('[') => app.prev_month(),
        KeyCode::Char(']') => app.next_month(),
        KeyCode::Char('t') => app.reset_month(),

        // History selection
        KeyCode::Char('j') | KeyCode::Down if app.active_view == ActiveView::History => {
            app.select_next_transaction()
        }
        KeyCode::Char('k') | KeyCode::Up if app.active_view == ActiveView::History => {
            app.select_prev_transaction()
        }
        KeyCode::Char('g') | KeyCode::Home if app.active_view == ActiveView::History => {
            app.selected_transaction = 0;
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Money;
    use crate::storage::Ledger;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::open("Budi", Money::from_units(1_000)).unwrap();
        for amount in [10, 20, 30] {
            ledger
                .account
                .add_expense(Money::from_units(amount), "Lunch", "Food")
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_quit_keys() {
        let ledger = sample_ledger();
        let settings = Settings::default();

        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new(&ledger, &settings);
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let mut app = App::new(&ledger, &settings);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let ledger = sample_ledger();
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::History);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_view, ActiveView::Goals);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_view, ActiveView::Budgets);
    }

    #[test]
    fn test_month_keys() {
        let ledger = sample_ledger();
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings);
        let start = app.period;

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.period, start.next());

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.period, start);
    }

    #[test]
    fn test_scrolling_only_in_history() {
        let ledger = sample_ledger();
        let settings = Settings::default();
        let mut app = App::new(&ledger, &settings);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_transaction, 0);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_transaction, 2);

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_transaction, 1);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_transaction, 0);
    }
}
