//! Application state for the dashboard
//!
//! The dashboard is read-only: it holds a borrowed ledger and only tracks
//! what is being looked at.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::models::MonthPeriod;
use crate::storage::Ledger;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    History,
    Budgets,
    Goals,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Overview,
        ActiveView::History,
        ActiveView::Budgets,
        ActiveView::Goals,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::History => "History",
            Self::Budgets => "Budgets",
            Self::Goals => "Goals",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct App<'a> {
    pub ledger: &'a Ledger,

    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,

    /// Month used by the overview and budget tabs
    pub period: MonthPeriod,

    /// Date goals are measured against
    pub today: NaiveDate,

    /// Selected row in the history table (0 = newest)
    pub selected_transaction: usize,

    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(ledger: &'a Ledger, settings: &'a Settings) -> Self {
        let today = Local::now().date_naive();
        Self {
            ledger,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            period: MonthPeriod::of_date(today),
            today,
            selected_transaction: 0,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.status_message = None;
    }

    pub fn next_view(&mut self) {
        self.set_view(self.active_view.next());
    }

    pub fn prev_view(&mut self) {
        self.set_view(self.active_view.prev());
    }

    pub fn next_month(&mut self) {
        self.period = self.period.next();
        self.status_message = Some(format!("Showing {}", self.period.label()));
    }

    pub fn prev_month(&mut self) {
        self.period = self.period.prev();
        self.status_message = Some(format!("Showing {}", self.period.label()));
    }

    /// Jump back to the current month
    pub fn reset_month(&mut self) {
        self.period = MonthPeriod::of_date(self.today);
        self.status_message = None;
    }

    pub fn select_next_transaction(&mut self) {
        let count = self.ledger.account.transaction_count();
        if count > 0 && self.selected_transaction + 1 < count {
            self.selected_transaction += 1;
        }
    }

    pub fn select_prev_transaction(&mut self) {
        self.selected_transaction = self.selected_transaction.saturating_sub(1);
    }
}
