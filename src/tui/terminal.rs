//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that puts
//! the terminal back before the panic message prints.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::PocketbookError;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
///
/// The ledger is loaded before the terminal switches modes, so a missing or
/// broken ledger is reported on the normal screen.
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let ledger = storage.load()?;
    debug!(
        transactions = ledger.account.transaction_count(),
        "Starting dashboard"
    );

    let mut terminal =
        init_terminal().map_err(|e| PocketbookError::Tui(format!("Failed to start: {}", e)))?;
    let result = event_loop(&mut terminal, App::new(&ledger, settings));
    restore_terminal()?;

    result
}

fn event_loop(terminal: &mut Tui, mut app: App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?);
    }

    Ok(())
}
