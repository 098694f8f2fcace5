//! Terminal UI: the imperative shell around the store.
//!
//! The event loop draws from a full state snapshot, waits for the next
//! terminal event, translates it, and sends the resulting action to the
//! store. Each `send` is awaited before the next event is read, so
//! every key press runs to completion before the next one is handled.

pub mod keys;
pub mod render;

use std::io::{Stdout, stdout};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use syntax_tour_core::environment::Clock;
use syntax_tour_core::reducer::Reducer;
use syntax_tour_runtime::Store;

use crate::app::{AppAction, AppState};
use crate::environment::TourEnvironment;
use keys::KeyCommand;

/// Run the terminal UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured, drawn to, or
/// read from. The terminal is restored before the error propagates.
pub async fn run<C, R>(store: &Store<AppState, AppAction, TourEnvironment<C>, R>) -> Result<()>
where
    C: Clock + 'static,
    R: Reducer<State = AppState, Action = AppAction, Environment = TourEnvironment<C>>
        + Send
        + Sync
        + 'static,
{
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, store).await;
    teardown_terminal(&mut terminal)?;
    result
}

async fn event_loop<C, R>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &Store<AppState, AppAction, TourEnvironment<C>, R>,
) -> Result<()>
where
    C: Clock + 'static,
    R: Reducer<State = AppState, Action = AppAction, Environment = TourEnvironment<C>>
        + Send
        + Sync
        + 'static,
{
    let mut events = EventStream::new();

    loop {
        let snapshot = store.state(Clone::clone).await;
        terminal.draw(|frame| render::draw(frame, &snapshot))?;

        let Some(event) = events.next().await else {
            break; // input stream closed
        };

        match event? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match keys::translate(&snapshot, key) {
                    Some(KeyCommand::Quit) => break,
                    Some(KeyCommand::Dispatch(action)) => {
                        tracing::debug!(?action, "dispatching key action");
                        store.send(action).await;
                    },
                    None => {},
                }
            },
            // Resize and the rest redraw on the next pass
            _ => {},
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
