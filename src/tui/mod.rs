//! Terminal User Interface (TUI) for roundtimer.
//!
//! Shows the running session next to the workout list. Built with ratatui
//! and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::Action;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::prelude::*;

use crate::error::TimerError;
use crate::features::session::SessionConfig;
use crate::features::workout::{WorkoutLibrary, WorkoutStore};

/// Run the TUI application.
///
/// `tick_rate` is the length of one session second.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<S: WorkoutStore>(
    library: WorkoutLibrary<S>,
    config: SessionConfig,
    tick_rate: Duration,
) -> Result<(), TimerError> {
    enable_raw_mode().map_err(|e| TimerError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TimerError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TimerError::Config(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(library, config);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main loop.
///
/// One timer drives the session: input is polled until the next tick is due,
/// and every elapsed tick period advances the session once.
fn run_app<B: Backend, S: WorkoutStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    tick_rate: Duration,
) -> Result<(), TimerError> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TimerError::Config(format!("Failed to draw: {e}")))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::next_action(timeout)? {
            if let Err(e) = app.handle(action) {
                debug!("{action:?} rejected: {e}");
                app.status = Some(e.to_string());
            }
            if action.restarts_cadence() {
                last_tick = Instant::now();
            }
        }

        if !app.is_running() {
            last_tick = Instant::now();
            continue;
        }
        while last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick += tick_rate;
        }
    }

    Ok(())
}
