//! Event handling for user input.
//!
//! This module contains the input polling half of the presentation layer. The game defines a
//! single input event: the request to quit, which performs the controller's only terminating
//! transition.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::App;

/// Polls for input events and updates the application state accordingly.
///
/// This function waits for keyboard input for at most the time remaining until the next game
/// tick, so event handling doubles as the frame pacing wait. A `q` keypress ends the game; every
/// other event is ignored.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    let timeout = app.tick_interval.saturating_sub(app.last_tick.elapsed());

    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('q') {
                app.game.end();
            }
        }
    }

    Ok(())
}
