//! Application state and the cooperative game loop.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, game::Game, maze::Maze, types::GameState, ui, Config};

/// Application state container for the game.
///
/// This structure ties the game controller to the presentation layer: it owns the controller and
/// the timing state the loop uses to pace ticks at the configured rate.
pub struct App {
    /// The game controller owning all mutable game state.
    pub(crate) game: Game,
    /// Target duration between game ticks.
    pub(crate) tick_interval: Duration,
    /// Timestamp of the most recent game tick.
    pub(crate) last_tick: Instant,
}

impl App {
    /// Creates a new application from the command-line configuration.
    ///
    /// This function sets up the game on the compiled-in default maze. Construction is where the
    /// fatal configuration error surfaces, so callers should build the application before putting
    /// the terminal into the alternate screen.
    ///
    /// # Errors
    ///
    /// This function returns an error if the game setup fails, such as when the layout has no
    /// player-spawn marker.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            game: Game::new(Maze::default(), config.enemies, config.seed)?,
            tick_interval: Duration::from_millis(config.tick_ms),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function performs one rendering/input/update cycle per iteration: draw the current
    /// frame, wait for input up to the next tick boundary, and advance the controller one tick
    /// once the tick interval has elapsed. The loop continues until the quit event moves the game
    /// to [`GameState::GameOver`], after which the function returns to the call site and the
    /// caller restores the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.game.state() == GameState::Running {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;

            if self.last_tick.elapsed() >= self.tick_interval {
                self.last_tick = Instant::now();
                self.game.tick()?;
            }
        }

        Ok(())
    }
}
