//! Command-line configuration for the game binary.

use clap::Parser;

/// Command-line options for the game.
///
/// This structure holds the runtime knobs of the game loop. The maze layout itself is a
/// compiled-in constant and is deliberately not configurable here.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Milliseconds between game ticks.
    ///
    /// This field controls the frame pacing of the cooperative loop; the default approximates the
    /// 30 ticks per second the game was tuned for.
    #[arg(long, default_value_t = 33)]
    pub tick_ms: u64,

    /// Number of enemies to spawn at startup.
    #[arg(long, default_value_t = 4)]
    pub enemies: usize,

    /// Seed for the spawn random number generator.
    ///
    /// This field makes every enemy and food placement reproducible; without it the generator is
    /// seeded from the operating system.
    #[arg(long)]
    pub seed: Option<u64>,
}
