//! Entity placement: player start extraction and random food/enemy spawning.
//!
//! This module contains the startup scan that turns the layout's player-spawn marker into the
//! player's initial position, and the rejection sampler that drops food and enemies onto random
//! free cells of the maze.

use color_eyre::eyre::{bail, OptionExt as _, Result};
use rand::Rng;

use crate::{
    maze::{Cell, Maze},
    types::Position,
};

/// Upper bound on random placement attempts before falling back to a deterministic scan.
///
/// This constant caps the rejection sampler so that placement terminates even on a pathological,
/// near-full grid. The expected free-cell density of the shipped layouts makes reaching the cap
/// vanishingly unlikely.
pub(crate) const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

/// Extracts the player's initial position from the maze.
///
/// This function scans the grid in row-major order for the first [`Cell::PlayerSpawn`] marker,
/// clears that cell to [`Cell::Free`], and returns its position. The marker is consumed because
/// the player is tracked separately by the controller and never written back into the grid.
///
/// # Errors
///
/// This function returns an error if the layout contains no player-spawn cell. That is a fatal
/// configuration error; callers surface it at startup.
pub(crate) fn player_start(maze: &mut Maze) -> Result<Position> {
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            if maze.cell(pos) == Some(Cell::PlayerSpawn) {
                maze.set_cell(pos, Cell::Free);
                return Ok(pos);
            }
        }
    }

    bail!("layout contains no player spawn cell")
}

/// Places an entity marker on a uniformly random free cell.
///
/// This function repeatedly samples random valid positions until it finds one coded
/// [`Cell::Free`] that is not the `avoid` cell (the player's current position, which the grid
/// itself cannot distinguish from any other free cell), then writes `marker` into the grid and
/// returns the position. Sampling is capped at [`MAX_SPAWN_ATTEMPTS`]; past the cap a row-major
/// scan deterministically picks the first qualifying free cell instead.
///
/// # Errors
///
/// This function returns an error only when the maze has no qualifying free cell at all.
pub(crate) fn place_randomly<R: Rng>(
    maze: &mut Maze,
    rng: &mut R,
    marker: Cell,
    avoid: Position,
) -> Result<Position> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = Position::new(
            rng.gen_range(0..maze.height()),
            rng.gen_range(0..maze.width()),
        );

        if pos != avoid && maze.cell(pos) == Some(Cell::Free) {
            maze.set_cell(pos, marker);
            return Ok(pos);
        }
    }

    let pos = first_free_cell(maze, avoid).ok_or_eyre("maze has no free cell left to spawn on")?;
    maze.set_cell(pos, marker);

    Ok(pos)
}

/// Returns the first free cell in row-major order, skipping the avoided position.
fn first_free_cell(maze: &Maze, avoid: Position) -> Option<Position> {
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = Position::new(row, col);
            if pos != avoid && maze.cell(pos) == Some(Cell::Free) {
                return Some(pos);
            }
        }
    }

    None
}
