//! Game state controller.
//!
//! This module contains the [`Game`] structure that owns all mutable game state and the per-tick
//! update procedure: recompute the path to the food, advance the player one step, detect
//! consumption, respawn the food, and track the score.

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    maze::{Cell, Maze},
    pathfinding, spawn,
    types::{GameState, Position},
};

/// Owner of all mutable game state.
///
/// This structure replaces what the presentation layer would otherwise treat as ambient globals:
/// the maze, the entity positions, the score counter, and the random number generator all live
/// here with a reset-on-construction lifecycle. All of it is touched exactly once per tick, in a
/// fixed sequence, from the single control thread.
pub(crate) struct Game {
    /// The maze grid, mutated in place as entities spawn and food is consumed.
    maze: Maze,
    /// The player's current cell, tracked here rather than written into the grid.
    player: Position,
    /// Spawn positions of the static enemies; never relocated after setup.
    enemies: Vec<Position>,
    /// The current food cell, also marked [`Cell::Food`] in the grid.
    food: Position,
    /// Number of food items consumed since construction.
    score: u32,
    /// Current controller state; leaves [`GameState::Running`] only on the quit event.
    state: GameState,
    /// Random number generator for spawn placement, optionally seeded for reproducibility.
    rng: StdRng,
}

impl Game {
    /// Sets up a new game on the given maze.
    ///
    /// This function runs the fixed setup sequence: extract the player's starting cell from the
    /// spawn marker, place each enemy on a random free cell, then place the food. Enemies are
    /// placed before the food, so the food always avoids already-placed enemies. A seed makes the
    /// whole spawn sequence reproducible; without one the generator is seeded from the OS.
    ///
    /// # Errors
    ///
    /// This function returns an error if the layout has no player-spawn marker or if the maze
    /// runs out of free cells while placing entities.
    pub(crate) fn new(mut maze: Maze, enemy_count: usize, seed: Option<u64>) -> Result<Self> {
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        let player = spawn::player_start(&mut maze)?;

        let mut enemies = Vec::with_capacity(enemy_count);
        for _ in 0..enemy_count {
            enemies.push(spawn::place_randomly(
                &mut maze,
                &mut rng,
                Cell::Enemy,
                player,
            )?);
        }

        let food = spawn::place_randomly(&mut maze, &mut rng, Cell::Food, player)?;

        Ok(Self {
            maze,
            player,
            enemies,
            food,
            score: 0,
            state: GameState::Running,
            rng,
        })
    }

    /// Advances the game by one tick.
    ///
    /// This function recomputes the path from the player to the food and moves the player to its
    /// first step; an empty path (food unreachable, or already reached) leaves the player in
    /// place for this tick. When the player stands on the food cell, the score increments by one,
    /// the consumed cell is cleared back to [`Cell::Free`], and a new food is spawned on a random
    /// free cell away from the player.
    ///
    /// # Errors
    ///
    /// This function returns an error only if a food respawn finds no free cell, which a playable
    /// layout cannot run into.
    pub(crate) fn tick(&mut self) -> Result<()> {
        let path = pathfinding::find_path(&self.maze, self.player, self.food);
        if let Some(&next) = path.first() {
            self.player = next;
        }

        if self.player == self.food {
            self.score += 1;
            self.maze.set_cell(self.food, Cell::Free);
            self.food =
                spawn::place_randomly(&mut self.maze, &mut self.rng, Cell::Food, self.player)?;
        }

        Ok(())
    }

    /// Ends the game in response to the quit event.
    ///
    /// This function performs the controller's single terminating transition. No lose condition
    /// exists: enemies never move, and the pathfinder never routes through them.
    pub(crate) fn end(&mut self) {
        self.state = GameState::GameOver;
    }

    /// Returns the current controller state.
    pub(crate) const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current score.
    pub(crate) const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the player's current cell.
    pub(crate) const fn player(&self) -> Position {
        self.player
    }

    /// Returns the current food cell.
    pub(crate) const fn food(&self) -> Position {
        self.food
    }

    /// Returns the enemy spawn positions.
    pub(crate) fn enemies(&self) -> &[Position] {
        &self.enemies
    }

    /// Returns a view of the maze grid for rendering.
    pub(crate) const fn maze(&self) -> &Maze {
        &self.maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a maze from a layout string, panicking on parse failure.
    fn maze(layout: &str) -> Maze {
        Maze::from_layout(layout).expect("test layout should parse")
    }

    /// Open 5x7 arena with the spawn marker in the top-left interior corner.
    const ARENA: &str = "\
1111111
1300001
1000001
1000001
1111111";

    #[test]
    fn test_new_runs_setup_sequence() {
        let game = Game::new(maze(ARENA), 2, Some(3)).expect("setup should succeed");

        assert_eq!(game.player(), Position::new(1, 1));
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.enemies().len(), 2);
        // The spawn marker was consumed into a free cell.
        assert_eq!(game.maze().cell(game.player()), Some(Cell::Free));
        // Entities were written into the grid.
        for &enemy in game.enemies() {
            assert_eq!(game.maze().cell(enemy), Some(Cell::Enemy));
        }
        assert_eq!(game.maze().cell(game.food()), Some(Cell::Food));
    }

    #[test]
    fn test_new_without_spawn_marker_fails() {
        let layout = "11111\n10001\n11111";

        assert!(Game::new(maze(layout), 0, Some(0)).is_err());
    }

    #[test]
    fn test_same_seed_reproduces_spawn_layout() {
        let first = Game::new(maze(ARENA), 3, Some(99)).expect("setup should succeed");
        let second = Game::new(maze(ARENA), 3, Some(99)).expect("setup should succeed");

        assert_eq!(first.enemies(), second.enemies());
        assert_eq!(first.food(), second.food());
    }

    #[test]
    fn test_tick_moves_player_one_step() {
        let mut game = Game::new(maze(ARENA), 0, Some(1)).expect("setup should succeed");
        let before = game.player();
        let distance_before = pathfinding::find_path(game.maze(), before, game.food()).len();

        if distance_before > 1 {
            game.tick().expect("tick should succeed");
            let after = game.player();
            let row_delta = before.row.abs_diff(after.row);
            let col_delta = before.col.abs_diff(after.col);

            // Exactly one grid cell per tick.
            assert_eq!(row_delta + col_delta, 1);
            let distance_after =
                pathfinding::find_path(game.maze(), after, game.food()).len();
            assert_eq!(distance_after, distance_before - 1);
        }
    }

    #[test]
    fn test_player_reaches_food_and_scores() {
        let mut game = Game::new(maze(ARENA), 0, Some(5)).expect("setup should succeed");
        let distance = pathfinding::find_path(game.maze(), game.player(), game.food()).len();

        for _ in 0..distance {
            game.tick().expect("tick should succeed");
        }

        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_consumed_food_cell_is_cleared_and_respawned() {
        let mut game = Game::new(maze(ARENA), 0, Some(8)).expect("setup should succeed");
        let first_food = game.food();
        let distance = pathfinding::find_path(game.maze(), game.player(), first_food).len();

        for _ in 0..distance {
            game.tick().expect("tick should succeed");
        }

        // Player now stands on the consumed cell, which was cleared back to free.
        assert_eq!(game.player(), first_food);
        assert_eq!(game.maze().cell(first_food), Some(Cell::Free));
        // The respawned food sits on a fresh cell, marked in the grid, away from the player.
        assert_ne!(game.food(), first_food);
        assert_ne!(game.food(), game.player());
        assert_eq!(game.maze().cell(game.food()), Some(Cell::Food));
    }

    #[test]
    fn test_score_never_decreases_over_many_ticks() {
        let mut game = Game::new(maze(ARENA), 1, Some(13)).expect("setup should succeed");
        let mut last_score = 0;

        for _ in 0..200 {
            game.tick().expect("tick should succeed");
            assert!(game.score() >= last_score);
            last_score = game.score();
        }

        assert!(last_score > 0);
    }

    #[test]
    fn test_unreachable_food_holds_player_in_place() {
        // The food cell (2,3) is walled in; the player must not move.
        let layout = "\
1111111
1301001
1012101
1001001
1111111";
        let mut game = Game::new(maze(layout), 0, Some(0)).expect("setup should succeed");

        // Overwrite the randomly spawned food with the walled-in cell for this scenario.
        game.maze.set_cell(game.food, Cell::Free);
        game.food = Position::new(2, 3);
        game.maze.set_cell(game.food, Cell::Food);

        let before = game.player();
        game.tick().expect("tick should succeed");

        assert_eq!(game.player(), before);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_player_on_food_scores_without_moving() {
        // Start equals goal: the path is empty and the consumption registers on the same tick.
        let mut game = Game::new(maze(ARENA), 0, Some(2)).expect("setup should succeed");

        game.maze.set_cell(game.food, Cell::Free);
        game.food = game.player();
        game.maze.set_cell(game.food, Cell::Food);

        game.tick().expect("tick should succeed");

        assert_eq!(game.score(), 1);
        assert_ne!(game.food(), game.player());
    }

    #[test]
    fn test_end_transitions_to_game_over() {
        let mut game = Game::new(maze(ARENA), 0, Some(0)).expect("setup should succeed");
        assert_eq!(game.state(), GameState::Running);

        game.end();

        assert_eq!(game.state(), GameState::GameOver);
    }

    #[test]
    fn test_enemies_never_move() {
        let mut game = Game::new(maze(ARENA), 2, Some(21)).expect("setup should succeed");
        let spawns = game.enemies().to_vec();

        for _ in 0..50 {
            game.tick().expect("tick should succeed");
        }

        assert_eq!(game.enemies(), spawns.as_slice());
    }
}
