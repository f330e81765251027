//! Shared type definitions for grid coordinates and the controller state machine.

/// Neighbor offsets in the fixed exploration order: down, up, right, left.
///
/// This constant defines the order in which neighboring cells are visited by the pathfinder. The
/// order decides tie-breaking among equally short paths, so it is part of the pathfinder's
/// observable behavior and must not be reordered.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Grid coordinate pair.
///
/// This structure holds a row/column pair addressing one cell of the maze. Coordinates are
/// unsigned; stepping off the top or left edge is represented by [`Position::offset`] returning
/// `None` rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    /// Row index, counted from the top of the maze.
    pub row: usize,
    /// Column index, counted from the left of the maze.
    pub col: usize,
}

impl Position {
    /// Creates a new position from a row and column index.
    pub(crate) const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position displaced by the given row/column deltas.
    ///
    /// This function performs checked coordinate arithmetic and returns `None` when the
    /// displacement would move past the zero edge of either axis. Displacements past the bottom or
    /// right edge still produce a position; callers validate those against the maze bounds.
    pub(crate) const fn offset(self, delta_row: isize, delta_col: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(delta_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(delta_col) else {
            return None;
        };

        Some(Self { row, col })
    }

    /// Returns the 4-connected neighbors of this position in exploration order.
    ///
    /// This function yields the neighboring positions in the fixed down, up, right, left order of
    /// [`NEIGHBOR_OFFSETS`], skipping neighbors that would lie past the zero edge of the grid.
    pub(crate) fn neighbors(self) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(delta_row, delta_col)| self.offset(delta_row, delta_col))
    }
}

/// Controller state machine.
///
/// This enumeration holds the two logical states of the game controller. The only transition to
/// [`GameState::GameOver`] is the explicit quit event from the presentation layer; no lose
/// condition exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameState {
    /// The game loop is active and the controller ticks every frame.
    Running,
    /// The game has been ended by the quit event and the loop unwinds.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_grid() {
        let pos = Position::new(2, 3);

        assert_eq!(pos.offset(1, 0), Some(Position::new(3, 3)));
        assert_eq!(pos.offset(-1, 0), Some(Position::new(1, 3)));
        assert_eq!(pos.offset(0, 1), Some(Position::new(2, 4)));
        assert_eq!(pos.offset(0, -1), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_offset_past_zero_edge() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_neighbors_order_is_down_up_right_left() {
        let pos = Position::new(5, 5);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(
            neighbors,
            vec![
                Position::new(6, 5),
                Position::new(4, 5),
                Position::new(5, 6),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_neighbors_skip_negative_coordinates() {
        let origin = Position::new(0, 0);
        let neighbors: Vec<Position> = origin.neighbors().collect();

        assert_eq!(neighbors, vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_game_state_variants() {
        let running = GameState::Running;
        let over = GameState::GameOver;

        assert_eq!(running, GameState::Running);
        assert_eq!(over, GameState::GameOver);
        assert_ne!(running, over);
    }
}
