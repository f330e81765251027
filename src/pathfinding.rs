//! Breadth-first search pathfinding over the maze grid.
//!
//! This module contains the shortest-path search the controller runs every tick to route the
//! player toward the food. The search is recomputed from scratch on each call; with the small,
//! fixed maze sizes the game uses, the O(cells) cost per tick is acceptable and no caching or
//! incremental update is attempted.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{maze::Maze, types::Position};

/// Finds the shortest 4-connected path from `start` to `goal`.
///
/// This function performs an unweighted breadth-first search over the maze. A cell is traversable
/// when it is in bounds and neither a wall nor enemy-occupied. Neighbors are explored in the fixed
/// down, up, right, left order, which decides tie-breaking among equally short paths.
///
/// The goal test happens at enqueue time: the search returns the instant the goal shows up as a
/// newly visited neighbor, rather than waiting for it to be dequeued. Both variants find a
/// shortest path; testing at enqueue time settles the predecessor bookkeeping for the final step
/// so that repeated runs over identical state reconstruct a path of identical length.
///
/// The returned sequence runs from the step after `start` through `goal` inclusive. It is empty
/// when no route exists or when `start` and `goal` coincide; callers treat an empty path as "stay
/// in place", not as an error.
pub(crate) fn find_path(maze: &Maze, start: Position, goal: Position) -> Vec<Position> {
    let mut frontier = VecDeque::new();
    let mut visited = HashSet::new();
    let mut predecessors: HashMap<Position, Position> = HashMap::new();

    frontier.push_back(start);
    let _ = visited.insert(start);

    while let Some(current) = frontier.pop_front() {
        for neighbor in current.neighbors() {
            if !maze.is_valid(neighbor)
                || maze.is_wall(neighbor)
                || maze.is_enemy(neighbor)
                || visited.contains(&neighbor)
            {
                continue;
            }

            frontier.push_back(neighbor);
            let _ = visited.insert(neighbor);
            let _ = predecessors.insert(neighbor, current);

            if neighbor == goal {
                return reconstruct(&predecessors, goal);
            }
        }
    }

    Vec::new()
}

/// Rebuilds the path by walking the predecessor map backward from the goal.
///
/// This function collects every cell that has a recorded predecessor, which excludes the start
/// cell of the search, and reverses the result into start-to-goal order.
fn reconstruct(predecessors: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = goal;

    while let Some(&previous) = predecessors.get(&cursor) {
        path.push(cursor);
        cursor = previous;
    }
    path.reverse();

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a maze from a layout string, panicking on parse failure.
    fn maze(layout: &str) -> Maze {
        Maze::from_layout(layout).expect("test layout should parse")
    }

    #[test]
    fn test_straight_corridor_path() {
        // 5x21 maze with an all-free interior: the only shortest route from (1,1) to (1,19) is
        // the 18-step straight line along row 1.
        let maze = maze(
            "\
111111111111111111111
100000000000000000001
100000000000000000001
100000000000000000001
111111111111111111111",
        );

        let path = find_path(&maze, Position::new(1, 1), Position::new(1, 19));

        assert_eq!(path.len(), 18);
        for (idx, step) in path.iter().enumerate() {
            assert_eq!(*step, Position::new(1, idx + 2));
        }
    }

    #[test]
    fn test_path_excludes_start_and_includes_goal() {
        let maze = maze("11111\n10001\n11111");

        let path = find_path(&maze, Position::new(1, 1), Position::new(1, 3));

        assert_eq!(path, vec![Position::new(1, 2), Position::new(1, 3)]);
    }

    #[test]
    fn test_path_routes_around_walls() {
        let maze = maze(
            "\
1111111
1000001
1011101
1000001
1111111",
        );

        let path = find_path(&maze, Position::new(1, 1), Position::new(3, 3));

        // Shortest route detours around the inner wall block.
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&Position::new(3, 3)));
    }

    #[test]
    fn test_path_refuses_enemy_cells() {
        // The direct corridor is blocked by an enemy; the only route is the lower corridor.
        let maze = maze(
            "\
1111111
1005001
1010101
1000001
1111111",
        );

        let path = find_path(&maze, Position::new(1, 1), Position::new(1, 5));

        assert!(!path.is_empty());
        assert!(path.iter().all(|&step| !maze.is_enemy(step)));
        assert_eq!(path.last(), Some(&Position::new(1, 5)));
        assert_eq!(path.len(), 8);
    }

    #[test]
    fn test_goal_walled_in_returns_empty() {
        // Food at (2,3) is surrounded by walls on all four sides.
        let maze = maze(
            "\
1111111
1001001
1012101
1001001
1111111",
        );

        let path = find_path(&maze, Position::new(1, 1), Position::new(2, 3));

        assert!(path.is_empty());
    }

    #[test]
    fn test_start_equals_goal_returns_empty() {
        let maze = maze("11111\n10001\n11111");
        let pos = Position::new(1, 2);

        assert!(find_path(&maze, pos, pos).is_empty());
    }

    #[test]
    fn test_repeated_runs_yield_equal_length() {
        let maze = maze(
            "\
1111111
1000001
1010101
1000001
1111111",
        );
        let start = Position::new(1, 1);
        let goal = Position::new(3, 5);

        let first = find_path(&maze, start, goal);
        let second = find_path(&maze, start, goal);

        assert_eq!(first.len(), second.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_length_matches_grid_distance() {
        // Open 7x7 interior: shortest distance is the Manhattan distance.
        let maze = maze(
            "\
111111111
100000001
100000001
100000001
100000001
100000001
100000001
100000001
111111111",
        );

        let path = find_path(&maze, Position::new(1, 1), Position::new(7, 7));

        assert_eq!(path.len(), 12);
    }
}
