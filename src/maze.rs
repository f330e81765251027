//! Maze grid model.
//!
//! This module contains the [`Cell`] code enumeration and the [`Maze`] matrix together with its
//! bounds-checking, classification, and mutation operations. The maze is constructed once from a
//! compiled-in layout and mutated in place as entities spawn and food is consumed.

use std::sync::LazyLock;

use color_eyre::eyre::{bail, Result};

use crate::types::Position;

/// Classification of a single maze cell.
///
/// This enumeration holds the five cell kinds a layout can encode. The numeric layout codes are
/// fixed: `1` wall, `0` free, `2` food, `3` player spawn, `5` enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Impassable wall cell.
    Wall,
    /// Open cell that entities may occupy or traverse.
    Free,
    /// Cell currently holding the food item.
    Food,
    /// The player's starting cell marker, consumed into [`Cell::Free`] at startup.
    PlayerSpawn,
    /// Cell occupied by a static enemy, impassable for pathfinding.
    Enemy,
}

impl Cell {
    /// Decodes a layout byte into a cell kind.
    ///
    /// This function maps the fixed small-integer codes of the layout format onto cell kinds and
    /// returns `None` for any byte outside the known code set.
    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'1' => Some(Self::Wall),
            b'0' => Some(Self::Free),
            b'2' => Some(Self::Food),
            b'3' => Some(Self::PlayerSpawn),
            b'5' => Some(Self::Enemy),
            _ => None,
        }
    }
}

/// Rectangular maze cell matrix.
///
/// This structure owns the grid of cell codes. Its dimensions never change after construction;
/// only the cell contents are mutated as entities spawn and food is consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Cell matrix in row-major order.
    cells: Vec<Vec<Cell>>,
    /// Number of rows in the matrix, fixed at construction.
    height: usize,
    /// Number of columns in the matrix, fixed at construction.
    width: usize,
}

impl Default for Maze {
    fn default() -> Self {
        Self::from_layout(*DEFAULT_LAYOUT).expect("failed to parse default layout")
    }
}

impl Maze {
    /// Builds a maze from a multiline layout string.
    ///
    /// This function parses each line of the layout as one row of cell codes and validates the
    /// result before handing it out: the layout must be non-empty, every row must have the same
    /// length, and every byte must be a known cell code.
    ///
    /// # Errors
    ///
    /// This function returns an error if the layout is empty, ragged, or contains a byte outside
    /// the known code set.
    pub(crate) fn from_layout(layout: &str) -> Result<Self> {
        let mut cells = Vec::new();

        for (row, line) in layout.lines().enumerate() {
            let mut parsed = Vec::new();
            for (col, byte) in line.bytes().enumerate() {
                match Cell::from_code(byte) {
                    Some(cell) => parsed.push(cell),
                    None => bail!("unknown cell code {byte:#04x} at row {row}, column {col}"),
                }
            }
            cells.push(parsed);
        }

        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            bail!("layout must contain at least one non-empty row");
        }
        if cells.iter().any(|line| line.len() != width) {
            bail!("layout rows must all have the same length");
        }

        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Returns the number of rows in the maze.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns in the maze.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Reports whether a position lies within the maze bounds.
    ///
    /// This function is a pure query over the fixed dimensions; it never touches cell contents.
    pub(crate) const fn is_valid(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Returns the cell at a position, or `None` when out of range.
    pub(crate) fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|line| line.get(pos.col)).copied()
    }

    /// Reports whether the cell at a position is coded as a wall.
    ///
    /// Out-of-range positions answer `false`; callers interested in traversability check
    /// [`Maze::is_valid`] first.
    pub(crate) fn is_wall(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Wall))
    }

    /// Reports whether the cell at a position is occupied by an enemy.
    pub(crate) fn is_enemy(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Enemy))
    }

    /// Overwrites the cell code at a position.
    ///
    /// This function is used for spawning entities, consuming food, and clearing the player spawn
    /// marker. Out-of-range positions are ignored.
    pub(crate) fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(pos.row)
            .and_then(|line| line.get_mut(pos.col))
        {
            *slot = cell;
        }
    }
}

/// Default compiled-in maze layout.
///
/// This static holds the fixed 5×21 layout the game ships with: two open corridors connected at
/// both ends, with the player spawn marker in the top-left corner of the interior.
static DEFAULT_LAYOUT: LazyLock<&str> = LazyLock::new(|| {
    "\
111111111111111111111
130000000000000000001
101111111111111111101
100000000000000000001
111111111111111111111"
});
