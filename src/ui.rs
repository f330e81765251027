//! User interface rendering for the game screen.
//!
//! This module contains the per-frame rendering of the maze grid, the entities, the score line,
//! and the quit hint. The renderer consumes the full grid for wall/food/enemy tile selection, the
//! player's current position, and the score counter; it never mutates game state.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{maze::Cell, types::Position, App};

/// Renders one frame of the game screen.
///
/// This function lays the frame out as a score line on top, the centered maze canvas in the
/// middle, and a tooltip block at the bottom, then paints the grid contents as colored point
/// layers: walls in green, enemies in magenta, food in red, and the player in yellow.
///
/// # Errors
///
/// This function may return errors from layout retrieval or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = app.game.maze();
    let maze_rows = maze.height();
    let maze_columns = maze.width();

    // Overall layout: score line + maze area + tooltip at bottom
    let overall_layout = Layout::vertical([
        Constraint::Length(1), // Score line
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let score_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get score area from layout")?;
    let maze_content_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let score = Line::raw(format!("Score: {}", app.game.score()))
        .centered()
        .style(Style::default().fg(Color::Green));
    frame.render_widget(score, score_area);

    // Center the maze within the content area
    let main_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);

    let maze_area = main_layout
        .get(1)
        .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(*maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Collect grid coordinates per tile kind; the player is tracked outside the grid
    let mut wall_coords = Vec::new();
    let mut enemy_coords = Vec::new();
    let mut food_coords = Vec::new();
    for row in 0..maze_rows {
        for col in 0..maze_columns {
            let pos = Position::new(row, col);
            match maze.cell(pos) {
                Some(Cell::Wall) => wall_coords.push(pos),
                Some(Cell::Enemy) => enemy_coords.push(pos),
                Some(Cell::Food) => food_coords.push(pos),
                _ => {}
            }
        }
    }

    // Pre-compute screen coordinates to handle errors before closures
    let wall_screen_coords = transform_to_screen_coords(&wall_coords, maze_rows, maze_columns)?;
    let enemy_screen_coords = transform_to_screen_coords(&enemy_coords, maze_rows, maze_columns)?;
    let food_screen_coords = transform_to_screen_coords(&food_coords, maze_rows, maze_columns)?;
    let player_screen_coords =
        transform_to_screen_coords(&[app.game.player()], maze_rows, maze_columns)?;

    let grid = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &enemy_screen_coords,
                color: Color::Magenta,
            });
            ctx.draw(&Points {
                coords: &food_screen_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &player_screen_coords,
                color: Color::Yellow,
            });
        });

    frame.render_widget(grid, space);

    // Render tooltip as a block at the bottom center with top border
    let tooltip_block = Block::bordered()
        .title("(q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_full_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze positions (row, col) to screen coordinates (x, y) using the
/// centering transformation formulas: y = (rows - 1) / 2 - row (rows grow downward on the grid
/// but upward on the canvas) and x = col - (cols - 1) / 2.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn transform_to_screen_coords(
    positions: &[Position],
    maze_rows: usize,
    maze_columns: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(maze_rows)?);
    let cols_n = f64::from(u16::try_from(maze_columns)?);

    positions
        .iter()
        .map(|&pos| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(pos.row)?);
            let screen_x = f64::from(u16::try_from(pos.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
