//! Core library for gridmunch, a terminal arcade game where a breadth-first search steers the
//! player through a maze toward food while static enemies block the way.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod game;
mod maze;
mod pathfinding;
mod spawn;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
