//! Conway's Game of Life on a finite grid
//!
//! This library holds the grid model and generation update, the JSON
//! persistence format, and the interactive session used by the CLI.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use error::{GridError, Malformation};
pub use game_of_life::{Cell, GameOfLifeRules, Grid};
pub use session::Session;

use anyhow::Result;
use std::path::Path;

/// Load a grid from `path` and advance it `generations` times
pub fn simulate_file<P: AsRef<Path>>(path: P, generations: usize) -> Result<Grid> {
    let grid = game_of_life::load_grid_from_file(path)?;
    Ok(GameOfLifeRules::evolve_generations(grid, generations))
}
