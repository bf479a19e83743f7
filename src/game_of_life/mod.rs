//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod rules;
pub mod io;

pub use cell::{Cell, DEAD_SYMBOL, LIVE_SYMBOL};
pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use io::{load_grid_from_file, parse_grid_from_json, save_grid_to_file, grid_to_json, create_example_grids};
