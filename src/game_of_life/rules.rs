//! Game of Life rules implementation

use super::{Cell, Grid};
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live neighbor count
    pub fn next_state(current: Cell, neighbors: u8) -> Cell {
        let counts = match current {
            Cell::Live => Self::survival_neighbor_counts(),
            Cell::Dead => Self::birth_neighbor_counts(),
        };
        Cell::from(counts.contains(&neighbors))
    }

    /// Compute the next generation's cells, reading only from `current`
    pub(crate) fn next_cells(current: &Grid) -> Vec<Cell> {
        iproduct!(0..current.height(), 0..current.width())
            .zip(current.cells())
            .map(|((row, col), &cell)| Self::next_state(cell, current.live_neighbors(row, col)))
            .collect()
    }

    /// Apply the rules to produce the next generation, leaving `current` untouched
    pub fn evolve(current: &Grid) -> Grid {
        Grid::from_parts(current.height(), current.width(), Self::next_cells(current))
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        grid.advance_by(generations);
        grid
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &[3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &[2, 3]
    }
}
