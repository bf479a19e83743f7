//! Grid representation and neighbor counting for Game of Life

use super::{Cell, GameOfLifeRules};
use crate::error::{GridError, Malformation};
use std::fmt;

/// Relative positions of the eight cells surrounding a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A finite, non-wrapping Game of Life grid
///
/// Cells are stored row-major in a single owned buffer. Every constructor
/// validates that the grid is non-empty and rectangular, so the rest of the
/// type can rely on `cells.len() == height * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid from explicit dimensions and rows of cells
    ///
    /// The rows are moved into storage owned by the grid, so nothing held by
    /// the caller can alias it afterwards.
    pub fn new(height: usize, width: usize, cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let size = Self::cell_count(height, width)?;
        if cells.len() != height {
            return Err(Malformation::HeightMismatch { expected: height, found: cells.len() }.into());
        }

        let mut flat = Vec::with_capacity(size);
        for (row, values) in cells.into_iter().enumerate() {
            if values.len() != width {
                return Err(Malformation::RaggedRow { row, expected: width, found: values.len() }.into());
            }
            flat.extend(values);
        }

        Ok(Self { height, width, cells: flat })
    }

    /// Create a grid whose dimensions are taken from the rows themselves
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        Self::new(height, width, cells)
    }

    /// Create a grid from persisted symbols (`"0"` live, `"."` dead)
    pub fn from_symbols<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, symbol)| {
                        let symbol = symbol.as_ref();
                        Cell::from_symbol(symbol).ok_or_else(|| {
                            Malformation::InvalidSymbol { row, col, symbol: symbol.to_string() }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(cells)
    }

    /// Create an all-dead grid
    pub fn empty(height: usize, width: usize) -> Result<Self, GridError> {
        let size = Self::cell_count(height, width)?;
        Ok(Self { height, width, cells: vec![Cell::Dead; size] })
    }

    /// Total cell count for the given dimensions, rejecting empty or unaddressable grids
    fn cell_count(height: usize, width: usize) -> Result<usize, GridError> {
        if height == 0 || width == 0 {
            return Err(Malformation::Empty.into());
        }
        height
            .checked_mul(width)
            .ok_or_else(|| Malformation::TooLarge { height, width }.into())
    }

    /// Create a grid with the given coordinates live and everything else dead
    pub fn with_live_cells(height: usize, width: usize, live: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::empty(height, width)?;
        for &(row, col) in live {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = Cell::Live;
        }
        Ok(grid)
    }

    /// Rebuild a grid from a buffer produced by the rules engine
    pub(crate) fn from_parts(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self { height, width, cells }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.height && col < self.width {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds { row, col, height: self.height, width: self.width })
        }
    }

    /// Get the cell stored at the given coordinates
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Count live neighbors of a cell
    ///
    /// Neighbor positions outside the grid are skipped. Returns `None` when
    /// the target coordinate itself is outside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.live_neighbors(row, col))
        } else {
            None
        }
    }

    /// Neighbor count for a coordinate already known to be in bounds
    pub(crate) fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;

            if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
                continue;
            }
            if self.cells[self.index(r as usize, c as usize)].is_live() {
                count += 1;
            }
        }

        count
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Render each row as a line of symbols, each followed by a single space
    pub fn render_text(&self) -> impl Iterator<Item = String> + '_ {
        self.rows().map(|row| row.iter().map(|cell| format!("{} ", cell)).collect())
    }

    /// Copy of the cell matrix, row-major, for serialization
    pub fn snapshot_for_persistence(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Advance the grid by one generation
    ///
    /// The next generation is computed entirely from the current cells and
    /// then swapped in, so the grid is never seen half-updated.
    pub fn advance(&mut self) {
        self.cells = GameOfLifeRules::next_cells(self);
    }

    /// Advance the grid by `generations` steps
    pub fn advance_by(&mut self, generations: usize) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Check if the grid has no living cells
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_live())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_text() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
