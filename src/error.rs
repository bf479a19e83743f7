//! Error types for grid construction and access

use thiserror::Error;

/// Errors raised by the Game of Life core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input could not be turned into a rectangular grid of valid cells
    #[error("malformed grid: {0}")]
    Malformed(#[from] Malformation),

    /// Direct access to a coordinate outside the grid
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

/// The ways construction input can fail to describe a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("a {height}x{width} grid has more cells than can be addressed")]
    TooLarge { height: usize, width: usize },

    #[error("expected {expected} rows, found {found}")]
    HeightMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell symbol {symbol:?} at ({row}, {col}); only \"0\" and \".\" are allowed")]
    InvalidSymbol {
        row: usize,
        col: usize,
        symbol: String,
    },
}

impl GridError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, GridError::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::from(Malformation::RaggedRow { row: 2, expected: 4, found: 3 });
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), "malformed grid: row 2 has 3 cells, expected 4");

        let err = GridError::from(Malformation::TooLarge { height: usize::MAX, width: 2 });
        assert!(err.is_malformed());

        let err = GridError::OutOfBounds { row: 5, col: 1, height: 3, width: 3 };
        assert!(!err.is_malformed());
        assert_eq!(err.to_string(), "cell (5, 1) is outside the 3x3 grid");
    }
}
