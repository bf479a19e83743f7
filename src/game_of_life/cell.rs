//! Cell states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol stored for a live cell
pub const LIVE_SYMBOL: &str = "0";
/// Symbol stored for a dead cell
pub const DEAD_SYMBOL: &str = ".";

/// State of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "0")]
    Live,
    #[default]
    #[serde(rename = ".")]
    Dead,
}

impl Cell {
    /// Parse a persisted symbol, returning `None` for anything but `"0"` or `"."`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            LIVE_SYMBOL => Some(Cell::Live),
            DEAD_SYMBOL => Some(Cell::Dead),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Live => LIVE_SYMBOL,
            Cell::Dead => DEAD_SYMBOL,
        }
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Live } else { Cell::Dead }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::from_symbol("0"), Some(Cell::Live));
        assert_eq!(Cell::from_symbol("."), Some(Cell::Dead));
        assert_eq!(Cell::from_symbol("1"), None);
        assert_eq!(Cell::from_symbol(""), None);
        assert_eq!(Cell::from_symbol("00"), None);
        assert_eq!(Cell::Live.to_string(), "0");
        assert_eq!(Cell::Dead.to_string(), ".");
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&[Cell::Live, Cell::Dead]).unwrap();
        assert_eq!(json, r#"["0","."]"#);

        let cells: Vec<Cell> = serde_json::from_str(r#"[".","0"]"#).unwrap();
        assert_eq!(cells, vec![Cell::Dead, Cell::Live]);
        assert!(serde_json::from_str::<Vec<Cell>>(r#"["x"]"#).is_err());
    }
}
