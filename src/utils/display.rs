//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid dump, optionally preceded by a generation header
    pub fn format_generation(grid: &Grid, generation: u64, show_header: bool) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() * 2 + 1) + 16);

        if show_header {
            output.push_str(&format!("Generation {}:\n", generation));
        }
        output.push_str(&grid.to_string());

        output
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.width() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (row, cells) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for cell in cells {
                output.push_str(&format!("{:>2}", cell));
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_formatting() {
        let grid = Grid::with_live_cells(2, 2, &[(0, 0)]).unwrap();

        assert_eq!(GridFormatter::format_generation(&grid, 3, false), "0 . \n. . \n");
        assert_eq!(GridFormatter::format_generation(&grid, 3, true), "Generation 3:\n0 . \n. . \n");
    }

    #[test]
    fn test_grid_with_coords() {
        let grid = Grid::with_live_cells(3, 3, &[(1, 1)]).unwrap();
        let with_coords = GridFormatter::format_grid_with_coords(&grid);

        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1  . 0 .\n"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
