//! File I/O operations for Game of Life grids

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Load a grid from a JSON file
/// Format: an array of rows, each an array of `"0"` (live) or `"."` (dead) strings
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;

    let grid = parse_grid_from_json(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.display()))?;

    info!(path = %path.display(), height = grid.height(), width = grid.width(), "loaded grid");
    Ok(grid)
}

/// Parse a grid from its JSON representation
pub fn parse_grid_from_json(content: &str) -> Result<Grid> {
    let rows: Vec<Vec<String>> = serde_json::from_str(content)
        .context("Grid must be a JSON array of arrays of strings")?;

    Ok(Grid::from_symbols(&rows)?)
}

/// Save a grid to a JSON file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let content = if pretty {
        grid_to_pretty_json(grid)?
    } else {
        grid_to_json(grid)?
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.display()))?;

    info!(path = %path.display(), "saved grid");
    Ok(())
}

/// Convert a grid to compact JSON
pub fn grid_to_json(grid: &Grid) -> Result<String> {
    serde_json::to_string(&grid.snapshot_for_persistence()).context("Failed to serialize grid")
}

/// Convert a grid to indented JSON
pub fn grid_to_pretty_json(grid: &Grid) -> Result<String> {
    serde_json::to_string_pretty(&grid.snapshot_for_persistence()).context("Failed to serialize grid")
}

/// Create example pattern files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns: [(&str, usize, usize, &[(usize, usize)]); 4] = [
        ("glider", 8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
        ("blinker", 5, 5, &[(2, 1), (2, 2), (2, 3)]),
        ("block", 4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]),
        ("beacon", 6, 6, &[(1, 1), (1, 2), (2, 1), (3, 4), (4, 3), (4, 4)]),
    ];

    for (name, height, width, live) in patterns {
        let grid = Grid::with_live_cells(height, width, live)?;
        let path = dir.join(format!("{}.json", name));
        save_grid_to_file(&grid, &path, false)?;
        debug!(pattern = name, path = %path.display(), "wrote example pattern");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Cell;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_json() {
        let grid = parse_grid_from_json(r#"[[".","0","."],["0",".","0"]]"#).unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.cell_at(0, 1).unwrap(), Cell::Live);
        assert_eq!(grid.cell_at(1, 1).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_grid_to_json() {
        let grid = Grid::with_live_cells(2, 2, &[(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid_to_json(&grid).unwrap(), r#"[["0","."],[".","0"]]"#);
    }

    #[test]
    fn test_round_trip() {
        let original = r#"[[".","0",".","."],[".",".","0","."],["0","0","0","."]]"#;
        let grid = parse_grid_from_json(original).unwrap();
        assert_eq!(grid_to_json(&grid).unwrap(), original);

        let pretty = grid_to_pretty_json(&grid).unwrap();
        assert_eq!(parse_grid_from_json(&pretty).unwrap(), grid);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/dir/test_grid.json");

        let mut original = Grid::with_live_cells(4, 3, &[(0, 0), (1, 2), (3, 1)]).unwrap();
        original.advance();

        save_grid_to_file(&original, &file_path, true).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid symbol
        let err = parse_grid_from_json(r#"[["0","X"]]"#).unwrap_err();
        assert!(err.downcast_ref::<crate::GridError>().is_some_and(|e| e.is_malformed()));

        // Inconsistent row lengths
        assert!(parse_grid_from_json(r#"[["0","."],["0"]]"#).is_err());

        // Empty content
        assert!(parse_grid_from_json("[]").is_err());
        assert!(parse_grid_from_json("[[]]").is_err());

        // Not the expected shape
        assert!(parse_grid_from_json("").is_err());
        assert!(parse_grid_from_json(r#"["0."]"#).is_err());
        assert!(parse_grid_from_json(r#"[[0, 1]]"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_grid_from_file(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read grid file"));
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        create_example_grids(temp_dir.path()).unwrap();

        for name in ["glider", "blinker", "block", "beacon"] {
            assert!(temp_dir.path().join(format!("{}.json", name)).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.json")).unwrap();
        assert_eq!(glider.width(), 8);
        assert_eq!(glider.height(), 8);
        assert_eq!(glider.living_count(), 5);

        let block = load_grid_from_file(temp_dir.path().join("block.json")).unwrap();
        let mut stepped = block.clone();
        stepped.advance();
        assert_eq!(stepped, block);
    }
}
