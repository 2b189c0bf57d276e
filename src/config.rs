//! Solver configuration, read from an optional JSON file and overridden by
//! command-line flags.

use crate::error::{Error, Result};
use crate::game::{GameState, DEFAULT_HEALTH};
use crate::sequence::TileSequence;
use crate::tile::TileRange;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Side length of the square board
    pub size: usize,

    /// Seed of the tile sequence
    pub seed: u64,

    pub starting_health: i32,

    /// Tiles the generator draws from
    pub tile_range: TileRange,

    /// Stop expanding states once this many moves have been made
    pub max_depth: Option<usize>,

    pub stop_at_first_win: bool,

    /// Print every explored board
    pub show_states: bool,

    /// Hand-made board, rows top to bottom in the printed tile codes.
    /// Replaces the generated board; `size` is then taken from it.
    pub board: Option<Vec<String>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            size: 4,
            seed: 1234,
            starting_health: DEFAULT_HEALTH,
            tile_range: TileRange::default(),
            max_depth: None,
            stop_at_first_win: false,
            show_states: false,
            board: None,
        }
    }
}

impl SolverConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a board file: one row of tile codes per line, blank lines ignored.
    pub fn read_board(path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.is_none() && self.size < 2 {
            return Err(Error::BoardTooSmall { size: self.size });
        }
        if self.starting_health <= 0 {
            return Err(Error::InvalidHealth {
                health: self.starting_health,
            });
        }
        Ok(())
    }

    pub fn build_root(&self) -> Result<GameState> {
        self.validate()?;
        let sequence = TileSequence::new(self.seed, self.tile_range);
        let root = match &self.board {
            Some(rows) => GameState::from_rows(rows.as_slice(), sequence)?,
            None => GameState::new(self.size, sequence),
        };
        Ok(root.with_health(self.starting_health))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SolverConfig::from_json(r#"{ "size": 6, "tile_range": "without-walls" }"#)
            .unwrap();
        assert_eq!(config.size, 6);
        assert_eq!(config.tile_range, TileRange::WithoutWalls);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.starting_health, DEFAULT_HEALTH);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            SolverConfig::from_json(r#"{ "size": 1 }"#),
            Err(Error::BoardTooSmall { size: 1 })
        ));
        assert!(matches!(
            SolverConfig::from_json(r#"{ "starting_health": 0 }"#),
            Err(Error::InvalidHealth { health: 0 })
        ));
        assert!(matches!(
            SolverConfig::from_json(r#"{ "size": "big" }"#),
            Err(Error::ConfigFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SolverConfig::from_file(Path::new("/nonexistent/solver.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/solver.json"));
    }

    #[test]
    fn test_build_root_applies_settings() {
        let config = SolverConfig {
            size: 3,
            seed: 8,
            starting_health: 2,
            tile_range: TileRange::WithoutWalls,
            ..SolverConfig::default()
        };
        let root = config.build_root().unwrap();
        assert_eq!(root.size(), 3);
        assert_eq!(root.health(), 2);
        assert_eq!(root.sequence().seed(), 8);
        assert_eq!(root.sequence().range(), TileRange::WithoutWalls);
    }

    #[test]
    fn test_board_from_json_replaces_generated_one() {
        let config = SolverConfig::from_json(
            r#"{ "size": 9, "starting_health": 3, "board": ["--XX", ":)-1"] }"#,
        )
        .unwrap();
        let root = config.build_root().unwrap();
        assert_eq!(root.size(), 2);
        assert_eq!(root.health(), 3);
        assert_eq!(root.to_string(), "--XX\n:)-1\n");
        assert_eq!(root.cursor(), 0);
    }

    #[test]
    fn test_bad_board_is_rejected() {
        let config = SolverConfig {
            board: Some(vec!["~~XX".into(), ":)~~".into(), "~~~~".into()]),
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.build_root(),
            Err(Error::InvalidRowWidth { row: 0, expected: 6, got: 4 })
        ));

        let two_exits = SolverConfig {
            board: Some(vec!["XXXX".into(), ":)~~".into()]),
            ..SolverConfig::default()
        };
        assert!(matches!(
            two_exits.build_root(),
            Err(Error::InvalidMarkerCount { tile: "exit", count: 2 })
        ));
    }

    #[test]
    fn test_board_file_reports_missing_path() {
        let err = SolverConfig::read_board(Path::new("/nonexistent/board.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/board.txt"));
    }
}
