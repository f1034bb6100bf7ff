use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How a move into the cell currently held by the tail is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelfCollision {
    /// Every segment counts, including a tail that is about to move away
    #[default]
    Strict,
    /// The tail is skipped when it will be vacated on this tick
    VacatingTail,
}

/// Configuration for the game
///
/// Coordinates are expressed in board units (pixels in the classic layout);
/// every position is a multiple of `cell_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board
    pub board_size: i32,
    /// Size of one snake segment / food cell
    pub cell_size: i32,
    /// Time between two ticks while a run is active
    pub tick_interval_ms: u64,
    /// Treatment of the tail cell during the self-collision check
    pub self_collision: SelfCollision,
    /// Ring the terminal bell on food and game over
    pub sound: bool,
    /// Fixed RNG seed for food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 400,
            cell_size: 20,
            tick_interval_ms: 150,
            self_collision: SelfCollision::Strict,
            sound: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board geometry
    pub fn new(board_size: i32, cell_size: i32) -> Self {
        Self {
            board_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(100, 10)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Check that the board geometry describes a usable grid
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.board_size <= 0 {
            bail!("board size must be positive, got {}", self.board_size);
        }
        if self.board_size % self.cell_size != 0 {
            bail!(
                "board size {} is not a multiple of cell size {}",
                self.board_size,
                self.cell_size
            );
        }
        if self.cells_per_side() < 2 {
            bail!("board must be at least 2 cells wide");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be at least 1 ms");
        }
        Ok(())
    }

    /// Number of cells along each axis
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.cell_size
    }

    /// Grid-aligned coordinate of the board center
    pub fn center(&self) -> i32 {
        (self.cells_per_side() / 2) * self.cell_size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 400);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
        assert_eq!(config.self_collision, SelfCollision::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_center_is_grid_aligned() {
        assert_eq!(GameConfig::default().center(), 200);
        assert_eq!(GameConfig::new(60, 20).center(), 20);
        assert_eq!(GameConfig::small().center(), 50);
    }

    #[test]
    fn test_validation_rejects_bad_geometry() {
        assert!(GameConfig::new(400, 0).validate().is_err());
        assert!(GameConfig::new(0, 20).validate().is_err());
        assert!(GameConfig::new(410, 20).validate().is_err());
        assert!(GameConfig::new(20, 20).validate().is_err());

        let mut config = GameConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "board_size": 200, "self_collision": "vacating-tail", "sound": false }}"#
        )
        .unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.board_size, 200);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.self_collision, SelfCollision::VacatingTail);
        assert!(!config.sound);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_json_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
