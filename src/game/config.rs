use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{error::GameError, score::Missions, snake::MIN_LENGTH, state::Position};

/// Smallest grid that leaves room for the snake, items and gates
pub const MIN_GRID_SIZE: usize = 8;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Height of the game grid, border walls included
    pub grid_height: usize,
    /// Width of the game grid, border walls included
    pub grid_width: usize,
    /// Milliseconds per game tick
    pub tick_ms: u64,

    /// Growth items kept on the field
    pub growth_items: usize,
    /// Poison items kept on the field
    pub poison_items: usize,
    /// Ticks before an uneaten item moves elsewhere (0 = never)
    pub item_lifetime_ticks: u32,
    /// Ticks before the gates move to other walls (0 = never)
    pub gate_lifetime_ticks: u32,

    /// Extra wall cells inside the border
    pub walls: Vec<Position>,
    /// Stage targets
    pub missions: Missions,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_height: 21,
            grid_width: 21,
            tick_ms: 150,
            growth_items: 2,
            poison_items: 1,
            item_lifetime_ticks: 60,
            gate_lifetime_ticks: 100,
            walls: Vec::new(),
            missions: Missions::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            grid_height: height,
            grid_width: width,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Where the snake's head starts: the centre of the grid
    pub fn spawn_head(&self) -> Position {
        Position::new((self.grid_height / 2) as i32, (self.grid_width / 2) as i32)
    }

    /// Cells the snake occupies at the start, head first
    pub fn spawn_cells(&self) -> [Position; MIN_LENGTH] {
        let head = self.spawn_head();
        std::array::from_fn(|i| head.moved_by(0, -(i as i32)))
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_height < MIN_GRID_SIZE || self.grid_width < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least {MIN_GRID_SIZE}x{MIN_GRID_SIZE}, got {}x{}",
                self.grid_height, self.grid_width
            )));
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig("tick_ms must be positive".into()));
        }
        let inside = |pos: &Position| {
            pos.row > 0
                && pos.col > 0
                && (pos.row as usize) < self.grid_height - 1
                && (pos.col as usize) < self.grid_width - 1
        };
        if let Some(wall) = self.walls.iter().find(|pos| !inside(pos)) {
            return Err(GameError::InvalidConfig(format!(
                "wall {wall} is not inside the border"
            )));
        }
        let spawn = self.spawn_cells();
        if let Some(wall) = self.walls.iter().find(|pos| spawn.contains(*pos)) {
            return Err(GameError::InvalidConfig(format!(
                "wall {wall} blocks the snake's starting cells"
            )));
        }

        let interior = (self.grid_height - 2) * (self.grid_width - 2);
        let free = interior.saturating_sub(self.walls.len() + MIN_LENGTH);
        let items = self.growth_items + self.poison_items;
        if items > free {
            return Err(GameError::InvalidConfig(format!(
                "{items} items do not fit in {free} free cells"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_height, 21);
        assert_eq!(config.grid_width, 21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.tick_ms, GameConfig::default().tick_ms);
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new(5, 20).validate().is_err());
        assert!(
            GameConfig {
                tick_ms: 0,
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            GameConfig {
                walls: vec![Position::new(0, 4)],
                ..GameConfig::small()
            }
            .validate()
            .is_err()
        );
        assert!(
            GameConfig {
                walls: vec![Position::new(4, 4)],
                ..GameConfig::small()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_height": 12, "missions": { "gate": 3 } }"#).unwrap();
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.grid_width, 21);
        assert_eq!(config.missions.gate, 3);
        assert_eq!(config.missions.growth, Missions::default().growth);
    }

    #[test]
    fn test_walls_on_spawn_cells_rejected() {
        let config = GameConfig::small();
        assert_eq!(
            config.spawn_cells(),
            [Position::new(5, 5), Position::new(5, 4), Position::new(5, 3)]
        );

        for wall in config.spawn_cells() {
            let blocked = GameConfig {
                walls: vec![wall],
                ..GameConfig::small()
            };
            assert!(matches!(
                blocked.validate(),
                Err(GameError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_item_count_capped_by_free_cells() {
        // 10x10 grid: 64 interior cells, 3 taken by the snake
        let fits = GameConfig {
            growth_items: 60,
            poison_items: 1,
            ..GameConfig::small()
        };
        assert!(fits.validate().is_ok());

        let crowded = GameConfig {
            growth_items: 60,
            poison_items: 2,
            ..GameConfig::small()
        };
        assert!(crowded.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stage1.json");
        let config = GameConfig {
            walls: vec![Position::new(2, 5), Position::new(2, 6)],
            seed: Some(7),
            ..GameConfig::small()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "grid_width": 3 }"#).unwrap();

        assert!(GameConfig::load(&path).is_err());
        assert!(GameConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
