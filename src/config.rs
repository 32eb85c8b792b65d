//! Game configuration, loaded from a JSON file next to the binary.
//!
//! Every section has defaults matching the stock demo, so a missing file or a
//! file that only overrides a couple of fields both work.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_CONFIG_PATH: &str = "tilekeep.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub entities: EntitiesConfig,
    pub combat: CombatConfig,
    pub camera: CameraConfig,
    pub assets: AssetPaths,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or fall back to defaults when the file is missing or broken.
    /// Never writes to disk.
    pub fn load_or_default(path: &str) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Using default config, could not load '{path}': {err:#}");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.world.width == 0 || self.world.height == 0 {
            bail!("world must be at least 1x1 tiles");
        }
        if self.world.tile_width == 0 || self.world.tile_height == 0 {
            bail!("tile size must be non-zero");
        }
        if self.combat.damage_min > self.combat.damage_max {
            bail!(
                "damage range is inverted ({} > {})",
                self.combat.damage_min,
                self.combat.damage_max
            );
        }
        if self.combat.loot_min > self.combat.loot_max {
            bail!(
                "loot range is inverted ({} > {})",
                self.combat.loot_min,
                self.combat.loot_max
            );
        }
        if self.camera.zoom_min > self.camera.zoom_max {
            bail!(
                "zoom range is inverted ({} > {})",
                self.camera.zoom_min,
                self.camera.zoom_max
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "tilekeep".to_string(),
            target_fps: 60,
        }
    }
}

/// Grid dimensions in tiles, tile size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tile_width: 8,
            tile_height: 8,
        }
    }
}

/// Starting layout. Positions are in tiles, converted to pixels at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitiesConfig {
    pub player_tile: (i32, i32),
    pub player_health: i32,
    pub player_money: i32,
    pub player_xp: i32,
    pub enemy_tile: (i32, i32),
    pub enemy_in_dungeon: bool,
    pub enemy_health: i32,
    pub enemy_xp_reward: i32,
    pub gate_tile: (i32, i32),
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            player_tile: (9, 9),
            player_health: 100,
            player_money: 1000,
            player_xp: 50,
            enemy_tile: (5, 5),
            enemy_in_dungeon: true,
            enemy_health: 100,
            enemy_xp_reward: 0,
            gate_tile: (10, 10),
        }
    }
}

/// Inclusive ranges for the random rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub damage_min: i32,
    pub damage_max: i32,
    pub loot_min: i32,
    pub loot_max: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            damage_min: 2,
            damage_max: 20,
            loot_min: 10,
            loot_max: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub wheel_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: 3.0,
            zoom_min: 3.0,
            zoom_max: 8.0,
            wheel_sensitivity: 0.125,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub tilemap: String,
    pub foot_grass: String,
    pub foot_stone: String,
    pub attack: String,
    pub death: String,
    pub coins: String,
    pub music_light: String,
    pub music_dark: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            tilemap: "res/tilemap/colored_tilemap_packed.png".to_string(),
            foot_grass: "res/sounds/grass.wav".to_string(),
            foot_stone: "res/sounds/concrete.wav".to_string(),
            attack: "res/sounds/07_human_atk_sword_2.wav".to_string(),
            death: "res/sounds/24_orc_death_spin.wav".to_string(),
            coins: "res/sounds/coins.ogg".to_string(),
            music_light: "res/sounds/music_light.wav".to_string(),
            music_dark: "res/sounds/music_dark.wav".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    fn write_config(config: &GameConfig, path: &str) {
        fs::write(path, serde_json::to_string_pretty(config).unwrap()).unwrap();
    }

    #[test]
    fn defaults_match_stock_demo() {
        let c = GameConfig::default();
        assert_eq!((c.window.width, c.window.height), (800, 600));
        assert_eq!(c.window.target_fps, 60);
        assert_eq!((c.world.width, c.world.height), (20, 20));
        assert_eq!(c.entities.player_tile, (9, 9));
        assert_eq!(c.camera.zoom_min, 3.0);
        assert_eq!(c.camera.zoom_max, 8.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "tilekeep.json");
        let mut c = GameConfig::default();
        c.seed = Some(42);
        c.entities.enemy_xp_reward = 30;
        write_config(&c, &path);
        assert_eq!(GameConfig::load(&path).unwrap(), c);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "partial.json");
        fs::write(&path, r#"{ "seed": 7, "camera": { "zoom": 5.0 } }"#).unwrap();
        let c = GameConfig::load(&path).unwrap();
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.camera.zoom, 5.0);
        assert_eq!(c.camera.zoom_max, 8.0);
        assert_eq!(c.world, WorldConfig::default());
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut c = GameConfig::default();
        c.combat.damage_min = 30;
        assert!(c.validate().is_err());

        let mut c = GameConfig::default();
        c.camera.zoom_min = 9.0;
        assert!(c.validate().is_err());

        let mut c = GameConfig::default();
        c.world.width = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "missing.json");
        let c = GameConfig::load_or_default(&path);
        assert_eq!(c, GameConfig::default());
        assert!(!Path::new(&path).exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn valid_file_is_used_by_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "tilekeep.json");
        let mut c = GameConfig::default();
        c.seed = Some(3);
        write_config(&c, &path);
        assert_eq!(GameConfig::load_or_default(&path), c);
    }

    #[test]
    fn broken_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_in(&dir, "broken.json");
        fs::write(&path, "{ not json").unwrap();
        let c = GameConfig::load_or_default(&path);
        assert_eq!(c, GameConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
