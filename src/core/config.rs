//! Gameplay tuning loaded from an external RON file.
//!
//! Allows tweaking distances, timings and level layout without
//! recompilation. Weapon and creature stats are not here; they are closed
//! lookup tables in the combat and enemies modules.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Default location of the tuning file.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Player body and muzzle tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub move_speed: f32,
    /// Half size of the collision box used against obstacles.
    pub half_extents: (f32, f32, f32),
    /// Height of the collision box centre above the player's feet.
    pub body_center_height: f32,
    pub muzzle_height: f32,
    /// Distance in front of the player where projectiles appear.
    pub muzzle_offset: f32,
    pub max_health: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            half_extents: (0.3, 1.0, 0.3),
            body_center_height: 1.0,
            muzzle_height: 1.4,
            muzzle_offset: 0.8,
            max_health: 100,
        }
    }
}

/// Creature and pickup spawn cadence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub initial_interval: f32,
    pub interval_step: f32,
    pub min_interval: f32,
    pub creature_radius: f32,
    pub drop_interval: f32,
    pub drop_radius: f32,
    pub drop_height: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            initial_interval: 2.0,
            interval_step: 0.05,
            min_interval: 0.5,
            creature_radius: 30.0,
            drop_interval: 15.0,
            drop_radius: 10.0,
            drop_height: 1.0,
        }
    }
}

/// Hit radii and projectile lifetimes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub ranged_hit_radius: f32,
    pub melee_hit_radius: f32,
    pub explosion_radius: f32,
    /// A creature closer than this to the player ends the run.
    pub contact_radius: f32,
    pub pickup_radius: f32,
    pub projectile_lifetime: f32,
    pub melee_lifetime: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            ranged_hit_radius: 0.8,
            melee_hit_radius: 1.5,
            explosion_radius: 5.0,
            contact_radius: 1.0,
            pickup_radius: 1.5,
            projectile_lifetime: 0.8,
            melee_lifetime: 0.2,
        }
    }
}

/// Procedural obstacle layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    pub city_extent: f32,
    pub grid_spacing: f32,
    pub building_chance: f32,
    pub car_chance: f32,
    /// Cells closer than this to the origin stay empty.
    pub spawn_clearance: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            city_extent: 100.0,
            grid_spacing: 10.0,
            building_chance: 0.3,
            car_chance: 0.1,
            spawn_clearance: 8.0,
        }
    }
}

/// Gameplay configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub spawning: SpawnTuning,
    pub combat: CombatTuning,
    pub level: LevelTuning,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub high_score_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            spawning: SpawnTuning::default(),
            combat: CombatTuning::default(),
            level: LevelTuning::default(),
            seed: None,
            high_score_path: Some("save/high_score.ron".to_string()),
        }
    }
}

impl GameConfig {
    /// Parse a config from a RON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron(&contents).map_err(|e| match e {
            DataLoadError::ParseError { details, .. } => DataLoadError::ParseError {
                path: display,
                details,
            },
            other => other,
        })
    }

    /// Parse a config from a RON string.
    pub fn from_ron(contents: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: "<inline>".to_string(),
            details: e.to_string(),
        })
    }

    /// Load the config, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::from_file(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = GameConfig::from_ron("(seed: Some(7), combat: (explosion_radius: 6.0))")
            .expect("valid ron");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.combat.explosion_radius, 6.0);
        assert_eq!(config.combat.ranged_hit_radius, 0.8);
        assert_eq!(config.spawning.initial_interval, 2.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = GameConfig::from_ron("(seed: \"nope\"").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config = GameConfig::from_file(CONFIG_PATH).expect("shipped config parses");
        let defaults = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.high_score_path, defaults.high_score_path);
        assert_eq!(config.spawning.min_interval, defaults.spawning.min_interval);
        assert_eq!(config.player.half_extents, defaults.player.half_extents);
        assert_eq!(config.level.spawn_clearance, defaults.level.spawn_clearance);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = GameConfig::from_file("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }
}
