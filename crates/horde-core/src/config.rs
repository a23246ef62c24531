//! Runtime tuning overrides.
//!
//! Every field has a default matching the shipped balance, so a tuning file
//! only needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAGNET_BUFF_RADIUS_FACTOR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Combat tuning that hosts may override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Inner radius of the spawn ring around the player.
    pub spawn_ring_min: f32,
    /// Outer radius of the spawn ring around the player.
    pub spawn_ring_max: f32,
    /// Collision radius of the player body.
    pub player_radius: f32,
    /// Damage per second while an enemy touches the player.
    pub contact_damage_per_sec: f32,
    /// Orb pull radius. Doubles while the magnet buff is active.
    pub magnet_radius: f32,
    pub magnet_buff_secs: f32,
    pub magnet_pull_speed: f32,
    pub orb_pickup_radius: f32,
    pub loot_pickup_radius: f32,
    pub heal_amount: f32,
    /// Reaching this wave ends the session in victory.
    pub victory_wave: u32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            spawn_ring_min: 30.0,
            spawn_ring_max: 50.0,
            player_radius: 0.5,
            contact_damage_per_sec: 20.0,
            magnet_radius: 5.0,
            magnet_buff_secs: 10.0,
            magnet_pull_speed: 15.0,
            orb_pickup_radius: 1.0,
            loot_pickup_radius: 1.5,
            heal_amount: 50.0,
            victory_wave: 25,
        }
    }
}

impl TuningConfig {
    /// Parse and validate tuning from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate tuning from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Orb pull radius for the player's current buff state.
    pub fn pull_radius(&self, buffed: bool) -> f32 {
        if buffed {
            self.magnet_radius * MAGNET_BUFF_RADIUS_FACTOR
        } else {
            self.magnet_radius
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spawn_ring_min", self.spawn_ring_min),
            ("player_radius", self.player_radius),
            ("magnet_radius", self.magnet_radius),
            ("magnet_buff_secs", self.magnet_buff_secs),
            ("orb_pickup_radius", self.orb_pickup_radius),
            ("loot_pickup_radius", self.loot_pickup_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        if self.spawn_ring_max < self.spawn_ring_min {
            return Err(ConfigError::Invalid {
                field: "spawn_ring_max",
                reason: format!(
                    "{} is inside spawn_ring_min {}",
                    self.spawn_ring_max, self.spawn_ring_min
                ),
            });
        }
        let non_negative = [
            ("contact_damage_per_sec", self.contact_damage_per_sec),
            ("magnet_pull_speed", self.magnet_pull_speed),
            ("heal_amount", self.heal_amount),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("cannot be negative, got {value}"),
                });
            }
        }
        if self.victory_wave == 0 {
            return Err(ConfigError::Invalid {
                field: "victory_wave",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
