//! Data-driven game balance
//!
//! Loaded from JSON. Every field falls back to the baseline value, so a
//! tuning file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::WeaponId;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Units per tick, per active direction
    pub player_speed: f32,
    pub player_health: i32,
    pub barrel_length: f32,
    /// Weapon active at game start and after reset
    pub default_weapon: WeaponId,

    // === Enemies ===
    pub enemy_radius: f32,
    /// Units per tick toward the player
    pub enemy_speed: f32,
    pub enemy_health: i32,
    pub enemy_damage: i32,
    /// Seconds between spawns
    pub spawn_interval: f64,
    pub kill_score: u64,

    // === Bullets ===
    pub bullet_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_health: PLAYER_HEALTH,
            barrel_length: BARREL_LENGTH,
            default_weapon: WeaponId::Rapid,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_HEALTH,
            enemy_damage: ENEMY_DAMAGE,
            spawn_interval: SPAWN_INTERVAL,
            kill_score: KILL_SCORE,

            bullet_radius: BULLET_RADIUS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).map_err(SimError::Tuning)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't honor
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_radius", self.player_radius),
            ("enemy_radius", self.enemy_radius),
            ("bullet_radius", self.bullet_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(invalid(field, format!("must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("barrel_length", self.barrel_length),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        if !(self.spawn_interval > 0.0) {
            return Err(invalid(
                "spawn_interval",
                format!("must be > 0, got {}", self.spawn_interval),
            ));
        }
        if self.player_health <= 0 {
            return Err(invalid("player_health", "must be > 0".to_string()));
        }
        if self.enemy_health <= 0 {
            return Err(invalid("enemy_health", "must be > 0".to_string()));
        }
        if self.enemy_damage < 0 {
            return Err(invalid(
                "enemy_damage",
                format!("must be >= 0, got {}", self.enemy_damage),
            ));
        }

        let diameter = self.player_radius * 2.0;
        if self.field_width <= diameter || self.field_height <= diameter {
            return Err(invalid(
                "player_radius",
                format!(
                    "player diameter {diameter} does not fit a {}x{} field",
                    self.field_width, self.field_height
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> SimError {
    SimError::InvalidTuning { field, reason }
}
