//! Stickman Shooter - a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, weapons, spawning, collisions, game state)
//! - `platform`: Host boundary (input snapshots in, scene descriptions out)
//! - `tuning`: Data-driven game balance
//! - `error`: Crate error type

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::{Result, SimError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (baseline tuning)
pub mod consts {
    /// Logical tick rate the movement speeds are expressed against
    pub const SIM_HZ: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / SIM_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Units per tick, per active direction
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HEALTH: i32 = 100;
    /// Gun barrel drawn from the player center along the facing angle
    pub const BARREL_LENGTH: f32 = 30.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 15.0;
    /// Units per tick toward the player
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_HEALTH: i32 = 50;
    /// Health removed from the player on contact
    pub const ENEMY_DAMAGE: i32 = 10;
    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f64 = 2.0;

    /// Bullet radius (all weapons)
    pub const BULLET_RADIUS: f32 = 5.0;

    /// Score awarded per enemy killed
    pub const KILL_SCORE: u64 = 10;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for an angle
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Move `from` by `step` units toward `to`.
///
/// Coincident points stay put; the caller treats that as contact anyway.
#[inline]
pub fn step_toward(from: Vec2, to: Vec2, step: f32) -> Vec2 {
    from + (to - from).normalize_or_zero() * step
}
