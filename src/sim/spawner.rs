//! Edge spawner
//!
//! Every `spawn_interval` seconds an enemy appears at a random point on one
//! of the four field edges.

use glam::Vec2;
use rand::Rng;

use super::state::Enemy;
use crate::tuning::Tuning;

/// Field edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Point on this edge, `t` in [0, 1] along its length
    pub fn point(self, t: f32, width: f32, height: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(t * width, 0.0),
            Edge::Bottom => Vec2::new(t * width, height),
            Edge::Left => Vec2::new(0.0, t * height),
            Edge::Right => Vec2::new(width, t * height),
        }
    }
}

/// Spawn an enemy if the interval has elapsed.
///
/// The caller must set its last-spawn time to `now` whenever this returns
/// `Some`.
pub fn maybe_spawn(
    now: f64,
    last_spawn: f64,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    if now - last_spawn < tuning.spawn_interval {
        return None;
    }

    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let t: f32 = rng.random_range(0.0..=1.0);
    let pos = edge.point(t, tuning.field_width, tuning.field_height);

    Some(Enemy {
        pos,
        health: tuning.enemy_health,
        radius: tuning.enemy_radius,
    })
}
