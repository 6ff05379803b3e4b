//! Read-only scene description handed to the renderer each frame

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameState};
use super::weapon::{Tint, WeaponId};
use crate::direction;

pub const CONTROLS_HINT: &str = "WASD: Move | Mouse: Aim | Click: Shoot | Q: Switch Weapon";
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to Restart";

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: f32,
    /// End of the gun barrel line drawn from `pos`
    pub barrel_tip: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
    pub tint: Tint,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct SceneDescription {
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub health: i32,
    pub score: u64,
    pub weapon: WeaponId,
    /// Top-left HUD lines, in draw order
    pub hud: Vec<String>,
    pub controls_hint: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'static str>,
}

impl GameState {
    /// Project the current state into a scene
    pub fn snapshot(&self) -> SceneDescription {
        let p = &self.player;
        SceneDescription {
            width: self.tuning.field_width,
            height: self.tuning.field_height,
            phase: self.phase,
            player: PlayerView {
                pos: p.pos,
                radius: p.radius,
                facing: p.facing,
                barrel_tip: p.pos + direction(p.facing) * self.tuning.barrel_length,
            },
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    radius: b.radius,
                    tint: b.tint,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            health: p.health,
            score: self.score,
            weapon: self.weapon,
            hud: vec![
                format!("Health: {}", p.health),
                format!("Score: {}", self.score),
                format!("Weapon: {}", self.weapon.as_str().to_uppercase()),
            ],
            controls_hint: CONTROLS_HINT,
            banner: match self.phase {
                GamePhase::GameOver => Some(GAME_OVER_MESSAGE),
                GamePhase::Playing => None,
            },
        }
    }
}
