//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick movement only
//! - Seeded RNG only
//! - Stable iteration order (insertion order for enemies)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scene;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{circles_overlap, clamp_to_field, first_overlap, outside_field};
pub use scene::{BulletView, EnemyView, PlayerView, SceneDescription};
pub use spawner::{Edge, maybe_spawn};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player};
pub use tick::{MoveFlags, TickInput, aim, fire, move_player, switch_weapon, tick};
pub use weapon::{Tint, WEAPONS, Weapon, WeaponId, lookup};
