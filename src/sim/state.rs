//! Game state and core simulation types
//!
//! `GameState` is the single owner of everything that changes during play.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::weapon::{Tint, Weapon, WeaponId};
use crate::direction;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died; only reset is accepted
    GameOver,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Units per tick, per active direction
    pub speed: f32,
    /// May dip below zero on the tick that ends the game
    pub health: i32,
    /// Facing angle (radians), re-derived from the cursor every tick
    pub facing: f32,
}

impl Player {
    /// Fresh player at the center of the field
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.field_width / 2.0, tuning.field_height / 2.0),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            health: tuning.player_health,
            facing: 0.0,
        }
    }
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Travel per tick, fixed at creation
    pub vel: Vec2,
    pub damage: i32,
    pub radius: f32,
    pub tint: Tint,
}

impl Bullet {
    /// Fire `weapon` from `origin` along `angle`
    pub fn new(origin: Vec2, angle: f32, weapon: &Weapon, radius: f32) -> Self {
        Self {
            pos: origin,
            vel: direction(angle) * weapon.speed,
            damage: weapon.damage,
            radius,
            tint: weapon.tint,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub health: i32,
    pub radius: f32,
}

/// Things that happened during the last tick, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Shot { weapon: WeaponId },
    EnemySpawned { pos: Vec2 },
    EnemyHit { remaining: i32 },
    EnemyKilled { score: u64 },
    PlayerHit { health: i32 },
    WeaponSwitched { weapon: WeaponId },
    GameOver { score: u64 },
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values this session runs with
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Live bullets (order irrelevant)
    pub bullets: Vec<Bullet>,
    /// Live enemies (insertion order is the collision order)
    pub enemies: Vec<Enemy>,
    pub weapon: WeaponId,
    pub score: u64,
    /// Timestamp of the last shot; `NEG_INFINITY` means ready
    pub last_shot: f64,
    /// Timestamp of the last spawn; `NEG_INFINITY` means ready
    pub last_spawn: f64,
    /// Most recent timestamp seen by `tick`
    pub clock: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with baseline tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("New game (seed {seed})");
        Self {
            seed,
            phase: GamePhase::Playing,
            player: Player::new(&tuning),
            bullets: Vec::new(),
            enemies: Vec::new(),
            weapon: tuning.default_weapon,
            score: 0,
            last_shot: f64::NEG_INFINITY,
            last_spawn: f64::NEG_INFINITY,
            clock: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Active weapon definition
    pub fn active_weapon(&self) -> &'static Weapon {
        self.weapon.weapon()
    }

    /// Start a fresh round.
    ///
    /// Events from earlier ticks are discarded; afterwards `events` holds only
    /// `Reset`. Shooting is ready immediately; the next spawn waits one full
    /// interval from the last timestamp seen. The RNG keeps running so rounds
    /// differ.
    pub fn reset(&mut self) {
        let now = self.clock;
        self.phase = GamePhase::Playing;
        self.player = Player::new(&self.tuning);
        self.bullets.clear();
        self.enemies.clear();
        self.weapon = self.tuning.default_weapon;
        self.score = 0;
        self.last_shot = f64::NEG_INFINITY;
        self.last_spawn = now;
        self.events.clear();
        self.events.push(GameEvent::Reset);
        log::info!("Game reset at t={now:.2}");
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
