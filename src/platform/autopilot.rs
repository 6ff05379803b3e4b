//! Headless demo host
//!
//! Plays the game without a window: aims at the closest enemy, holds the
//! trigger, backs away from anything inside its comfort radius and restarts
//! after a game over until it runs out of rounds or frames.

use glam::Vec2;

use super::Host;
use crate::distance;
use crate::sim::{GameEvent, GamePhase, MoveFlags, SceneDescription, TickInput, WeaponId};

/// Enemies closer than this make the autopilot retreat
const COMFORT_RADIUS: f32 = 140.0;
/// Enemies farther than this are worth a slow heavy shot
const HEAVY_RANGE: f32 = 260.0;

/// Per-round tallies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub score: u64,
    pub shots: u32,
    pub kills: u32,
    pub hits_taken: u32,
}

/// Self-playing host
#[derive(Debug, Clone)]
pub struct AutopilotHost {
    max_frames: u64,
    frames: u64,
    resets_left: u32,
    /// A reset was sent and hasn't reached a tick yet
    reset_sent: bool,
    current: RoundStats,
    rounds: Vec<RoundStats>,
}

impl AutopilotHost {
    /// Play for at most `max_frames` frames, restarting up to `max_resets` times
    pub fn new(max_frames: u64, max_resets: u32) -> Self {
        Self {
            max_frames,
            frames: 0,
            resets_left: max_resets,
            reset_sent: false,
            current: RoundStats::default(),
            rounds: Vec::new(),
        }
    }

    /// Finished rounds, in play order
    pub fn rounds(&self) -> &[RoundStats] {
        &self.rounds
    }

    /// Tallies for the round in progress
    pub fn current(&self) -> &RoundStats {
        &self.current
    }

    fn steer(&self, scene: &SceneDescription) -> TickInput {
        let me = scene.player.pos;
        let nearest = scene
            .enemies
            .iter()
            .map(|e| (e.pos, distance(me, e.pos)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let Some((target, dist)) = nearest else {
            // Nothing to shoot: drift back to the middle
            let center = Vec2::new(scene.width / 2.0, scene.height / 2.0);
            return TickInput {
                movement: toward(me, center, scene.player.radius),
                cursor: center + Vec2::X,
                ..Default::default()
            };
        };

        let movement = if dist < COMFORT_RADIUS {
            toward(me, me + (me - target), 0.0)
        } else {
            MoveFlags::default()
        };

        let wanted = if dist > HEAVY_RANGE {
            WeaponId::Heavy
        } else {
            WeaponId::Rapid
        };

        TickInput {
            movement,
            cursor: target,
            firing: true,
            switch_weapon: wanted != scene.weapon,
            reset: false,
        }
    }
}

/// Direction keys that close the gap to `goal`, ignoring offsets within `dead_zone`
fn toward(from: Vec2, goal: Vec2, dead_zone: f32) -> MoveFlags {
    let d = goal - from;
    MoveFlags {
        up: d.y < -dead_zone,
        down: d.y > dead_zone,
        left: d.x < -dead_zone,
        right: d.x > dead_zone,
    }
}

impl Host for AutopilotHost {
    fn poll_input(&mut self, scene: &SceneDescription) -> Option<TickInput> {
        if self.frames >= self.max_frames {
            return None;
        }
        self.frames += 1;

        match scene.phase {
            GamePhase::Playing => {
                self.reset_sent = false;
                Some(self.steer(scene))
            }
            GamePhase::GameOver if self.reset_sent => Some(TickInput::default()),
            GamePhase::GameOver if self.resets_left > 0 => {
                self.resets_left -= 1;
                self.reset_sent = true;
                Some(TickInput {
                    reset: true,
                    ..Default::default()
                })
            }
            GamePhase::GameOver => None,
        }
    }

    fn present(&mut self, scene: &SceneDescription, events: &[GameEvent]) {
        self.current.score = scene.score;
        for event in events {
            match *event {
                GameEvent::Shot { .. } => self.current.shots += 1,
                GameEvent::EnemyKilled { .. } => self.current.kills += 1,
                GameEvent::PlayerHit { health } => {
                    self.current.hits_taken += 1;
                    log::debug!("Autopilot took a hit, {health} health left");
                }
                GameEvent::GameOver { score } => {
                    self.current.score = score;
                    let round = std::mem::take(&mut self.current);
                    log::info!(
                        "Round {} over: score {}, {} kills, {} shots",
                        self.rounds.len() + 1,
                        round.score,
                        round.kills,
                        round.shots
                    );
                    self.rounds.push(round);
                }
                _ => {}
            }
        }
    }
}
