//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one logical step. Movement is
//! a fixed distance per tick; cooldowns and spawning run on the `now`
//! timestamp the host passes in.

use glam::Vec2;

use super::collision::{clamp_to_field, circles_overlap, first_overlap, outside_field};
use super::spawner::maybe_spawn;
use super::state::{Bullet, GameEvent, GamePhase, GameState};
use crate::{angle_between, step_toward};

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub movement: MoveFlags,
    /// Cursor position in field coordinates
    pub cursor: Vec2,
    /// Fire button held
    pub firing: bool,
    /// Switch weapon (edge-triggered)
    pub switch_weapon: bool,
    /// Restart after game over (edge-triggered)
    pub reset: bool,
}

/// Advance the game state by one tick at timestamp `now` (seconds)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    state.events.clear();
    state.clock = now;

    if state.phase == GamePhase::GameOver {
        if !input.reset {
            return;
        }
        state.reset();
    }

    state.time_ticks += 1;

    if input.switch_weapon {
        switch_weapon(state);
    }

    // 1-3. Player
    move_player(state, input.movement);
    aim(state, input.cursor);
    if input.firing {
        fire(state, now);
    }

    // 4. Spawning
    if let Some(enemy) = maybe_spawn(now, state.last_spawn, &state.tuning, &mut state.rng) {
        log::debug!("Enemy spawned at ({:.0}, {:.0})", enemy.pos.x, enemy.pos.y);
        state.events.push(GameEvent::EnemySpawned { pos: enemy.pos });
        state.enemies.push(enemy);
        state.last_spawn = now;
    }

    // 5-6. Bullets, then enemies (enemies chase the already-moved player)
    update_bullets(state);
    update_enemies(state);

    // 7. Lifecycle
    if state.player.health <= 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over at t={now:.2} after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }
}

/// Move the player one step per held direction.
///
/// Each direction is applied and clamped in turn (up, down, left, right), so
/// diagonals are not normalized and opposite keys cancel only away from a wall.
pub fn move_player(state: &mut GameState, flags: MoveFlags) {
    if state.is_game_over() {
        return;
    }

    let (width, height) = (state.tuning.field_width, state.tuning.field_height);
    let player = &mut state.player;
    let moves = [
        (flags.up, Vec2::NEG_Y),
        (flags.down, Vec2::Y),
        (flags.left, Vec2::NEG_X),
        (flags.right, Vec2::X),
    ];
    for (held, dir) in moves {
        if held {
            let next = player.pos + dir * player.speed;
            player.pos = clamp_to_field(next, player.radius, width, height);
        }
    }
}

/// Face the player toward the cursor. A non-finite cursor keeps the old facing.
pub fn aim(state: &mut GameState, cursor: Vec2) {
    if state.is_game_over() || !cursor.is_finite() {
        return;
    }
    state.player.facing = angle_between(state.player.pos, cursor);
}

/// Cycle to the next weapon in registry order
pub fn switch_weapon(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.weapon = state.weapon.next();
    state.events.push(GameEvent::WeaponSwitched {
        weapon: state.weapon,
    });
    log::debug!("Switched weapon to {}", state.weapon.as_str());
}

/// Fire the active weapon if its cooldown has elapsed. Returns true on a shot.
pub fn fire(state: &mut GameState, now: f64) -> bool {
    if state.is_game_over() {
        return false;
    }

    let weapon = state.active_weapon();
    if now - state.last_shot < weapon.fire_interval {
        return false;
    }

    state.bullets.push(Bullet::new(
        state.player.pos,
        state.player.facing,
        weapon,
        state.tuning.bullet_radius,
    ));
    state.last_shot = now;
    state.events.push(GameEvent::Shot { weapon: weapon.id });
    true
}

/// Move bullets, prune the ones that left the field, resolve hits
fn update_bullets(state: &mut GameState) {
    let (width, height) = (state.tuning.field_width, state.tuning.field_height);
    let mut survivors = Vec::with_capacity(state.bullets.len());

    for mut bullet in std::mem::take(&mut state.bullets) {
        bullet.advance();
        if outside_field(bullet.pos, width, height) {
            continue;
        }

        // A bullet is spent on the first enemy it overlaps
        let Some(idx) = first_overlap(bullet.pos, bullet.radius, &state.enemies, |e| {
            (e.pos, e.radius)
        }) else {
            survivors.push(bullet);
            continue;
        };

        let enemy = &mut state.enemies[idx];
        enemy.health -= bullet.damage;
        log::trace!("Bullet hit enemy {idx} for {}, {} left", bullet.damage, enemy.health);

        if enemy.health <= 0 {
            state.enemies.remove(idx);
            state.score += state.tuning.kill_score;
            state.events.push(GameEvent::EnemyKilled { score: state.score });
        } else {
            let remaining = enemy.health;
            state.events.push(GameEvent::EnemyHit { remaining });
        }
    }

    state.bullets = survivors;
}

/// Chase the player; enemies touching the player deal damage and vanish
fn update_enemies(state: &mut GameState) {
    let speed = state.tuning.enemy_speed;
    let damage = state.tuning.enemy_damage;
    let player = &mut state.player;
    let events = &mut state.events;

    state.enemies.retain_mut(|enemy| {
        enemy.pos = step_toward(enemy.pos, player.pos, speed);
        if circles_overlap(player.pos, player.radius, enemy.pos, enemy.radius) {
            player.health -= damage;
            events.push(GameEvent::PlayerHit {
                health: player.health,
            });
            false
        } else {
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Enemy;
    use crate::sim::weapon::WeaponId;

    /// A state that won't spawn anything before t=2
    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345);
        state.last_spawn = 0.0;
        state
    }

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            health: 50,
            radius: 15.0,
        }
    }

    #[test]
    fn test_first_tick_spawns_immediately() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.last_spawn, 0.0);

        // Next spawn waits for the interval
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.enemies.len(), 1);
        tick(&mut state, &TickInput::default(), 2.0);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_move_clamps_to_field() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(22.0, 578.0);
        let input = TickInput {
            movement: MoveFlags {
                left: true,
                down: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.player.pos, Vec2::new(20.0, 580.0));
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let mut state = quiet_state();
        let start = state.player.pos;
        let flags = MoveFlags {
            up: true,
            right: true,
            ..Default::default()
        };
        move_player(&mut state, flags);
        assert_eq!(state.player.pos, start + Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_opposite_keys_cancel_away_from_walls() {
        let mut state = quiet_state();
        let start = state.player.pos;
        let flags = MoveFlags {
            up: true,
            down: true,
            ..Default::default()
        };
        move_player(&mut state, flags);
        assert_eq!(state.player.pos, start);

        // Against the top wall "up" is absorbed, "down" still applies
        state.player.pos = Vec2::new(400.0, 20.0);
        move_player(&mut state, flags);
        assert_eq!(state.player.pos, Vec2::new(400.0, 25.0));
    }

    #[test]
    fn test_aim_tracks_cursor() {
        let mut state = quiet_state();
        aim(&mut state, Vec2::new(400.0, 500.0));
        assert!((state.player.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_cursor_keeps_facing() {
        let mut state = quiet_state();
        aim(&mut state, Vec2::new(400.0, 500.0));
        aim(&mut state, Vec2::new(f32::NAN, 0.0));
        aim(&mut state, Vec2::new(f32::INFINITY, 0.0));
        assert!((state.player.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_nan_cursor_shot_still_leaves_field() {
        let mut state = quiet_state();
        let input = TickInput {
            cursor: Vec2::new(f32::NAN, 0.0),
            firing: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert_eq!(state.bullets.len(), 1);
        assert!(state.bullets[0].vel.is_finite());

        let idle = TickInput::default();
        for i in 1..100 {
            tick(&mut state, &idle, 0.5 + i as f64 * 0.01);
        }
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_nan_bullet_is_pruned() {
        let mut state = quiet_state();
        let mut bullet = Bullet::new(state.player.pos, 0.0, state.active_weapon(), 5.0);
        bullet.pos = Vec2::NAN;
        state.bullets.push(bullet);
        tick(&mut state, &TickInput::default(), 0.5);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = quiet_state();
        assert!(fire(&mut state, 1.0));
        assert!(!fire(&mut state, 1.1));
        assert_eq!(state.bullets.len(), 1);
        assert!(fire(&mut state, 1.2));
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_fire_uses_active_weapon() {
        let mut state = quiet_state();
        switch_weapon(&mut state);
        assert_eq!(state.weapon, WeaponId::Heavy);
        assert!(fire(&mut state, 1.0));
        // Heavy cooldown is 0.5s
        assert!(!fire(&mut state, 1.3));
        assert_eq!(state.bullets[0].damage, 25);
        assert_eq!(state.bullets[0].vel.length(), 12.0);
    }

    #[test]
    fn test_bullet_leaving_field_is_pruned() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(400.0, 25.0);
        let input = TickInput {
            cursor: Vec2::new(400.0, 0.0),
            firing: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.5);
        assert_eq!(state.bullets.len(), 1);
        assert!((state.bullets[0].pos.y - 15.0).abs() < 1e-4);

        let idle = TickInput::default();
        tick(&mut state, &idle, 0.51);
        assert_eq!(state.bullets.len(), 1);
        // 5 -> -5 leaves the field
        tick(&mut state, &idle, 0.52);
        tick(&mut state, &idle, 0.53);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_bullet_hits_first_enemy_only() {
        let mut state = quiet_state();
        state.enemies.push(enemy_at(200.0, 100.0));
        state.enemies.push(enemy_at(205.0, 100.0));
        state.bullets.push(Bullet::new(
            Vec2::new(190.0, 100.0),
            0.0,
            WeaponId::Heavy.weapon(),
            5.0,
        ));

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies[0].health, 25);
        assert_eq!(state.enemies[1].health, 50);
        assert!(state.events.contains(&GameEvent::EnemyHit { remaining: 25 }));
    }

    #[test]
    fn test_kill_awards_score() {
        let mut state = quiet_state();
        let mut e = enemy_at(200.0, 100.0);
        e.health = 20;
        state.enemies.push(e);
        state.bullets.push(Bullet::new(
            Vec2::new(188.0, 100.0),
            0.0,
            WeaponId::Heavy.weapon(),
            5.0,
        ));

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 10);
        assert!(state.events.contains(&GameEvent::EnemyKilled { score: 10 }));
    }

    #[test]
    fn test_enemy_homes_on_player() {
        let mut state = quiet_state();
        state.enemies.push(enemy_at(100.0, 300.0));
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.enemies[0].pos, Vec2::new(102.0, 300.0));
    }

    #[test]
    fn test_enemy_chases_moved_player() {
        let mut state = quiet_state();
        // Enemy directly above the player's *next* position
        state.enemies.push(enemy_at(405.0, 100.0));
        let input = TickInput {
            movement: MoveFlags {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.player.pos, Vec2::new(405.0, 300.0));
        assert_eq!(state.enemies[0].pos, Vec2::new(405.0, 102.0));
    }

    #[test]
    fn test_contact_damages_player_and_consumes_enemy() {
        let mut state = quiet_state();
        state.enemies.push(enemy_at(400.0, 330.0));
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.health, 90);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = quiet_state();
        state.player.health = 20;
        state.enemies.push(enemy_at(400.0, 320.0));
        state.enemies.push(enemy_at(380.0, 300.0));
        state.enemies.push(enemy_at(100.0, 100.0));
        tick(&mut state, &TickInput::default(), 0.0);

        // Both contacts land before the phase check
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));

        let frozen_pos = state.player.pos;
        let frozen_enemy = state.enemies[0].pos;
        let input = TickInput {
            movement: MoveFlags {
                up: true,
                ..Default::default()
            },
            firing: true,
            switch_weapon: true,
            cursor: Vec2::new(0.0, 0.0),
            ..Default::default()
        };
        for i in 1..10 {
            tick(&mut state, &input, 5.0 * i as f64);
        }
        assert_eq!(state.player.pos, frozen_pos);
        assert_eq!(state.player.health, 0);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos, frozen_enemy);
        assert!(state.bullets.is_empty());
        assert_eq!(state.weapon, WeaponId::Rapid);
    }

    #[test]
    fn test_reset_input_restarts_round() {
        let mut state = quiet_state();
        state.player.health = 10;
        state.score = 40;
        state.weapon = WeaponId::Heavy;
        state.enemies.push(enemy_at(400.0, 320.0));
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset, 3.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.score, 0);
        assert_eq!(state.weapon, WeaponId::Rapid);
        assert!(state.enemies.is_empty());
        assert!(state.events.contains(&GameEvent::Reset));

        // Spawn waits a fresh interval from the reset time
        tick(&mut state, &TickInput::default(), 4.9);
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), 5.0);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_reset_ignored_while_playing() {
        let mut state = quiet_state();
        state.score = 30;
        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset, 0.5);
        assert_eq!(state.score, 30);
        assert!(!state.events.contains(&GameEvent::Reset));
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed| {
            let mut state = GameState::new(seed);
            let input = TickInput {
                firing: true,
                cursor: Vec2::new(0.0, 0.0),
                ..Default::default()
            };
            for i in 0..600 {
                tick(&mut state, &input, i as f64 / 60.0);
            }
            (state.score, state.player.health, state.enemies.len())
        };
        assert_eq!(run(3), run(3));
    }
}
