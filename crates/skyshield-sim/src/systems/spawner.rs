//! Spawning system for enemy missiles, airplanes and power-ups on fixed
//! real-time intervals.
//!
//! Each stream has its own accumulator advanced by the real tick `dt`, so
//! slow-motion never changes the spawn rate. Like a periodic timer, a stream
//! first fires one full interval after the session starts.

use hecs::World;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::City;
use skyshield_core::config::SessionConfig;
use skyshield_core::constants::*;
use skyshield_core::enums::PowerUpKind;
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::session::{enemy_speed_for_level, level_for_elapsed, SessionState};
use crate::systems::entity_id;
use crate::world_setup;

/// Fixed-interval accumulator.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimer {
    pub interval_secs: f64,
    pub accumulated_secs: f64,
}

impl SpawnTimer {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            accumulated_secs: 0.0,
        }
    }

    /// Add `dt` and return how many intervals completed.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulated_secs += dt;
        let mut fired = 0;
        while self.accumulated_secs >= self.interval_secs - TIMER_EPSILON {
            self.accumulated_secs -= self.interval_secs;
            fired += 1;
        }
        fired
    }
}

/// The three spawn streams of a session.
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimers {
    pub enemy: SpawnTimer,
    pub airplane: SpawnTimer,
    pub power_up: SpawnTimer,
}

impl Default for SpawnTimers {
    fn default() -> Self {
        Self {
            enemy: SpawnTimer::new(ENEMY_SPAWN_INTERVAL),
            airplane: SpawnTimer::new(AIRPLANE_SPAWN_INTERVAL),
            power_up: SpawnTimer::new(POWERUP_SPAWN_INTERVAL),
        }
    }
}

/// Advance the spawn streams and spawn whatever is due.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    config: &SessionConfig,
    elapsed_secs: f64,
    dt: f64,
) {
    for _ in 0..timers.enemy.advance(dt) {
        spawn_enemy(world, rng, session, events, config, elapsed_secs);
    }
    for _ in 0..timers.airplane.advance(dt) {
        let airplane = world_setup::spawn_airplane(world, config);
        debug!("airplane {} inbound", entity_id(airplane));
        events.push(GameEvent::AirplaneInbound {
            airplane_id: entity_id(airplane),
        });
    }
    for _ in 0..timers.power_up.advance(dt) {
        spawn_power_up(world, rng, events, config);
    }
}

/// Spawn one enemy missile aimed at a random surviving city.
/// Also the only place the level is recomputed. No-op without cities.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    config: &SessionConfig,
    elapsed_secs: f64,
) {
    let cities: Vec<Position> = world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();
    let Some(&target) = cities.choose(rng) else {
        return;
    };

    let level = level_for_elapsed(elapsed_secs);
    if level != session.level {
        info!("level {} -> {}", session.level, level);
        session.level = level;
        events.push(GameEvent::LevelUp { level });
    }

    let x = world_setup::random_edge_x(rng, config.screen_width, ENEMY_EDGE_INSET);
    let start = Position::new(x, config.screen_height);
    let missile =
        world_setup::spawn_enemy_missile(world, start, target, enemy_speed_for_level(level));
    debug!("enemy {} launched at x={x}", entity_id(missile));
    events.push(GameEvent::EnemyLaunched {
        missile_id: entity_id(missile),
        level,
    });
}

/// Spawn one power-up of a random kind near the top edge.
pub fn spawn_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    config: &SessionConfig,
) {
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::Bomb
    } else {
        PowerUpKind::SlowMotion
    };
    let x = world_setup::random_edge_x(rng, config.screen_width, POWERUP_EDGE_INSET);
    let position = Position::new(x, config.screen_height - POWERUP_EDGE_INSET);
    world_setup::spawn_power_up(world, position, kind);
    events.push(GameEvent::PowerUpSpawned { kind });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once_per_interval() {
        let mut timer = SpawnTimer::new(2.0);
        let mut fired = 0;
        for _ in 0..120 {
            fired += timer.advance(1.0 / 60.0);
        }
        assert_eq!(fired, 1, "2s timer fires exactly once in 2s of 60Hz ticks");
        for _ in 0..119 {
            fired += timer.advance(1.0 / 60.0);
        }
        assert_eq!(fired, 1);
        fired += timer.advance(1.0 / 60.0);
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_timer_catches_up_after_long_tick() {
        let mut timer = SpawnTimer::new(2.0);
        assert_eq!(timer.advance(5.0), 2);
        assert!((timer.accumulated_secs - 1.0).abs() < 1e-12);
    }
}
