//! Session counters: score, level, fire cooldown and slow-motion.
//!
//! Stored in `SimulationEngine` alongside the ECS world, NOT as entities.

use skyshield_core::constants::*;

/// Running session state tracked by the engine.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Only ever increases within a session.
    pub score: u32,
    /// Difficulty tier, recomputed on enemy spawn ticks.
    pub level: u32,
    /// Seconds until the next interceptor may be fired.
    pub fire_cooldown_secs: f64,
    pub slow_motion: SlowMotion,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlowMotion {
    pub active: bool,
    pub remaining_secs: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            fire_cooldown_secs: 0.0,
            slow_motion: SlowMotion::default(),
        }
    }
}

impl SessionState {
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Count down the cooldown and slow-motion timers.
    /// Returns true if slow-motion ended this tick.
    pub fn tick_timers(&mut self, dt: f64) -> bool {
        if self.fire_cooldown_secs > 0.0 {
            self.fire_cooldown_secs = (self.fire_cooldown_secs - dt).max(0.0);
            if self.fire_cooldown_secs <= TIMER_EPSILON {
                self.fire_cooldown_secs = 0.0;
            }
        }

        if self.slow_motion.active {
            self.slow_motion.remaining_secs -= dt;
            if self.slow_motion.remaining_secs <= TIMER_EPSILON {
                self.slow_motion = SlowMotion::default();
                return true;
            }
        }
        false
    }

    /// Time step applied to enemy missile motion. Everything else uses real dt.
    pub fn enemy_dt(&self, dt: f64) -> f64 {
        if self.slow_motion.active {
            dt * SLOW_MOTION_FACTOR
        } else {
            dt
        }
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown_secs <= 0.0
    }

    pub fn start_cooldown(&mut self) {
        self.fire_cooldown_secs = FIRE_COOLDOWN_TIME;
    }

    /// Activate slow-motion with a fresh timer (restarts a running one).
    pub fn start_slow_motion(&mut self) {
        self.slow_motion = SlowMotion {
            active: true,
            remaining_secs: SLOW_MOTION_DURATION,
        };
    }
}

/// Difficulty level for the given elapsed play time.
pub fn level_for_elapsed(elapsed_secs: f64) -> u32 {
    (elapsed_secs / LEVEL_INTERVAL).floor().max(0.0) as u32 + 1
}

/// Enemy missile speed (units per reference frame) at `level`.
pub fn enemy_speed_for_level(level: u32) -> f64 {
    INITIAL_ENEMY_SPEED + level as f64 * ENEMY_SPEED_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_steps_every_thirty_seconds() {
        assert_eq!(level_for_elapsed(0.0), 1);
        assert_eq!(level_for_elapsed(29.9), 1);
        assert_eq!(level_for_elapsed(30.0), 2);
        assert_eq!(level_for_elapsed(95.0), 4);
    }

    #[test]
    fn test_enemy_speed_formula() {
        assert_eq!(enemy_speed_for_level(1), 2.5);
        assert_eq!(enemy_speed_for_level(4), 4.0);
    }

    #[test]
    fn test_slow_motion_halves_enemy_dt_until_expiry() {
        let mut session = SessionState::default();
        assert_eq!(session.enemy_dt(0.1), 0.1);

        session.start_slow_motion();
        assert_eq!(session.enemy_dt(0.1), 0.05);

        let mut ended = false;
        for _ in 0..50 {
            ended |= session.tick_timers(0.1);
        }
        assert!(ended);
        assert!(!session.slow_motion.active);
        assert_eq!(session.enemy_dt(0.1), 0.1);
    }

    #[test]
    fn test_cooldown_counts_down_to_zero() {
        let mut session = SessionState::default();
        assert!(session.can_fire());
        session.start_cooldown();
        assert!(!session.can_fire());
        for _ in 0..30 {
            session.tick_timers(1.0 / 60.0);
        }
        assert!(session.can_fire());
        assert_eq!(session.fire_cooldown_secs, 0.0);
    }

    #[test]
    fn test_award_saturates() {
        let mut session = SessionState {
            score: u32::MAX - 1,
            ..Default::default()
        };
        session.award(5);
        assert_eq!(session.score, u32::MAX);
    }
}
