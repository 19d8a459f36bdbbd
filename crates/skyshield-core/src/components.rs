//! ECS components for hecs entities.
//!
//! Components are plain data structs. Motion helpers live here because they
//! are pure functions of the component's own fields; every rule that touches
//! more than one entity lives in the simulation systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{Direction, Position};

/// A defended city. Removed from the world when its lives reach zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    pub lives: u32,
}

/// Ground launcher that originates interceptors. Never moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Launcher;

/// Straight-line missile state shared by enemy missiles and interceptors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    /// Fixed at launch from the start→target vector.
    pub direction: Direction,
    /// Units per reference frame.
    pub speed: f64,
    /// City position (enemy) or tapped point (interceptor).
    pub target: Position,
    /// Seconds until self-detonation. Interceptors only.
    pub lifetime_secs: Option<f64>,
}

/// Marks a missile as hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyMissile;

/// Marks a missile as player-fired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Expanding blast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Current blast radius.
    pub radius: f64,
    /// Cap; the explosion is terminal once `radius >= max_radius`.
    pub max_radius: f64,
}

/// Cosmetic debris attached to an explosion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleBurst {
    pub particles: Vec<Particle>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Position,
    /// Not normalized; each axis is drawn from [-1, 1].
    pub drift: Direction,
    pub radius: f64,
    pub speed: f64,
    pub life_secs: f64,
    pub alpha: f64,
}

/// Collectible falling from the top edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Bomber crossing the screen left to right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Airplane {
    /// Units per second along +x.
    pub speed: f64,
    /// Seconds until the next bomb release.
    pub bomb_timer_secs: f64,
}

/// Bomb falling toward a fixed city position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bomb {
    pub target: Position,
    /// Units per second.
    pub speed: f64,
}

/// "Incoming" marker shown next to an enemy missile close to a city.
/// Held in the engine's warning map, keyed by the missile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WarningIndicator {
    pub position: Position,
}

impl City {
    pub fn new() -> Self {
        Self {
            lives: CITY_STARTING_LIVES,
        }
    }

    /// Remove one life. Returns true if the city is now destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

impl Default for City {
    fn default() -> Self {
        Self::new()
    }
}

impl Missile {
    /// Enemy missile from `start` toward a city at `target`.
    pub fn enemy(start: Position, target: Position, speed: f64) -> Self {
        Self {
            direction: start.direction_to(&target),
            speed,
            target,
            lifetime_secs: None,
        }
    }

    /// Interceptor from a launcher at `start` toward the tapped point.
    pub fn interceptor(start: Position, target: Position) -> Self {
        Self {
            direction: start.direction_to(&target),
            speed: INTERCEPTOR_SPEED,
            target,
            lifetime_secs: Some(INTERCEPTOR_LIFETIME),
        }
    }

    /// Distance covered in `dt` seconds.
    pub fn step_distance(&self, dt: f64) -> f64 {
        self.speed * REFERENCE_FRAME_RATE * dt
    }

    /// Whether the self-destruct timer has run out.
    pub fn expired(&self) -> bool {
        self.lifetime_secs
            .is_some_and(|remaining| remaining <= TIMER_EPSILON)
    }
}

impl Explosion {
    pub fn new(kind: ExplosionKind) -> Self {
        Self {
            kind,
            radius: EXPLOSION_INITIAL_RADIUS,
            max_radius: kind.range(),
        }
    }

    /// Grow by one tick. Returns true once the blast has reached its cap.
    pub fn grow(&mut self, dt: f64) -> bool {
        self.radius += EXPLOSION_GROWTH_RATE * dt;
        self.is_terminal()
    }

    pub fn is_terminal(&self) -> bool {
        self.radius >= self.max_radius
    }
}

impl Particle {
    pub fn update(&mut self, dt: f64) {
        self.position = self
            .position
            .offset(self.drift.x * self.speed * dt, self.drift.y * self.speed * dt);
        self.life_secs -= dt;
        if self.life_secs < 0.0 {
            self.alpha = 0.0;
        }
    }
}

impl Airplane {
    pub fn new() -> Self {
        Self {
            speed: AIRPLANE_SPEED,
            bomb_timer_secs: BOMB_DROP_INTERVAL,
        }
    }
}

impl Default for Airplane {
    fn default() -> Self {
        Self::new()
    }
}

impl Bomb {
    pub fn new(target: Position) -> Self {
        Self {
            target,
            speed: BOMB_SPEED,
        }
    }
}
