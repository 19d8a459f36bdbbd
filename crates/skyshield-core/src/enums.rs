//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_EXPLOSION_RANGE, BOMB_EXPLOSION_RANGE, INTERCEPTOR_EXPLOSION_RANGE};

/// Missile allegiance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Descends toward a city.
    Enemy,
    /// Player-fired, flies to a tapped point.
    Interceptor,
}

/// What caused an explosion. Determines its blast cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExplosionKind {
    /// Enemy missile striking a city.
    Base,
    /// Interceptor detonation, downed airplane, or power-up bomb.
    Interceptor,
    /// Airplane bomb, intercepted or on impact.
    Bomb,
}

impl ExplosionKind {
    /// Radius at which the blast stops growing and is removed.
    pub fn range(self) -> f64 {
        match self {
            ExplosionKind::Base => BASE_EXPLOSION_RANGE,
            ExplosionKind::Interceptor => INTERCEPTOR_EXPLOSION_RANGE,
            ExplosionKind::Bomb => BOMB_EXPLOSION_RANGE,
        }
    }
}

/// Power-up variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Detonates every live enemy missile.
    Bomb,
    /// Halves enemy missile speed for a while.
    SlowMotion,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Host-requested pause; ticks do not advance the world.
    Paused,
    /// All cities lost. Persists until the next tap resets the session.
    GameOver,
}
