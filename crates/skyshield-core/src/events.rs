//! Events emitted by the simulation for audio and UI feedback.
//!
//! Entity ids are the `hecs` entity bits and match the `id` fields of the
//! snapshot views.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Enemy missile entered from the top edge.
    EnemyLaunched { missile_id: u64, level: u32 },
    /// Player fired.
    InterceptorLaunched { launcher_id: u64, x: f64, y: f64 },
    /// An explosion started.
    Detonation { kind: ExplosionKind, x: f64, y: f64 },
    /// Enemy missile destroyed by a blast or power-up.
    EnemyDestroyed { missile_id: u64 },
    /// Enemy missile is close to a city.
    MissileWarning { missile_id: u64 },
    /// City lost a life.
    CityHit { city_id: u64, lives_remaining: u32 },
    /// City lost its last life.
    CityDestroyed { city_id: u64 },
    AirplaneInbound { airplane_id: u64 },
    AirplaneDown { airplane_id: u64 },
    BombDropped { bomb_id: u64, city_id: u64 },
    BombIntercepted { bomb_id: u64 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpActivated { kind: PowerUpKind },
    SlowMotionEnded,
    LevelUp { level: u32 },
    GameOver { score: u32 },
    SessionReset,
}
