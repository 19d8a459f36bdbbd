//! Game state snapshot, the complete visible state handed to the render
//! collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub screen: ScreenView,
    pub cities: Vec<CityView>,
    pub launchers: Vec<LauncherView>,
    pub missiles: Vec<MissileView>,
    pub bombs: Vec<BombView>,
    pub airplanes: Vec<AirplaneView>,
    pub explosions: Vec<ExplosionView>,
    pub power_ups: Vec<PowerUpView>,
    pub warnings: Vec<WarningView>,
    pub hud: HudView,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Outline of an entity. Circles are centered on the view position;
/// boxes are anchored at their lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle { radius: f64 },
    Box { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScreenView {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: u64,
    pub position: Position,
    pub shape: Shape,
    pub lives: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherView {
    pub id: u64,
    pub position: Position,
    pub shape: Shape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u64,
    pub kind: MissileKind,
    pub position: Position,
    pub target: Position,
    pub shape: Shape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    pub id: u64,
    pub position: Position,
    pub target: Position,
    pub shape: Shape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirplaneView {
    pub id: u64,
    pub position: Position,
    pub shape: Shape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u64,
    pub kind: ExplosionKind,
    pub center: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u64,
    pub kind: PowerUpKind,
    pub position: Position,
    pub shape: Shape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningView {
    /// Id of the missile this warning follows.
    pub missile_id: u64,
    pub position: Position,
}

/// Score line and session counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub level: u32,
    pub cities_remaining: u32,
    pub fire_cooldown_secs: f64,
    pub slow_motion_active: bool,
    pub slow_motion_remaining_secs: f64,
    pub game_over: bool,
}
