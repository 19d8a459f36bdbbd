//! Power-up activation.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::{EnemyMissile, PowerUp};
use skyshield_core::constants::POWERUP_TAP_RANGE;
use skyshield_core::enums::{ExplosionKind, PowerUpKind};
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::session::SessionState;
use crate::systems::explosion::detonate;
use crate::systems::warnings::WarningMap;
use crate::systems::{cleanup, entity_id};

/// First power-up within tap range of `point`.
pub fn find_at(world: &World, point: Position) -> Option<(Entity, PowerUpKind)> {
    world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .find(|(_, (_, pos))| pos.range_to(&point) < POWERUP_TAP_RANGE)
        .map(|(entity, (power_up, _))| (entity, power_up.kind))
}

/// Consume a power-up and apply its effect.
pub fn activate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    power_up: Entity,
    kind: PowerUpKind,
) {
    if !cleanup::remove(world, warnings, power_up) {
        return;
    }
    debug!("power-up {kind:?} activated");
    events.push(GameEvent::PowerUpActivated { kind });

    match kind {
        PowerUpKind::Bomb => detonate_all_enemies(world, rng, warnings, session, events),
        PowerUpKind::SlowMotion => session.start_slow_motion(),
    }
}

/// Explode every live enemy missile where it is, one point each.
fn detonate_all_enemies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
) {
    let enemies: Vec<(Entity, Position)> = world
        .query::<(&EnemyMissile, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (missile, pos) in enemies {
        detonate(world, rng, events, pos, ExplosionKind::Interceptor);
        session.award(1);
        cleanup::remove(world, warnings, missile);
        events.push(GameEvent::EnemyDestroyed {
            missile_id: entity_id(missile),
        });
    }
}
