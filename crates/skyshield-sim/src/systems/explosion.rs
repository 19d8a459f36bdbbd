//! Explosion lifecycle: growth, blast kills, and pruning.
//!
//! A live explosion destroys every enemy missile inside its CURRENT radius,
//! every tick, so a blast can catch missiles that fly into it later.
//! An explosion still checks for kills on the tick it reaches its cap and is
//! removed at the end of that tick.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::{EnemyMissile, Explosion};
use skyshield_core::enums::ExplosionKind;
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::session::SessionState;
use crate::systems::warnings::WarningMap;
use crate::systems::{cleanup, entity_id};
use crate::world_setup;

/// Spawn an explosion and announce it.
pub fn detonate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    center: Position,
    kind: ExplosionKind,
) -> Entity {
    events.push(GameEvent::Detonation {
        kind,
        x: center.x,
        y: center.y,
    });
    world_setup::spawn_explosion(world, rng, center, kind)
}

/// Grow every explosion, apply blast kills, then prune the ones that
/// reached their cap.
pub fn run(
    world: &mut World,
    warnings: &mut WarningMap,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    let mut blasts: Vec<(Entity, Position, f64, bool)> = Vec::new();
    for (entity, (explosion, center)) in world.query_mut::<(&mut Explosion, &Position)>() {
        let terminal = explosion.grow(dt);
        blasts.push((entity, *center, explosion.radius, terminal));
    }

    for (entity, center, radius, terminal) in blasts {
        let caught: Vec<Entity> = world
            .query::<(&EnemyMissile, &Position)>()
            .iter()
            .filter(|(_, (_, pos))| pos.range_to(&center) < radius)
            .map(|(missile, _)| missile)
            .collect();

        for missile in caught {
            if cleanup::remove(world, warnings, missile) {
                session.award(1);
                events.push(GameEvent::EnemyDestroyed {
                    missile_id: entity_id(missile),
                });
            }
        }

        if terminal {
            cleanup::remove(world, warnings, entity);
        }
    }
}
