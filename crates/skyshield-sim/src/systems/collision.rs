//! Collision and interaction rules between entity kinds.
//!
//! Each rule collects candidate handles first and mutates the world
//! afterward, so an entity removed by one resolution is never matched again
//! later in the same pass. "First match" means query encounter order.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::enums::ExplosionKind;
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::session::SessionState;
use crate::systems::explosion::detonate;
use crate::systems::warnings::WarningMap;
use crate::systems::{cleanup, entity_id};

/// Enemy missiles that reach a city: base explosion at the missile, one
/// life off the first city in range, missile removed.
pub fn enemy_missiles_vs_cities(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    events: &mut Vec<GameEvent>,
) {
    let missiles = positions_of::<EnemyMissile>(world);
    let threshold = CITY_RADIUS + MISSILE_RADIUS_ENEMY;

    for (missile, missile_pos) in missiles {
        let hit = world
            .query::<(&City, &Position)>()
            .iter()
            .find(|(_, (_, city_pos))| missile_pos.range_to(city_pos) < threshold)
            .map(|(city, _)| city);

        if let Some(city) = hit {
            detonate(world, rng, events, missile_pos, ExplosionKind::Base);
            damage_city(world, warnings, events, city);
            cleanup::remove(world, warnings, missile);
        }
    }
}

/// Interceptors that reached their aim point or ran out of time detonate.
pub fn detonate_interceptors(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    events: &mut Vec<GameEvent>,
) {
    let due: Vec<(Entity, Position)> = world
        .query::<(&Interceptor, &Missile, &Position)>()
        .iter()
        .filter(|(_, (_, missile, pos))| {
            pos.range_to(&missile.target) < INTERCEPTOR_ARRIVAL_RANGE || missile.expired()
        })
        .map(|(entity, (_, _, pos))| (entity, *pos))
        .collect();

    for (interceptor, pos) in due {
        detonate(world, rng, events, pos, ExplosionKind::Interceptor);
        cleanup::remove(world, warnings, interceptor);
    }
}

/// An interceptor passing close to an airplane downs it. One interceptor
/// per airplane per tick.
pub fn airplanes_vs_interceptors(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    events: &mut Vec<GameEvent>,
) {
    let airplanes = positions_of::<Airplane>(world);

    for (airplane, airplane_pos) in airplanes {
        let Some(interceptor) = first_interceptor_within(world, airplane_pos, AIRPLANE_HIT_RANGE)
        else {
            continue;
        };
        detonate(world, rng, events, airplane_pos, ExplosionKind::Interceptor);
        cleanup::remove(world, warnings, interceptor);
        cleanup::remove(world, warnings, airplane);
        debug!("airplane {} shot down", entity_id(airplane));
        events.push(GameEvent::AirplaneDown {
            airplane_id: entity_id(airplane),
        });
    }
}

/// An interceptor passing close to a bomb destroys both for one point.
/// One interceptor per bomb per tick.
pub fn bombs_vs_interceptors(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
) {
    let bombs = positions_of::<Bomb>(world);

    for (bomb, bomb_pos) in bombs {
        let Some(interceptor) = first_interceptor_within(world, bomb_pos, BOMB_INTERCEPT_RANGE)
        else {
            continue;
        };
        detonate(world, rng, events, bomb_pos, ExplosionKind::Bomb);
        session.award(1);
        cleanup::remove(world, warnings, interceptor);
        cleanup::remove(world, warnings, bomb);
        events.push(GameEvent::BombIntercepted {
            bomb_id: entity_id(bomb),
        });
    }
}

/// Bombs that reach their target explode and cost every city inside the
/// bomb blast range one life.
pub fn bombs_at_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    events: &mut Vec<GameEvent>,
) {
    let landed: Vec<(Entity, Position)> = world
        .query::<(&Bomb, &Position)>()
        .iter()
        .filter(|(_, (bomb, pos))| pos.range_to(&bomb.target) < BOMB_IMPACT_RANGE)
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (bomb, impact) in landed {
        detonate(world, rng, events, impact, ExplosionKind::Bomb);

        let in_blast: Vec<Entity> = world
            .query::<(&City, &Position)>()
            .iter()
            .filter(|(_, (_, city_pos))| impact.range_to(city_pos) < BOMB_EXPLOSION_RANGE)
            .map(|(city, _)| city)
            .collect();
        for city in in_blast {
            damage_city(world, warnings, events, city);
        }

        cleanup::remove(world, warnings, bomb);
    }
}

/// Take one life from a city, removing it when none are left.
fn damage_city(
    world: &mut World,
    warnings: &mut WarningMap,
    events: &mut Vec<GameEvent>,
    city: Entity,
) {
    let destroyed = match world.get::<&mut City>(city) {
        Ok(mut state) => {
            let destroyed = state.take_hit();
            events.push(GameEvent::CityHit {
                city_id: entity_id(city),
                lives_remaining: state.lives,
            });
            destroyed
        }
        Err(_) => return,
    };

    if destroyed {
        debug!("city {} destroyed", entity_id(city));
        cleanup::remove(world, warnings, city);
        events.push(GameEvent::CityDestroyed {
            city_id: entity_id(city),
        });
    }
}

/// Snapshot of every entity carrying component `T`, with its position.
fn positions_of<T: hecs::Component>(world: &World) -> Vec<(Entity, Position)> {
    world
        .query::<(&T, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect()
}

fn first_interceptor_within(world: &World, point: Position, range: f64) -> Option<Entity> {
    world
        .query::<(&Interceptor, &Position)>()
        .iter()
        .find(|(_, (_, pos))| pos.range_to(&point) < range)
        .map(|(entity, _)| entity)
}
