//! Warning indicators for enemy missiles closing on a city.

use std::collections::HashMap;

use hecs::{Entity, World};

use skyshield_core::components::{City, EnemyMissile, WarningIndicator};
use skyshield_core::constants::{WARNING_DISTANCE, WARNING_OFFSET};
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::systems::entity_id;

/// Indicator state keyed by the enemy missile it follows.
pub type WarningMap = HashMap<Entity, WarningIndicator>;

/// Raise, move or drop the indicator for every live enemy missile.
pub fn run(world: &World, warnings: &mut WarningMap, events: &mut Vec<GameEvent>) {
    let cities: Vec<Position> = world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();

    let mut missiles = world.query::<(&EnemyMissile, &Position)>();
    for (entity, (_, pos)) in missiles.iter() {
        let needed = cities
            .iter()
            .any(|city| pos.range_to(city) < WARNING_DISTANCE);
        let indicator = WarningIndicator {
            position: pos.offset(WARNING_OFFSET.0, WARNING_OFFSET.1),
        };

        if needed {
            if warnings.insert(entity, indicator).is_none() {
                events.push(GameEvent::MissileWarning {
                    missile_id: entity_id(entity),
                });
            }
        } else {
            warnings.remove(&entity);
        }
    }
}
