//! Cleanup system: removes entities from the world together with any
//! warning that references them.

use hecs::{Entity, World};

use skyshield_core::components::{Airplane, PowerUp};
use skyshield_core::constants::AIRPLANE_EXIT_MARGIN;
use skyshield_core::types::Position;

use crate::systems::warnings::WarningMap;

/// Remove one entity. Removing an entity that is already gone is a no-op.
/// Returns whether the entity was present.
pub fn remove(world: &mut World, warnings: &mut WarningMap, entity: Entity) -> bool {
    warnings.remove(&entity);
    world.despawn(entity).is_ok()
}

/// Remove every entity in the buffer, leaving it empty.
pub fn despawn_all(world: &mut World, warnings: &mut WarningMap, buffer: &mut Vec<Entity>) {
    for entity in buffer.drain(..) {
        remove(world, warnings, entity);
    }
}

/// Remove power-ups that fell below the bottom edge and airplanes past the
/// right edge. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    warnings: &mut WarningMap,
    despawn_buffer: &mut Vec<Entity>,
    screen_width: f64,
) {
    despawn_buffer.clear();

    for (entity, (pos, _power_up)) in world.query_mut::<(&Position, &PowerUp)>() {
        if pos.y < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    let exit_x = screen_width + AIRPLANE_EXIT_MARGIN;
    for (entity, (pos, _airplane)) in world.query_mut::<(&Position, &Airplane)>() {
        if pos.x > exit_x {
            despawn_buffer.push(entity);
        }
    }

    despawn_all(world, warnings, despawn_buffer);
}
