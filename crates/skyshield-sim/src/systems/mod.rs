//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). Session counters and the warning map are passed in; all
//! entity state lives in components.

pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod input;
pub mod motion;
pub mod powerup;
pub mod snapshot;
pub mod spawner;
pub mod warnings;

/// Stable numeric id for an entity, used in events and snapshot views.
pub fn entity_id(entity: hecs::Entity) -> u64 {
    entity.to_bits().get()
}
