//! Tap handling: collect a power-up, request a reset, or fire an interceptor.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::Launcher;
use skyshield_core::enums::{GamePhase, PowerUpKind};
use skyshield_core::events::GameEvent;
use skyshield_core::types::Position;

use crate::session::SessionState;
use crate::systems::warnings::WarningMap;
use crate::systems::{entity_id, powerup};
use crate::world_setup;

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A power-up under the tap was consumed.
    PowerUpActivated(PowerUpKind),
    /// The session is over; the caller must reset it.
    ResetRequested,
    /// An interceptor left the given launcher.
    InterceptorLaunched { launcher: Entity, interceptor: Entity },
    /// Fire cooldown still running.
    CoolingDown,
    /// Nothing to fire from.
    NoLauncher,
    /// The session is paused.
    Paused,
}

/// Resolve a tap at `point` against the current world.
pub fn handle_tap(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    warnings: &mut WarningMap,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    phase: GamePhase,
    point: Position,
) -> TapOutcome {
    if phase == GamePhase::Paused {
        return TapOutcome::Paused;
    }

    if let Some((power_up, kind)) = powerup::find_at(world, point) {
        powerup::activate(world, rng, warnings, session, events, power_up, kind);
        return TapOutcome::PowerUpActivated(kind);
    }

    if phase == GamePhase::GameOver {
        return TapOutcome::ResetRequested;
    }

    if !session.can_fire() {
        return TapOutcome::CoolingDown;
    }

    let Some((launcher, launcher_pos)) = nearest_launcher(world, point) else {
        return TapOutcome::NoLauncher;
    };

    let interceptor = world_setup::spawn_interceptor(world, launcher_pos, point);
    session.start_cooldown();
    events.push(GameEvent::InterceptorLaunched {
        launcher_id: entity_id(launcher),
        x: point.x,
        y: point.y,
    });
    TapOutcome::InterceptorLaunched {
        launcher,
        interceptor,
    }
}

/// Launcher closest to `point`; `None` when there are no launchers.
pub fn nearest_launcher(world: &World, point: Position) -> Option<(Entity, Position)> {
    world
        .query::<(&Launcher, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .min_by(|(_, a), (_, b)| a.range_to(&point).total_cmp(&b.range_to(&point)))
}
