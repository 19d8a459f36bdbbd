//! Input sources for the headless host.
//!
//! The autopilot plays from snapshots alone: it collects power-ups, restarts
//! after game over, and otherwise fires at the enemy missile closest to the
//! ground, leading it slightly along its heading.

use std::collections::HashSet;

use skyshield_core::commands::PlayerCommand;
use skyshield_core::enums::MissileKind;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::Position;

/// Distance ahead of an enemy missile the autopilot aims.
const LEAD_DISTANCE: f64 = 40.0;

/// Something that turns snapshots into player commands.
pub trait InputSource {
    fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand>;
}

/// Simple auto-targeting player.
#[derive(Debug, Default)]
pub struct Autopilot {
    /// Last tick acted on; at most one command per tick.
    last_tick: Option<u64>,
    /// Enemy missiles an interceptor was already fired at.
    engaged: HashSet<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if self.last_tick == Some(snapshot.time.tick) {
            return None;
        }
        self.last_tick = Some(snapshot.time.tick);

        if let Some(power_up) = snapshot.power_ups.first() {
            return Some(tap(power_up.position));
        }

        if snapshot.hud.game_over {
            self.engaged.clear();
            return Some(tap(Position::new(
                snapshot.screen.width / 2.0,
                snapshot.screen.height / 2.0,
            )));
        }

        self.engaged
            .retain(|id| snapshot.missiles.iter().any(|m| m.id == *id));

        if snapshot.hud.fire_cooldown_secs > 0.0 {
            return None;
        }

        let target = snapshot
            .missiles
            .iter()
            .filter(|m| m.kind == MissileKind::Enemy && !self.engaged.contains(&m.id))
            .min_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        self.engaged.insert(target.id);
        let heading = target.position.direction_to(&target.target);
        Some(tap(target.position.advanced(heading, LEAD_DISTANCE)))
    }
}

fn tap(point: Position) -> PlayerCommand {
    PlayerCommand::Tap {
        x: point.x,
        y: point.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyshield_core::enums::{GamePhase, PowerUpKind};
    use skyshield_core::state::{MissileView, PowerUpView, ScreenView, Shape};

    fn enemy(id: u64, x: f64, y: f64) -> MissileView {
        MissileView {
            id,
            kind: MissileKind::Enemy,
            position: Position::new(x, y),
            target: Position::new(x, 50.0),
            shape: Shape::Circle { radius: 10.0 },
        }
    }

    fn snapshot_at(tick: u64) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot {
            screen: ScreenView {
                width: 1000.0,
                height: 2000.0,
            },
            ..Default::default()
        };
        snapshot.time.tick = tick;
        snapshot
    }

    #[test]
    fn test_fires_at_lowest_enemy_with_lead() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_at(1);
        snapshot.missiles = vec![enemy(1, 100.0, 900.0), enemy(2, 400.0, 500.0)];

        let Some(PlayerCommand::Tap { x, y }) = pilot.next_command(&snapshot) else {
            panic!("expected a tap");
        };
        assert_eq!(x, 400.0);
        assert!((y - 460.0).abs() < 1e-9);

        // Next tick picks the other missile.
        snapshot.time.tick = 2;
        let Some(PlayerCommand::Tap { x, .. }) = pilot.next_command(&snapshot) else {
            panic!("expected a tap");
        };
        assert_eq!(x, 100.0);
    }

    #[test]
    fn test_one_command_per_tick() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_at(5);
        snapshot.missiles = vec![enemy(1, 100.0, 900.0), enemy(2, 400.0, 500.0)];

        assert!(pilot.next_command(&snapshot).is_some());
        assert!(pilot.next_command(&snapshot).is_none());
    }

    #[test]
    fn test_holds_fire_during_cooldown() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_at(1);
        snapshot.missiles = vec![enemy(1, 100.0, 900.0)];
        snapshot.hud.fire_cooldown_secs = 0.2;

        assert!(pilot.next_command(&snapshot).is_none());
    }

    #[test]
    fn test_power_up_takes_priority() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_at(1);
        snapshot.missiles = vec![enemy(1, 100.0, 900.0)];
        snapshot.power_ups = vec![PowerUpView {
            id: 9,
            kind: PowerUpKind::Bomb,
            position: Position::new(700.0, 1500.0),
            shape: Shape::Circle { radius: 15.0 },
        }];

        assert!(matches!(
            pilot.next_command(&snapshot),
            Some(PlayerCommand::Tap { x, y }) if x == 700.0 && y == 1500.0
        ));
    }

    #[test]
    fn test_taps_center_after_game_over() {
        let mut pilot = Autopilot::new();
        let mut snapshot = snapshot_at(1);
        snapshot.phase = GamePhase::GameOver;
        snapshot.hud.game_over = true;

        assert!(matches!(
            pilot.next_command(&snapshot),
            Some(PlayerCommand::Tap { x, y }) if x == 500.0 && y == 1000.0
        ));
    }
}
