//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world. Every list is
//! sorted by entity id so identical sessions serialize identically.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::config::SessionConfig;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::events::GameEvent;
use skyshield_core::state::*;
use skyshield_core::types::{Position, SimTime};

use crate::session::SessionState;
use crate::systems::entity_id;
use crate::systems::warnings::WarningMap;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    config: &SessionConfig,
    time: &SimTime,
    phase: GamePhase,
    session: &SessionState,
    warnings: &WarningMap,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let cities = build_cities(world);

    GameStateSnapshot {
        time: *time,
        phase,
        screen: ScreenView {
            width: config.screen_width,
            height: config.screen_height,
        },
        hud: HudView {
            score: session.score,
            level: session.level,
            cities_remaining: cities.len() as u32,
            fire_cooldown_secs: session.fire_cooldown_secs,
            slow_motion_active: session.slow_motion.active,
            slow_motion_remaining_secs: session.slow_motion.remaining_secs,
            game_over: phase == GamePhase::GameOver,
        },
        cities,
        launchers: build_launchers(world),
        missiles: build_missiles(world),
        bombs: build_bombs(world),
        airplanes: build_airplanes(world),
        explosions: build_explosions(world),
        power_ups: build_power_ups(world),
        warnings: build_warnings(warnings),
        events,
    }
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(entity, (city, pos))| CityView {
            id: entity_id(entity),
            position: *pos,
            shape: Shape::Circle {
                radius: CITY_RADIUS,
            },
            lives: city.lives,
        })
        .collect();

    cities.sort_by_key(|c| c.id);
    cities
}

fn build_launchers(world: &World) -> Vec<LauncherView> {
    let mut launchers: Vec<LauncherView> = world
        .query::<(&Launcher, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| LauncherView {
            id: entity_id(entity),
            position: *pos,
            shape: Shape::Circle {
                radius: LAUNCHER_RADIUS,
            },
        })
        .collect();

    launchers.sort_by_key(|l| l.id);
    launchers
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&Missile, &Position, Option<&Interceptor>)>()
        .iter()
        .map(|(entity, (missile, pos, interceptor))| {
            let (kind, radius) = match interceptor {
                Some(_) => (MissileKind::Interceptor, MISSILE_RADIUS_INTERCEPTOR),
                None => (MissileKind::Enemy, MISSILE_RADIUS_ENEMY),
            };
            MissileView {
                id: entity_id(entity),
                kind,
                position: *pos,
                target: missile.target,
                shape: Shape::Circle { radius },
            }
        })
        .collect();

    missiles.sort_by_key(|m| m.id);
    missiles
}

fn build_bombs(world: &World) -> Vec<BombView> {
    let mut bombs: Vec<BombView> = world
        .query::<(&Bomb, &Position)>()
        .iter()
        .map(|(entity, (bomb, pos))| BombView {
            id: entity_id(entity),
            position: *pos,
            target: bomb.target,
            shape: Shape::Circle {
                radius: BOMB_RADIUS,
            },
        })
        .collect();

    bombs.sort_by_key(|b| b.id);
    bombs
}

fn build_airplanes(world: &World) -> Vec<AirplaneView> {
    let mut airplanes: Vec<AirplaneView> = world
        .query::<(&Airplane, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| AirplaneView {
            id: entity_id(entity),
            position: *pos,
            shape: Shape::Box {
                width: AIRPLANE_WIDTH,
                height: AIRPLANE_HEIGHT,
            },
        })
        .collect();

    airplanes.sort_by_key(|a| a.id);
    airplanes
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&Explosion, &Position, Option<&ParticleBurst>)>()
        .iter()
        .map(|(entity, (explosion, center, burst))| ExplosionView {
            id: entity_id(entity),
            kind: explosion.kind,
            center: *center,
            radius: explosion.radius,
            max_radius: explosion.max_radius,
            particles: burst
                .map(|b| {
                    b.particles
                        .iter()
                        .map(|p| ParticleView {
                            position: p.position,
                            radius: p.radius,
                            alpha: p.alpha,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<PowerUpView> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(entity, (power_up, pos))| PowerUpView {
            id: entity_id(entity),
            kind: power_up.kind,
            position: *pos,
            shape: Shape::Circle {
                radius: POWERUP_RADIUS,
            },
        })
        .collect();

    power_ups.sort_by_key(|p| p.id);
    power_ups
}

fn build_warnings(warnings: &WarningMap) -> Vec<WarningView> {
    let mut views: Vec<WarningView> = warnings
        .iter()
        .map(|(missile, indicator)| WarningView {
            missile_id: entity_id(*missile),
            position: indicator.position,
        })
        .collect();

    views.sort_by_key(|w| w.missile_id);
    views
}
