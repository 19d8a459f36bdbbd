//! Entity spawn factories for setting up the simulation world.
//!
//! Creates cities, launchers, missiles, explosions, power-ups, airplanes and
//! bombs with appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::components::*;
use skyshield_core::config::SessionConfig;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::types::{Direction, Position};

/// Set up the initial session world: three cities and three launchers.
pub fn setup_defenses(world: &mut World, config: &SessionConfig) {
    for position in launcher_positions(config.screen_width) {
        spawn_launcher(world, position);
    }
    for position in city_positions(config.screen_width) {
        spawn_city(world, position);
    }
}

/// City layout along the bottom edge.
pub fn city_positions(screen_width: f64) -> [Position; 3] {
    CITY_LAYOUT_FRACTIONS.map(|fraction| Position::new(screen_width * fraction, CITY_Y))
}

/// Launcher layout: one beside each city, the outer pair pushed outward.
pub fn launcher_positions(screen_width: f64) -> [Position; 3] {
    let mut positions = [Position::default(); 3];
    for (i, position) in positions.iter_mut().enumerate() {
        let x = screen_width * CITY_LAYOUT_FRACTIONS[i] + LAUNCHER_X_OFFSETS[i];
        *position = Position::new(x, LAUNCHER_Y);
    }
    positions
}

pub fn spawn_city(world: &mut World, position: Position) -> Entity {
    world.spawn((City::new(), position))
}

pub fn spawn_launcher(world: &mut World, position: Position) -> Entity {
    world.spawn((Launcher, position))
}

/// Spawn an enemy missile at `start` heading for `target` in a straight line.
pub fn spawn_enemy_missile(
    world: &mut World,
    start: Position,
    target: Position,
    speed: f64,
) -> Entity {
    world.spawn((EnemyMissile, Missile::enemy(start, target, speed), start))
}

/// Spawn an interceptor at a launcher, aimed at the tapped point.
pub fn spawn_interceptor(world: &mut World, launcher: Position, target: Position) -> Entity {
    world.spawn((Interceptor, Missile::interceptor(launcher, target), launcher))
}

/// Spawn an explosion with its particle burst.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Position,
    kind: ExplosionKind,
) -> Entity {
    let burst = ParticleBurst {
        particles: (0..PARTICLES_PER_EXPLOSION)
            .map(|_| random_particle(rng, center))
            .collect(),
    };
    world.spawn((Explosion::new(kind), burst, center))
}

fn random_particle(rng: &mut ChaCha8Rng, center: Position) -> Particle {
    Particle {
        position: center,
        drift: Direction::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)),
        radius: rng.gen_range(2.0..=4.0),
        speed: rng.gen_range(30.0..=60.0),
        life_secs: rng.gen_range(0.5..=1.0),
        alpha: 1.0,
    }
}

pub fn spawn_power_up(world: &mut World, position: Position, kind: PowerUpKind) -> Entity {
    world.spawn((PowerUp { kind }, position))
}

/// Spawn an airplane at the left edge entry point.
pub fn spawn_airplane(world: &mut World, config: &SessionConfig) -> Entity {
    let position = Position::new(
        AIRPLANE_ENTRY_X,
        config.screen_height - AIRPLANE_ALTITUDE_FROM_TOP,
    );
    world.spawn((Airplane::new(), position))
}

pub fn spawn_bomb(world: &mut World, position: Position, target: Position) -> Entity {
    world.spawn((Bomb::new(target), position))
}

/// Uniform integer x in `[inset, width - inset]`; the screen center when
/// the screen is too narrow for the inset.
pub fn random_edge_x(rng: &mut ChaCha8Rng, screen_width: f64, inset: f64) -> f64 {
    let low = inset.ceil() as i64;
    let high = (screen_width - inset).floor() as i64;
    if high < low {
        return screen_width / 2.0;
    }
    rng.gen_range(low..=high) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_layout_matches_screen_fractions() {
        let cities = city_positions(1000.0);
        assert_eq!(cities[0], Position::new(250.0, CITY_Y));
        assert_eq!(cities[1], Position::new(500.0, CITY_Y));
        assert_eq!(cities[2], Position::new(750.0, CITY_Y));

        let launchers = launcher_positions(1000.0);
        assert_eq!(launchers[0], Position::new(210.0, LAUNCHER_Y));
        assert_eq!(launchers[1], Position::new(500.0, LAUNCHER_Y));
        assert_eq!(launchers[2], Position::new(790.0, LAUNCHER_Y));
    }

    #[test]
    fn test_random_edge_x_stays_inside_inset() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let x = random_edge_x(&mut rng, 400.0, 50.0);
            assert!((50.0..=350.0).contains(&x));
        }
        assert_eq!(random_edge_x(&mut rng, 60.0, 50.0), 30.0);
    }

    #[test]
    fn test_explosion_has_particles() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let e = spawn_explosion(
            &mut world,
            &mut rng,
            Position::new(10.0, 10.0),
            ExplosionKind::Interceptor,
        );
        let burst = world.get::<&ParticleBurst>(e).unwrap();
        assert_eq!(burst.particles.len(), PARTICLES_PER_EXPLOSION);
        for p in &burst.particles {
            assert!((2.0..=4.0).contains(&p.radius));
            assert!((0.5..=1.0).contains(&p.life_secs));
        }
    }
}
