//! Kinematic integration systems.
//!
//! Missiles fly straight along the heading fixed at launch. Bombs re-aim at
//! their target every tick. Airplanes only move along +x and power-ups only
//! fall along -y.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::constants::{BOMB_DROP_INTERVAL, POWERUP_SPEED, TIMER_EPSILON};
use skyshield_core::types::{Direction, Position};

/// Advance enemy missiles. `dt` is the slow-motion adjusted step.
pub fn advance_enemy_missiles(world: &mut World, dt: f64) {
    for (_entity, (pos, missile, _enemy)) in
        world.query_mut::<(&mut Position, &Missile, &EnemyMissile)>()
    {
        *pos = pos.advanced(missile.direction, missile.step_distance(dt));
    }
}

/// Advance interceptors and count down their self-destruct timers.
pub fn advance_interceptors(world: &mut World, dt: f64) {
    for (_entity, (pos, missile, _interceptor)) in
        world.query_mut::<(&mut Position, &mut Missile, &Interceptor)>()
    {
        *pos = pos.advanced(missile.direction, missile.step_distance(dt));
        if let Some(remaining) = missile.lifetime_secs.as_mut() {
            *remaining -= dt;
        }
    }
}

/// Advance bombs toward their target city position.
pub fn advance_bombs(world: &mut World, dt: f64) {
    for (_entity, (pos, bomb)) in world.query_mut::<(&mut Position, &Bomb)>() {
        let heading = pos.direction_to(&bomb.target);
        *pos = pos.advanced(heading, bomb.speed * dt);
    }
}

/// Drop power-ups toward the bottom edge.
pub fn advance_power_ups(world: &mut World, dt: f64) {
    for (_entity, (pos, _power_up)) in world.query_mut::<(&mut Position, &PowerUp)>() {
        *pos = pos.advanced(Direction::DOWN, POWERUP_SPEED * dt);
    }
}

/// Fly airplanes and run their bomb countdown.
/// Returns the airplanes due to release a bomb this tick, with their position.
/// Their countdown has already been reset.
pub fn advance_airplanes(world: &mut World, dt: f64) -> Vec<(Entity, Position)> {
    let mut drops = Vec::new();
    for (entity, (pos, airplane)) in world.query_mut::<(&mut Position, &mut Airplane)>() {
        *pos = pos.advanced(Direction::RIGHT, airplane.speed * dt);
        airplane.bomb_timer_secs -= dt;
        if airplane.bomb_timer_secs <= TIMER_EPSILON {
            airplane.bomb_timer_secs = BOMB_DROP_INTERVAL;
            drops.push((entity, *pos));
        }
    }
    drops
}

/// Advance explosion particles.
pub fn advance_particles(world: &mut World, dt: f64) {
    for (_entity, burst) in world.query_mut::<&mut ParticleBurst>() {
        for particle in &mut burst.particles {
            particle.update(dt);
        }
    }
}
