//! Simulation constants and tuning parameters.

/// Default host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Frame rate the per-frame missile speeds are expressed against.
/// Missile displacement per tick is `speed * REFERENCE_FRAME_RATE * dt`.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Distance floor used when a direction is requested between coincident points.
pub const MIN_DIRECTION_DISTANCE: f64 = 0.001;

/// Countdown remainders at or below this are treated as elapsed, so that
/// summing `1/60` sixty times reliably completes a one-second timer.
pub const TIMER_EPSILON: f64 = 1e-9;

// --- Screen defaults ---

/// Default playfield width (world units).
pub const DEFAULT_SCREEN_WIDTH: f64 = 1080.0;

/// Default playfield height (world units).
pub const DEFAULT_SCREEN_HEIGHT: f64 = 2200.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Layout ---

/// Horizontal placement of the three cities as fractions of screen width.
pub const CITY_LAYOUT_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// City ground line.
pub const CITY_Y: f64 = 50.0;

/// Launcher horizontal offsets from their paired city.
pub const LAUNCHER_X_OFFSETS: [f64; 3] = [-40.0, 0.0, 40.0];

/// Launcher ground line.
pub const LAUNCHER_Y: f64 = 80.0;

// --- Radii ---

pub const CITY_RADIUS: f64 = 25.0;
pub const LAUNCHER_RADIUS: f64 = 20.0;
pub const MISSILE_RADIUS_ENEMY: f64 = 10.0;
pub const MISSILE_RADIUS_INTERCEPTOR: f64 = 4.5;
pub const BOMB_RADIUS: f64 = 10.0;
pub const POWERUP_RADIUS: f64 = 15.0;
pub const AIRPLANE_WIDTH: f64 = 50.0;
pub const AIRPLANE_HEIGHT: f64 = 20.0;

// --- Cities ---

pub const CITY_STARTING_LIVES: u32 = 3;

// --- Explosions ---

/// Radius every explosion starts at.
pub const EXPLOSION_INITIAL_RADIUS: f64 = 2.0;

/// Blast growth rate (units/second).
pub const EXPLOSION_GROWTH_RATE: f64 = 60.0;

/// Cap for explosions caused by an enemy missile reaching a city.
pub const BASE_EXPLOSION_RANGE: f64 = 40.0;

/// Cap for interceptor detonations and power-up bomb blasts.
pub const INTERCEPTOR_EXPLOSION_RANGE: f64 = 60.0;

/// Cap for bomb detonations. Also the city damage radius of a bomb impact.
pub const BOMB_EXPLOSION_RANGE: f64 = 80.0;

/// Particles emitted per explosion.
pub const PARTICLES_PER_EXPLOSION: usize = 20;

// --- Missiles ---

/// Enemy speed at level 0 (units per reference frame).
pub const INITIAL_ENEMY_SPEED: f64 = 2.0;

/// Enemy speed added per level (units per reference frame).
pub const ENEMY_SPEED_PER_LEVEL: f64 = 0.5;

/// Interceptor speed (units per reference frame).
pub const INTERCEPTOR_SPEED: f64 = 6.0;

/// Seconds an interceptor flies before self-detonating.
pub const INTERCEPTOR_LIFETIME: f64 = 6.0;

/// Distance to its aim point at which an interceptor detonates.
pub const INTERCEPTOR_ARRIVAL_RANGE: f64 = 10.0;

/// Delay between interceptor launches (seconds).
pub const FIRE_COOLDOWN_TIME: f64 = 0.5;

/// Enemy missiles closer than this to any city raise a warning.
pub const WARNING_DISTANCE: f64 = 80.0;

/// Warning indicator offset from the missile it marks.
pub const WARNING_OFFSET: (f64, f64) = (15.0, 15.0);

// --- Airplanes and bombs ---

pub const AIRPLANE_SPEED: f64 = 200.0;

/// Airplane entry x (just off the left edge).
pub const AIRPLANE_ENTRY_X: f64 = -50.0;

/// Airplane altitude, measured down from the top edge.
pub const AIRPLANE_ALTITUDE_FROM_TOP: f64 = 250.0;

/// Margin past the right edge before an airplane is removed.
pub const AIRPLANE_EXIT_MARGIN: f64 = 50.0;

/// Seconds between bomb drops.
pub const BOMB_DROP_INTERVAL: f64 = 3.0;

/// Bomb release point relative to the airplane.
pub const BOMB_RELEASE_OFFSET: (f64, f64) = (25.0, 0.0);

/// Bomb speed (units/second).
pub const BOMB_SPEED: f64 = 150.0;

/// Interceptor proximity that destroys an airplane.
pub const AIRPLANE_HIT_RANGE: f64 = 30.0;

/// Interceptor proximity that destroys a bomb.
pub const BOMB_INTERCEPT_RANGE: f64 = 15.0;

/// Distance to its target city at which a bomb impacts.
pub const BOMB_IMPACT_RANGE: f64 = 20.0;

// --- Power-ups ---

/// Descent speed (units/second).
pub const POWERUP_SPEED: f64 = 50.0;

/// Tap distance that collects a power-up.
pub const POWERUP_TAP_RANGE: f64 = 30.0;

/// Power-up spawn inset from the top and side edges.
pub const POWERUP_EDGE_INSET: f64 = 30.0;

/// Slow-motion duration (seconds).
pub const SLOW_MOTION_DURATION: f64 = 5.0;

/// Time factor applied to enemy missiles while slow-motion is active.
pub const SLOW_MOTION_FACTOR: f64 = 0.5;

// --- Spawning ---

/// Seconds between enemy missiles.
pub const ENEMY_SPAWN_INTERVAL: f64 = 2.0;

/// Enemy spawn inset from the side edges.
pub const ENEMY_EDGE_INSET: f64 = 50.0;

/// Seconds between airplanes.
pub const AIRPLANE_SPAWN_INTERVAL: f64 = 20.0;

/// Seconds between power-ups.
pub const POWERUP_SPAWN_INTERVAL: f64 = 15.0;

/// Seconds of play per difficulty level.
pub const LEVEL_INTERVAL: f64 = 30.0;
