//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player taps, runs
//! all systems once per host tick, and produces `GameStateSnapshot`s.
//! Completely headless and single-threaded: the host must serialize calls
//! to `tick` and `handle_tap`.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::commands::PlayerCommand;
use skyshield_core::components::City;
use skyshield_core::config::SessionConfig;
use skyshield_core::enums::GamePhase;
use skyshield_core::events::GameEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::{Position, SimTime};

use crate::session::SessionState;
use crate::systems;
use crate::systems::input::TapOutcome;
use crate::systems::spawner::SpawnTimers;
use crate::systems::warnings::WarningMap;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    config: SessionConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    session: SessionState,
    spawn_timers: SpawnTimers,
    warnings: WarningMap,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine with cities and launchers in place, ready to play.
    pub fn new(config: SessionConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_defenses(&mut world, &config);
        info!(
            "session started: {}x{} seed={}",
            config.screen_width, config.screen_height, config.seed
        );

        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            session: SessionState::default(),
            spawn_timers: SpawnTimers::default(),
            warnings: WarningMap::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    /// A negative or non-finite `dt` leaves the world untouched.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring tick with dt={dt}");
        } else if self.phase != GamePhase::Paused {
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.config,
            &self.time,
            self.phase,
            &self.session,
            &self.warnings,
            events,
        )
    }

    /// Advance by one fixed step at the configured tick rate.
    pub fn step(&mut self) -> GameStateSnapshot {
        let dt = self.config.dt();
        self.tick(dt)
    }

    /// Apply a tap immediately.
    pub fn handle_tap(&mut self, x: f64, y: f64) -> TapOutcome {
        let outcome = systems::input::handle_tap(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.session,
            &mut self.events,
            self.phase,
            Position::new(x, y),
        );
        if outcome == TapOutcome::ResetRequested {
            self.reset();
        }
        outcome
    }

    /// Discard every entity and counter and lay out a fresh session.
    /// The RNG stream continues; it is not reseeded.
    pub fn reset(&mut self) {
        self.world.clear();
        self.warnings.clear();
        self.despawn_buffer.clear();
        self.session = SessionState::default();
        self.spawn_timers = SpawnTimers::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        world_setup::setup_defenses(&mut self.world, &self.config);
        self.events.push(GameEvent::SessionReset);
        info!("session reset");
    }

    /// Remove an entity and any warning attached to it. Removing an entity
    /// that is already gone changes nothing. Returns whether it was present.
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        systems::cleanup::remove(&mut self.world, &mut self.warnings, entity)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn warnings(&self) -> &WarningMap {
        &self.warnings
    }

    /// Get a mutable reference to the ECS world (for scripted scenarios).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a mutable reference to the session counters.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Tap { x, y } => {
                self.handle_tap(x, y);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Clocks
        self.time.advance(dt);
        if self.session.tick_timers(dt) {
            self.events.push(GameEvent::SlowMotionEnded);
        }
        // 2. Spawning (real time, unaffected by slow-motion)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timers,
            &mut self.session,
            &mut self.events,
            &self.config,
            self.time.elapsed_secs,
            dt,
        );
        // 3. Enemy missiles: move, strike cities, update warnings
        let enemy_dt = self.session.enemy_dt(dt);
        systems::motion::advance_enemy_missiles(&mut self.world, enemy_dt);
        systems::collision::enemy_missiles_vs_cities(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.events,
        );
        systems::warnings::run(&self.world, &mut self.warnings, &mut self.events);
        // 4. Interceptors: move, detonate on arrival or expiry
        systems::motion::advance_interceptors(&mut self.world, dt);
        systems::collision::detonate_interceptors(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.events,
        );
        // 5. Airplanes vs interceptors
        systems::collision::airplanes_vs_interceptors(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.events,
        );
        // 6. Bombs: move, intercept, impact
        systems::motion::advance_bombs(&mut self.world, dt);
        systems::collision::bombs_vs_interceptors(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.session,
            &mut self.events,
        );
        systems::collision::bombs_at_target(
            &mut self.world,
            &mut self.rng,
            &mut self.warnings,
            &mut self.events,
        );
        // 7. Explosions: grow, blast kills, prune terminal
        systems::motion::advance_particles(&mut self.world, dt);
        systems::explosion::run(
            &mut self.world,
            &mut self.warnings,
            &mut self.session,
            &mut self.events,
            dt,
        );
        // 8. Power-ups and airplanes (with bomb drops), then off-screen pruning
        systems::motion::advance_power_ups(&mut self.world, dt);
        let drops = systems::motion::advance_airplanes(&mut self.world, dt);
        self.drop_bombs(drops);
        systems::cleanup::run(
            &mut self.world,
            &mut self.warnings,
            &mut self.despawn_buffer,
            self.config.screen_width,
        );
        // 9. Terminal condition
        self.check_game_over();

        trace!(
            "tick {} entities={} score={}",
            self.time.tick,
            self.world.len(),
            self.session.score
        );
    }

    /// Release a bomb from each airplane at the city nearest to it.
    fn drop_bombs(&mut self, drops: Vec<(Entity, Position)>) {
        for (_airplane, airplane_pos) in drops {
            let Some((city, city_pos)) = nearest_city(&self.world, airplane_pos) else {
                continue;
            };
            let release = airplane_pos.offset(
                skyshield_core::constants::BOMB_RELEASE_OFFSET.0,
                skyshield_core::constants::BOMB_RELEASE_OFFSET.1,
            );
            let bomb = world_setup::spawn_bomb(&mut self.world, release, city_pos);
            self.events.push(GameEvent::BombDropped {
                bomb_id: systems::entity_id(bomb),
                city_id: systems::entity_id(city),
            });
        }
    }

    fn check_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        let cities_left = self.world.query::<&City>().iter().count();
        if cities_left == 0 {
            self.phase = GamePhase::GameOver;
            info!("game over: score {}", self.session.score);
            self.events.push(GameEvent::GameOver {
                score: self.session.score,
            });
        }
    }
}

/// City closest to `point`; `None` when every city is gone.
fn nearest_city(world: &World, point: Position) -> Option<(Entity, Position)> {
    world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .min_by(|(_, a), (_, b)| a.range_to(&point).total_cmp(&b.range_to(&point)))
}
