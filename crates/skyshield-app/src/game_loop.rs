//! Game loop thread. Runs the simulation engine at the configured tick rate
//! and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. The latest snapshot is
//! stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use skyshield_core::config::SessionConfig;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SessionConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyshield-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Nominal duration of one tick at the configured rate.
pub fn tick_duration(config: &SessionConfig) -> Duration {
    Duration::from_secs_f64(config.dt())
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SessionConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick = tick_duration(&config);
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            info!("game loop stopped at tick {}", engine.time().tick);
            return;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.step();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind, skip ahead instead of catching up
            debug!("game loop behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

/// Queue every pending command on the engine. Returns false once the loop
/// should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
