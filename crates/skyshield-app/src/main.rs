//! Headless demo: plays a session with the autopilot and prints the final HUD.
//!
//! Usage: `skyshield [config.json] [seconds]`

use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{error, info};

use skyshield_app::autopilot::{Autopilot, InputSource};
use skyshield_app::game_loop;
use skyshield_app::state::{GameLoopCommand, HostState};
use skyshield_core::config::SessionConfig;

const DEFAULT_RUN_SECS: f64 = 30.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SessionConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SessionConfig::default(),
    };
    let run_secs = match args.next().map(|s| s.parse::<f64>()) {
        Some(Ok(secs)) if secs.is_finite() && secs > 0.0 => secs,
        Some(_) => {
            error!("run length must be a positive number of seconds");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_RUN_SECS,
    };

    let host = HostState::new();
    let (tx, handle) = match game_loop::spawn_game_loop(config.clone(), host.latest_snapshot.clone())
    {
        Ok(spawned) => spawned,
        Err(e) => {
            error!("failed to start game loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Ok(mut lock) = host.command_tx.lock() {
        *lock = Some(tx);
    }
    info!("running autopilot for {run_secs}s");

    let mut pilot = Autopilot::new();
    let poll = game_loop::tick_duration(&config);
    let deadline = Instant::now() + Duration::from_secs_f64(run_secs);
    while Instant::now() < deadline {
        if let Some(snapshot) = host.snapshot() {
            if let Some(command) = pilot.next_command(&snapshot) {
                host.send(GameLoopCommand::Player(command));
            }
        }
        std::thread::sleep(poll);
    }

    host.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        error!("game loop panicked");
        return ExitCode::FAILURE;
    }

    let Some(snapshot) = host.snapshot() else {
        error!("no snapshot produced");
        return ExitCode::FAILURE;
    };
    match serde_json::to_string_pretty(&snapshot.hud) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to encode HUD: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
