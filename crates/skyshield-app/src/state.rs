//! Host state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `command_tx` is `None` until the game loop is started
/// - `latest_snapshot` is written by the game loop thread after each tick
pub struct HostState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the game loop. Returns false when no loop is
    /// running or it has already exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    /// Clone of the most recent snapshot, if any tick has run yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_state_creation() {
        let state = HostState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = HostState::new();
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_reaches_receiver() {
        let state = HostState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Player(PlayerCommand::Pause)));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Player(PlayerCommand::Pause))
        ));

        drop(rx);
        assert!(!state.send(GameLoopCommand::Shutdown));
    }
}
