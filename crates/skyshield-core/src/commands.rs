//! Player commands sent from the host to the simulation.
//!
//! Queued commands are processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Tap/click at a world-space point. Collects a power-up, resets after
    /// game over, or fires an interceptor, in that priority.
    Tap { x: f64, y: f64 },
    /// Freeze the simulation.
    Pause,
    /// Resume from a pause.
    Resume,
}
