//! SKYSHIELD headless host.
//!
//! Runs the simulation engine on its own thread, forwards player commands
//! to it, and publishes the latest snapshot for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use skyshield_core as core;
