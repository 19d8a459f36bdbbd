//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs ECS world, runs systems once per host tick,
//! and produces GameStateSnapshots for the render collaborator.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyshield_core as core;
pub use systems::input::TapOutcome;
