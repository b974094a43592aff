//! Simulation engine for GALAXY WEST.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod combat;
pub mod engine;
pub mod level;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use galaxy_core as core;
pub use engine::SimulationEngine;
