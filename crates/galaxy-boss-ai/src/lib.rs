//! Boss AI for GALAXY WEST.
//!
//! Implements the boss attack-pattern state machines and the per-level
//! boss profiles (size, health, bonus, cadences).

pub mod fsm;
pub mod profiles;

pub use galaxy_core as core;
