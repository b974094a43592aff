//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! Level-wide counters are passed in explicitly; entity state lives in components.

pub mod alien_march;
pub mod boss_ai;
pub mod cleanup;
pub mod enemy_fire;
pub mod kamikaze;
pub mod movement;
pub mod overlap;
pub mod player_control;
pub mod snapshot;
pub mod wave_spawner;
