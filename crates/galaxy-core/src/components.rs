//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{BossPhase, BossVariant};

/// Display size of an entity; overlap tests use it as an axis-aligned box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySize {
    pub width: f64,
    pub height: f64,
}

/// Boss-only state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    pub variant: BossVariant,
    /// Remaining hits. Set once per level entry, never on a retry.
    pub health: i32,
    pub phase: BossPhase,
}

/// Color multiplied into the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint(pub u32);

/// Yoyo alpha pulse: fades to `min_alpha` over `half_ms`, then back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fade {
    pub started_ms: u64,
    pub half_ms: u64,
    pub min_alpha: f64,
}

/// Bodies that bounce elastically off the arena walls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounded;
