//! Run state and the per-tick snapshot sent to the host.

use serde::{Deserialize, Serialize};

use crate::constants::STARTING_LIVES;
use crate::enums::{BossPhase, EntityKind, GamePhase};
use crate::events::{AudioEvent, GameEvent};
use crate::types::{Position, SimTime};

/// Everything that survives a level transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub level: u32,
    pub lives: u32,
    pub score: u32,
    /// Cumulative enemy shots fired across the run; schedules power-ups.
    pub alien_shot_count: u32,
    /// Remaining auto-fire charges.
    pub rapid_fire_shots: u32,
    /// Stock of single-use level-clear charges.
    pub h_bomb_count: u32,
    /// Playlist cursor, owned by the audio collaborator.
    pub current_track_index: usize,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            level: 1,
            lives: STARTING_LIVES,
            score: 0,
            alien_shot_count: 0,
            rapid_fire_shots: 0,
            h_bomb_count: 0,
            current_track_index: 0,
        }
    }
}

/// Complete visible state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub run: RunState,
    pub indicators: Indicators,
    pub entities: Vec<EntityView>,
    pub boss: Option<BossView>,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// On-screen indicator flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Indicators {
    /// A power-up bullet is in flight ("catch it").
    pub catch_power_up: bool,
    /// Rapid fire is active.
    pub rapid_fire: bool,
}

/// One entity as the renderer needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub kind: EntityKind,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub tint: Option<u32>,
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub health: i32,
    pub phase: BossPhase,
}
