//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Audio events for the host sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Start playing a playlist entry.
    PlayTrack { index: usize },
    /// Halt all background music.
    StopMusic,
}

/// Gameplay moments the presentation layer may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    LevelStarted { level: u32 },
    LevelComplete { level: u32, h_bomb_awarded: bool },
    LifeLost { lives_remaining: u32 },
    GameOver { score: u32, level: u32 },
    RunReset,
    KamikazeActivated,
    BossHit { health_remaining: i32 },
    BossDefeated { bonus: u32 },
    BossWarning,
    HBombDetonated { charges_remaining: u32 },
    RapidFireGranted { charges: u32 },
    PowerUpSpawned,
    Paused,
    Resumed,
}
