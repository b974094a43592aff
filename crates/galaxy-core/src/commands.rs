//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Held-state of the movement and fire controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// All inputs the host can deliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held-control state (key-down/key-up edges folded in by the host).
    SetControls { controls: Controls },
    /// Pause or resume. Ignored during game-over.
    TogglePause,
    /// Detonate an h-bomb if one is available.
    UseHBomb,
    /// The confirm tap/click that restarts the run after game-over.
    Acknowledge,
    /// The audio collaborator finished playing the current track.
    TrackFinished,
}
