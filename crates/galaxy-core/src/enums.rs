//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::MILESTONE_LEVELS;

/// What an entity is. Every entity in the world carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    PlayerBullet,
    /// Enemy projectile; power-up shots grant rapid fire instead of hurting.
    AlienBullet { power_up: bool },
    StandardAlien,
    /// A standard alien promoted mid-level: immune, homing, short-lived.
    KamikazeAlien,
    Boss,
}

impl EntityKind {
    /// Projectiles fired by the enemy side.
    pub fn is_enemy_bullet(&self) -> bool {
        matches!(self, EntityKind::AlienBullet { .. })
    }

    /// Any projectile.
    pub fn is_bullet(&self) -> bool {
        matches!(self, EntityKind::PlayerBullet | EntityKind::AlienBullet { .. })
    }

    /// Hostile bodies that hurt the player on contact.
    pub fn is_hostile_body(&self) -> bool {
        matches!(
            self,
            EntityKind::StandardAlien | EntityKind::KamikazeAlien | EntityKind::Boss
        )
    }
}

/// Boss attack pattern, selected by the milestone level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossVariant {
    /// Levels 10 and 20: bounce + random retarget only.
    Patrol,
    /// Level 30: periodic telegraphed dash at the player.
    Dash,
    /// Level 40: periodic fade-out and reappearance beside the player.
    Teleport,
}

impl BossVariant {
    /// Variant for a milestone level, `None` for standard levels.
    pub fn for_level(level: u32) -> Option<Self> {
        match level {
            10 | 20 => Some(BossVariant::Patrol),
            30 => Some(BossVariant::Dash),
            40 => Some(BossVariant::Teleport),
            _ => None,
        }
    }
}

/// Boss attack-cycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Bouncing and drifting toward random targets.
    #[default]
    Patrolling,
    /// Telegraphing the next attack (tinted, possibly fading).
    Warning,
    /// Charging at the player's last known position.
    Dashing,
    /// Relocated beside the player, fading back in.
    Teleporting,
    /// Drifting to a fresh random target after a dash.
    Recovering,
}

/// Top-level run phase. Pause is tracked separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level in progress.
    #[default]
    Playing,
    /// Level cleared; motion frozen until the next level starts.
    LevelComplete,
    /// Run ended; waiting for an acknowledge signal.
    GameOver,
}

/// Whether a level spawns a boss instead of a grid.
pub fn is_milestone_level(level: u32) -> bool {
    MILESTONE_LEVELS.contains(&level)
}
