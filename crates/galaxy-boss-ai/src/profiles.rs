//! Milestone-level boss profiles.
//!
//! Consolidates per-level parameters for the boss FSM and spawner.

use galaxy_core::constants::*;
use galaxy_core::enums::BossVariant;

/// Behavioral profile for the boss of one milestone level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossProfile {
    pub variant: BossVariant,
    /// Square display size (px).
    pub size: f64,
    /// Health on level entry.
    pub health: i32,
    /// Score awarded when destroyed.
    pub bonus: u32,
    /// Attack cycle period (ms), None for patrol-only bosses.
    pub attack_period_ms: Option<u64>,
    /// Random retarget period (ms), None when the attack cycle owns movement.
    pub retarget_period_ms: Option<u64>,
}

/// Get the boss profile for a milestone level, `None` on standard levels.
pub fn profile_for_level(level: u32) -> Option<BossProfile> {
    let variant = BossVariant::for_level(level)?;
    let profile = match level {
        10 => BossProfile {
            variant,
            size: 200.0,
            health: 25,
            bonus: 100,
            attack_period_ms: None,
            retarget_period_ms: Some(BOSS_RETARGET_PERIOD_MS),
        },
        20 => BossProfile {
            variant,
            size: 150.0,
            health: 50,
            bonus: 200,
            attack_period_ms: None,
            retarget_period_ms: Some(BOSS_RETARGET_PERIOD_MS),
        },
        // Retargeting would fight the dash; the cycle picks its own target.
        30 => BossProfile {
            variant,
            size: 100.0,
            health: 100,
            bonus: 500,
            attack_period_ms: Some(DASH_PERIOD_MS),
            retarget_period_ms: None,
        },
        _ => BossProfile {
            variant,
            size: 100.0,
            health: 200,
            bonus: 1000,
            attack_period_ms: Some(TELEPORT_PERIOD_MS),
            retarget_period_ms: Some(BOSS_RETARGET_PERIOD_MS),
        },
    };
    Some(profile)
}
