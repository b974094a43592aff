//! Boss AI system: applies boss FSM updates to the world.
//!
//! Calls the boss FSM from galaxy-boss-ai when one of a boss's timers
//! fires, then updates ECS components and schedules follow-up triggers.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use galaxy_core::components::{BodySize, BossState, Fade, Tint};
use galaxy_core::constants::*;
use galaxy_core::enums::{BossPhase, BossVariant, EntityKind};
use galaxy_core::types::{Arena, Position, Velocity};

use galaxy_boss_ai::fsm::{evaluate, BossContext, BossTrigger, TintCommand};
use galaxy_boss_ai::profiles::BossProfile;

use crate::systems::enemy_fire::player_position;
use crate::timers::{TimerEvent, TimerQueue};
use crate::world_setup;

/// Start the repeating timers that drive a freshly spawned boss.
pub fn schedule_cycles(timers: &mut TimerQueue, boss: Entity, profile: &BossProfile, now_ms: u64) {
    if let Some(period) = profile.attack_period_ms {
        timers.schedule_repeating(
            now_ms,
            period,
            TimerEvent::Boss {
                boss,
                trigger: BossTrigger::AttackCycle,
            },
        );
    }
    if let Some(period) = profile.retarget_period_ms {
        timers.schedule_repeating(
            now_ms,
            period,
            TimerEvent::Boss {
                boss,
                trigger: BossTrigger::Retarget,
            },
        );
    }
}

/// Outcome of feeding a trigger to a boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossStep {
    /// The boss no longer exists; the timer that fired is stale.
    Gone,
    Unchanged,
    Entered(BossPhase),
}

/// Feed one trigger to a boss. A despawned boss is left alone.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut TimerQueue,
    arena: &Arena,
    boss: Entity,
    trigger: BossTrigger,
    now_ms: u64,
) -> BossStep {
    let player = player_position(world).unwrap_or_else(|| world_setup::player_spawn(arena));
    let ctx = {
        let Ok(mut query) = world.query_one::<(&BossState, &Position, &BodySize)>(boss) else {
            return BossStep::Gone;
        };
        let Some((state, pos, size)) = query.get() else {
            return BossStep::Gone;
        };
        BossContext {
            variant: state.variant,
            phase: state.phase,
            position: *pos,
            size: size.width,
            player,
            arena: *arena,
        }
    };

    let update = evaluate(&ctx, trigger, rng);

    if let Some(velocity) = update.velocity {
        if let Ok(mut vel) = world.get::<&mut Velocity>(boss) {
            *vel = velocity;
        }
    }
    if let Some(target) = update.teleport_to {
        if let Ok(mut pos) = world.get::<&mut Position>(boss) {
            *pos = target;
        }
    }
    match update.tint {
        TintCommand::Keep => {}
        TintCommand::Set(color) => {
            let _ = world.insert_one(boss, Tint(color));
        }
        TintCommand::Clear => {
            let _ = world.remove_one::<Tint>(boss);
        }
    }
    if update.start_fade {
        let _ = world.insert_one(
            boss,
            Fade {
                started_ms: now_ms,
                half_ms: TELEPORT_FADE_MS,
                min_alpha: TELEPORT_MIN_ALPHA,
            },
        );
    }
    for (delay, follow_up) in update.follow_ups {
        timers.schedule_once(
            now_ms,
            delay,
            TimerEvent::Boss {
                boss,
                trigger: follow_up,
            },
        );
    }

    if !update.phase_changed {
        trace!(?trigger, "boss trigger without phase change");
        return BossStep::Unchanged;
    }
    if let Ok(mut state) = world.get::<&mut BossState>(boss) {
        state.phase = update.new_phase;
    }
    if update.new_phase == BossPhase::Patrolling {
        let _ = world.remove_one::<Fade>(boss);
    }
    debug!(?trigger, phase = ?update.new_phase, "boss phase change");
    BossStep::Entered(update.new_phase)
}

/// Take one hit: lose health and flash red. Returns the remaining health.
pub fn damage(world: &mut World, timers: &mut TimerQueue, boss: Entity, now_ms: u64) -> Option<i32> {
    let health = {
        let mut state = world.get::<&mut BossState>(boss).ok()?;
        state.health -= 1;
        state.health
    };
    let _ = world.insert_one(boss, Tint(TINT_HIT));
    timers.schedule_once(now_ms, BOSS_HIT_FLASH_MS, TimerEvent::ClearBossFlash { boss });
    Some(health)
}

/// End of a hit flash: restore the warning tint if an attack is being
/// telegraphed, otherwise clear it.
pub fn clear_flash(world: &mut World, boss: Entity) {
    let warning_tint = match world.get::<&BossState>(boss) {
        Ok(state) if matches!(state.phase, BossPhase::Warning | BossPhase::Teleporting) => {
            Some(match state.variant {
                BossVariant::Dash => TINT_DASH_WARNING,
                BossVariant::Teleport | BossVariant::Patrol => TINT_TELEPORT_WARNING,
            })
        }
        Ok(_) => None,
        Err(_) => return,
    };
    match warning_tint {
        Some(color) => {
            let _ = world.insert_one(boss, Tint(color));
        }
        None => {
            let _ = world.remove_one::<Tint>(boss);
        }
    }
}

/// After a life loss: back to the spawn point, heading in a random
/// direction. Health is untouched.
pub fn reposition(world: &mut World, rng: &mut ChaCha8Rng, arena: &Arena) {
    let bosses: Vec<Entity> = world
        .query::<&EntityKind>()
        .iter()
        .filter(|(_, kind)| **kind == EntityKind::Boss)
        .map(|(entity, _)| entity)
        .collect();
    debug_assert!(bosses.len() <= 1, "boss levels hold at most one boss");

    let Some(&boss) = bosses.first() else {
        return;
    };
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    if let Ok(mut pos) = world.get::<&mut Position>(boss) {
        *pos = world_setup::boss_spawn(arena);
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(boss) {
        *vel = Velocity::from_angle(angle, BOSS_RESPAWN_SPEED);
    }
}

/// Current alpha of a fading entity.
pub fn fade_alpha(fade: &Fade, now_ms: u64) -> f64 {
    let t = now_ms.saturating_sub(fade.started_ms) as f64;
    let half = fade.half_ms.max(1) as f64;
    let depth = 1.0 - fade.min_alpha;
    if t < half {
        1.0 - depth * t / half
    } else if t < half * 2.0 {
        fade.min_alpha + depth * (t - half) / half
    } else {
        1.0
    }
}
