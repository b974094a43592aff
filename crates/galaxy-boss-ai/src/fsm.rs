//! Boss attack-pattern finite state machine.
//!
//! Pure functions that compute phase transitions and motion commands for a
//! boss from its variant, current phase and the trigger that fired.
//! No ECS dependency; operates on plain data. Randomness comes in through
//! the caller's RNG so the simulation stays deterministic per seed.

use rand::Rng;

use galaxy_core::constants::*;
use galaxy_core::enums::{BossPhase, BossVariant};
use galaxy_core::types::{Arena, Position, Velocity};

/// Scheduled events that drive the boss FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossTrigger {
    /// Periodic start of a dash or teleport cycle.
    AttackCycle,
    /// Periodic random patrol retarget.
    Retarget,
    /// Dash: the warning hold is over.
    WarningElapsed,
    /// Dash: the charge is over.
    DashElapsed,
    /// Dash: the recovery drift is over.
    RecoveryElapsed,
    /// Teleport: the boss is fully faded out.
    PulseMidpoint,
    /// Teleport: the boss has faded back in.
    PulseComplete,
}

/// Input to the boss FSM.
pub struct BossContext {
    pub variant: BossVariant,
    pub phase: BossPhase,
    pub position: Position,
    pub size: f64,
    pub player: Position,
    pub arena: Arena,
}

/// What to do with the boss tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintCommand {
    Keep,
    Set(u32),
    Clear,
}

/// Output from the boss FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct BossUpdate {
    pub new_phase: BossPhase,
    pub phase_changed: bool,
    /// New velocity, None to leave it unchanged.
    pub velocity: Option<Velocity>,
    pub tint: TintCommand,
    /// Instantaneous relocation.
    pub teleport_to: Option<Position>,
    /// Start the fade-out/fade-in pulse.
    pub start_fade: bool,
    /// One-shot triggers to schedule, as (delay ms, trigger).
    pub follow_ups: Vec<(u64, BossTrigger)>,
}

impl BossUpdate {
    fn unchanged(phase: BossPhase) -> Self {
        Self {
            new_phase: phase,
            phase_changed: false,
            velocity: None,
            tint: TintCommand::Keep,
            teleport_to: None,
            start_fade: false,
            follow_ups: Vec::new(),
        }
    }

    fn transition(from: BossPhase, to: BossPhase) -> Self {
        Self {
            new_phase: to,
            phase_changed: from != to,
            ..Self::unchanged(from)
        }
    }
}

/// Evaluate the FSM for one boss and one trigger.
pub fn evaluate<R: Rng>(ctx: &BossContext, trigger: BossTrigger, rng: &mut R) -> BossUpdate {
    match ctx.variant {
        BossVariant::Patrol => evaluate_patrol(ctx, trigger, rng),
        BossVariant::Dash => evaluate_dash(ctx, trigger, rng),
        BossVariant::Teleport => evaluate_teleport(ctx, trigger, rng),
    }
}

fn evaluate_patrol<R: Rng>(ctx: &BossContext, trigger: BossTrigger, rng: &mut R) -> BossUpdate {
    match trigger {
        BossTrigger::Retarget => retarget(ctx, rng),
        _ => BossUpdate::unchanged(ctx.phase),
    }
}

fn evaluate_dash<R: Rng>(ctx: &BossContext, trigger: BossTrigger, rng: &mut R) -> BossUpdate {
    match (ctx.phase, trigger) {
        (BossPhase::Patrolling | BossPhase::Recovering, BossTrigger::AttackCycle) => {
            let mut update = BossUpdate::transition(ctx.phase, BossPhase::Warning);
            update.velocity = Some(Velocity::zero());
            update.tint = TintCommand::Set(TINT_DASH_WARNING);
            update.follow_ups = vec![(DASH_WARNING_MS, BossTrigger::WarningElapsed)];
            update
        }
        (BossPhase::Warning, BossTrigger::WarningElapsed) => {
            let mut update = BossUpdate::transition(ctx.phase, BossPhase::Dashing);
            update.velocity = Some(Velocity::toward(&ctx.position, &ctx.player, DASH_SPEED));
            update.tint = TintCommand::Clear;
            update.follow_ups = vec![(DASH_DURATION_MS, BossTrigger::DashElapsed)];
            update
        }
        (BossPhase::Dashing, BossTrigger::DashElapsed) => {
            let mut update = retarget(ctx, rng);
            update.new_phase = BossPhase::Recovering;
            update.phase_changed = true;
            update.follow_ups = vec![(DASH_RECOVERY_MS, BossTrigger::RecoveryElapsed)];
            update
        }
        (BossPhase::Recovering, BossTrigger::RecoveryElapsed) => {
            BossUpdate::transition(ctx.phase, BossPhase::Patrolling)
        }
        _ => BossUpdate::unchanged(ctx.phase),
    }
}

fn evaluate_teleport<R: Rng>(ctx: &BossContext, trigger: BossTrigger, rng: &mut R) -> BossUpdate {
    match (ctx.phase, trigger) {
        // Patrol keeps running through the whole teleport cycle.
        (_, BossTrigger::Retarget) => retarget(ctx, rng),
        (BossPhase::Patrolling, BossTrigger::AttackCycle) => {
            let mut update = BossUpdate::transition(ctx.phase, BossPhase::Warning);
            update.tint = TintCommand::Set(TINT_TELEPORT_WARNING);
            update.start_fade = true;
            update.follow_ups = vec![
                (TELEPORT_FADE_MS, BossTrigger::PulseMidpoint),
                (TELEPORT_FADE_MS * 2, BossTrigger::PulseComplete),
            ];
            update
        }
        (BossPhase::Warning, BossTrigger::PulseMidpoint) => {
            let mut update = BossUpdate::transition(ctx.phase, BossPhase::Teleporting);
            update.teleport_to = Some(teleport_target(ctx, rng));
            update
        }
        (BossPhase::Warning | BossPhase::Teleporting, BossTrigger::PulseComplete) => {
            let mut update = BossUpdate::transition(ctx.phase, BossPhase::Patrolling);
            update.tint = TintCommand::Clear;
            update
        }
        _ => BossUpdate::unchanged(ctx.phase),
    }
}

/// Head for a random in-bounds point at patrol speed.
fn retarget<R: Rng>(ctx: &BossContext, rng: &mut R) -> BossUpdate {
    let target = random_point(ctx, rng);
    let mut update = BossUpdate::unchanged(ctx.phase);
    update.velocity = Some(Velocity::toward(&ctx.position, &target, BOSS_RETARGET_SPEED));
    update
}

/// Uniform point keeping the whole boss body inside the arena.
pub fn random_point<R: Rng>(ctx: &BossContext, rng: &mut R) -> Position {
    let half = ctx.size / 2.0;
    Position::new(
        sample_axis(rng, half, ctx.arena.width - half),
        sample_axis(rng, half, ctx.arena.height - half),
    )
}

fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Beside the player on a random side, never above the player.
fn teleport_target<R: Rng>(ctx: &BossContext, rng: &mut R) -> Position {
    let offset = if rng.gen_bool(0.5) {
        -TELEPORT_OFFSET
    } else {
        TELEPORT_OFFSET
    };
    let x = Arena::clamp_axis(ctx.player.x + offset, ctx.size, ctx.arena.width);
    let y = (ctx.size / 2.0).max(ctx.player.y);
    Position::new(x, y)
}
