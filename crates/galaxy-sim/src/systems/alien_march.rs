//! Standard-alien march: shared horizontal sweep, edge step-down, invasion check.

use hecs::World;

use galaxy_core::components::BodySize;
use galaxy_core::constants::{ALIEN_INVASION_MARGIN, ALIEN_STEP_DOWN};
use galaxy_core::enums::EntityKind;
use galaxy_core::types::{Arena, Position, Velocity};

use crate::level::alien_speed;

/// Result of one march step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarchOutcome {
    /// The grid hit a side wall and stepped down.
    pub reversed: bool,
    /// An alien reached the player's row; the run is over.
    pub invaded: bool,
}

/// Drive the standard group for one frame. Call before movement integration.
pub fn run(world: &mut World, arena: &Arena, level: u32, direction: &mut i32) -> MarchOutcome {
    let vx = alien_speed(level) * f64::from(*direction);
    let invasion_line = arena.height - ALIEN_INVASION_MARGIN;

    let mut outcome = MarchOutcome::default();
    for (_entity, (kind, pos, vel, size)) in
        world.query_mut::<(&EntityKind, &Position, &mut Velocity, &BodySize)>()
    {
        if *kind != EntityKind::StandardAlien {
            continue;
        }
        vel.x = vx;

        let half_w = size.width / 2.0;
        if (*direction > 0 && pos.x + half_w >= arena.width) || (*direction < 0 && pos.x - half_w <= 0.0)
        {
            outcome.reversed = true;
        }
        if pos.y >= invasion_line {
            outcome.invaded = true;
        }
    }

    if outcome.reversed {
        *direction = -*direction;
        for (_entity, (kind, pos, vel)) in
            world.query_mut::<(&EntityKind, &mut Position, &mut Velocity)>()
        {
            if *kind == EntityKind::StandardAlien {
                vel.x = 0.0;
                pos.y += ALIEN_STEP_DOWN;
            }
        }
    }

    outcome
}

/// Shift every standard alien vertically so the topmost sits at `top_y`.
/// Formation and horizontal progress are preserved.
pub fn realign_top(world: &mut World, top_y: f64) {
    let min_y = world
        .query::<(&EntityKind, &Position)>()
        .iter()
        .filter(|(_, (kind, _))| **kind == EntityKind::StandardAlien)
        .map(|(_, (_, pos))| pos.y)
        .fold(f64::INFINITY, f64::min);

    if !min_y.is_finite() {
        return;
    }
    let diff = min_y - top_y;
    for (_entity, (kind, pos)) in world.query_mut::<(&EntityKind, &mut Position)>() {
        if *kind == EntityKind::StandardAlien {
            pos.y -= diff;
        }
    }
}
