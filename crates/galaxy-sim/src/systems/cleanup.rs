//! Cleanup system: removes bullets that left the arena.

use hecs::{Entity, World};

use galaxy_core::components::BodySize;
use galaxy_core::enums::EntityKind;
use galaxy_core::types::{Arena, Position};

/// Result of a cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupOutcome {
    pub removed: usize,
    /// A power-up bullet left the arena uncaught.
    pub power_up_missed: bool,
}

/// Despawn player bullets above the arena and enemy bullets past any of
/// its edges. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, arena: &Arena, despawn_buffer: &mut Vec<Entity>) -> CleanupOutcome {
    despawn_buffer.clear();
    let mut outcome = CleanupOutcome::default();

    for (entity, (kind, pos, size)) in world.query_mut::<(&EntityKind, &Position, &BodySize)>() {
        let (half_w, half_h) = (size.width / 2.0, size.height / 2.0);
        let gone = match kind {
            EntityKind::PlayerBullet => pos.y + half_h < 0.0,
            EntityKind::AlienBullet { power_up } => {
                let out = pos.y - half_h > arena.height
                    || pos.y + half_h < 0.0
                    || pos.x + half_w < 0.0
                    || pos.x - half_w > arena.width;
                if out && *power_up {
                    outcome.power_up_missed = true;
                }
                out
            }
            _ => false,
        };
        if gone {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            outcome.removed += 1;
        }
    }
    outcome
}

/// Despawn every entity whose kind matches `filter`. Returns the count.
pub fn despawn_where(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    filter: impl Fn(&EntityKind) -> bool,
) -> usize {
    despawn_buffer.clear();
    for (entity, kind) in world.query_mut::<&EntityKind>() {
        if filter(kind) {
            despawn_buffer.push(entity);
        }
    }
    let mut removed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            removed += 1;
        }
    }
    removed
}
