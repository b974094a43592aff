//! Player control system: held-key movement and firing.

use hecs::{Entity, World};

use galaxy_core::commands::Controls;
use galaxy_core::constants::*;
use galaxy_core::types::{Arena, Position};

use crate::world_setup;

/// Per-frame input to the player control system.
pub struct PlayerInput<'a> {
    pub player: Entity,
    pub controls: Controls,
    /// Vertical movement is only unlocked on boss levels.
    pub milestone: bool,
    pub now_ms: u64,
    pub next_fire_ms: &'a mut u64,
    pub rapid_fire_shots: &'a mut u32,
}

/// Move the player and fire if allowed. Returns true when a bullet spawned.
pub fn run(world: &mut World, arena: &Arena, input: PlayerInput<'_>) -> bool {
    let position = {
        let Ok(mut pos) = world.get::<&mut Position>(input.player) else {
            return false;
        };
        let controls = input.controls;
        if controls.left {
            pos.x -= PLAYER_STEP;
        } else if controls.right {
            pos.x += PLAYER_STEP;
        }
        if input.milestone {
            if controls.up {
                pos.y -= PLAYER_STEP;
            } else if controls.down {
                pos.y += PLAYER_STEP;
            }
        }

        pos.x = pos.x.clamp(PLAYER_CLAMP_MARGIN, arena.width - PLAYER_CLAMP_MARGIN);
        if input.milestone {
            pos.y = pos.y.clamp(PLAYER_CLAMP_MARGIN, arena.height - PLAYER_CLAMP_MARGIN);
        }
        *pos
    };

    let rapid = *input.rapid_fire_shots > 0;
    if !(input.controls.fire || rapid) || input.now_ms <= *input.next_fire_ms {
        return false;
    }

    world_setup::spawn_player_bullet(world, &position);
    if rapid {
        *input.rapid_fire_shots -= 1;
    }
    let cooldown = if rapid {
        RAPID_FIRE_COOLDOWN_MS
    } else {
        FIRE_COOLDOWN_MS
    };
    *input.next_fire_ms = input.now_ms + cooldown;
    true
}
