//! Enemy fire: the periodic volley and kamikaze bursts.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use galaxy_core::constants::*;
use galaxy_core::enums::EntityKind;
use galaxy_core::types::{Position, Velocity};

use crate::level::is_power_up_shot;
use crate::world_setup;

/// What a volley tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volley {
    /// No shooter alive; nothing counted.
    Skipped,
    Fired { power_up: bool },
}

/// Position of the player, if one exists.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&EntityKind, &Position)>()
        .iter()
        .find(|(_, (kind, _))| **kind == EntityKind::Player)
        .map(|(_, (_, pos))| *pos)
}

/// Entities allowed to take part in the volley: the standard group, or
/// the boss when no standard aliens exist.
fn shooters(world: &World) -> Vec<Position> {
    let mut standard = Vec::new();
    let mut bosses = Vec::new();
    for (_, (kind, pos)) in world.query::<(&EntityKind, &Position)>().iter() {
        match kind {
            EntityKind::StandardAlien => standard.push(*pos),
            EntityKind::Boss => bosses.push(*pos),
            _ => {}
        }
    }
    if standard.is_empty() {
        bosses
    } else {
        standard
    }
}

/// One tick of the enemy shot cadence.
pub fn volley(world: &mut World, rng: &mut ChaCha8Rng, alien_shot_count: &mut u32) -> Volley {
    let candidates = shooters(world);
    let Some(target) = player_position(world) else {
        return Volley::Skipped;
    };
    // Checked before counting or sampling.
    let Some(&origin) = candidates.choose(rng) else {
        return Volley::Skipped;
    };

    *alien_shot_count += 1;
    let power_up = is_power_up_shot(*alien_shot_count);
    let (size, tint) = if power_up {
        (POWER_UP_BULLET_SIZE, TINT_POWER_UP)
    } else {
        (ALIEN_BULLET_SIZE, TINT_PLAIN_SHOT)
    };
    world_setup::spawn_enemy_bullet(
        world,
        origin,
        &target,
        ALIEN_BULLET_SPEED,
        power_up,
        size,
        tint,
    );
    if power_up {
        debug!(shot = *alien_shot_count, "power-up bullet released");
    }
    Volley::Fired { power_up }
}

/// Kamikaze burst: one gold shot at the player, then re-home on the player.
/// Returns false if the kamikaze no longer exists.
pub fn kamikaze_burst(world: &mut World, alien: Entity) -> bool {
    let Ok(origin) = world.get::<&Position>(alien).map(|p| *p) else {
        return false;
    };
    let Some(target) = player_position(world) else {
        return true;
    };

    world_setup::spawn_enemy_bullet(
        world,
        origin,
        &target,
        KAMIKAZE_BULLET_SPEED,
        false,
        KAMIKAZE_BULLET_SIZE,
        TINT_KAMIKAZE,
    );
    if let Ok(mut vel) = world.get::<&mut Velocity>(alien) {
        *vel = Velocity::toward(&origin, &target, KAMIKAZE_HOMING_SPEED);
    }
    true
}
