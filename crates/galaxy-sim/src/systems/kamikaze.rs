//! Kamikaze conversion: promote one standard alien to an immune, homing,
//! self-destructing attacker.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use galaxy_core::components::Tint;
use galaxy_core::constants::*;
use galaxy_core::enums::EntityKind;

use crate::timers::{TimerEvent, TimerQueue};

/// Convert a random standard alien. Returns the promoted entity, or None
/// if the standard group is empty.
pub fn activate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut TimerQueue,
    now_ms: u64,
) -> Option<Entity> {
    let candidates: Vec<Entity> = world
        .query::<&EntityKind>()
        .iter()
        .filter(|(_, kind)| **kind == EntityKind::StandardAlien)
        .map(|(entity, _)| entity)
        .collect();
    let alien = *candidates.choose(rng)?;

    world
        .insert(alien, (EntityKind::KamikazeAlien, Tint(TINT_KAMIKAZE)))
        .ok()?;

    let shoot_timer = timers.schedule_repeating(
        now_ms,
        KAMIKAZE_SHOT_PERIOD_MS,
        TimerEvent::KamikazeShoot { alien },
    );
    timers.schedule_once(
        now_ms,
        KAMIKAZE_LIFETIME_MS,
        TimerEvent::KamikazeExpire { alien, shoot_timer },
    );
    debug!(?alien, "kamikaze activated");
    Some(alien)
}

/// Number of live aliens of either group.
pub fn aliens_remaining(world: &World) -> usize {
    world
        .query::<&EntityKind>()
        .iter()
        .filter(|(_, kind)| matches!(kind, EntityKind::StandardAlien | EntityKind::KamikazeAlien))
        .count()
}
