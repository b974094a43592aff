//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use galaxy_core::components::{BodySize, BossState, Fade, Tint};
use galaxy_core::enums::{EntityKind, GamePhase};
use galaxy_core::events::{AudioEvent, GameEvent};
use galaxy_core::state::*;
use galaxy_core::types::{Position, SimTime};

use crate::systems::boss_ai::fade_alpha;

/// Engine state the snapshot needs besides the world.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub run: &'a RunState,
    pub catch_power_up: bool,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, input: SnapshotInput<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: input.time,
        phase: input.phase,
        paused: input.paused,
        run: *input.run,
        indicators: Indicators {
            catch_power_up: input.catch_power_up,
            rapid_fire: input.run.rapid_fire_shots > 0,
        },
        entities: build_entities(world, input.time.elapsed_ms),
        boss: build_boss(world),
        events: input.events,
        audio_events: input.audio_events,
    }
}

/// One view per visible entity, ordered by entity id.
fn build_entities(world: &World, now_ms: u64) -> Vec<EntityView> {
    let mut views: Vec<EntityView> = world
        .query::<(&EntityKind, &Position, &BodySize, Option<&Tint>, Option<&Fade>)>()
        .iter()
        .map(|(entity, (kind, pos, size, tint, fade))| EntityView {
            id: entity.to_bits().get(),
            kind: *kind,
            position: *pos,
            width: size.width,
            height: size.height,
            tint: tint.map(|t| t.0),
            alpha: fade.map_or(1.0, |f| fade_alpha(f, now_ms)),
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<&BossState>()
        .iter()
        .next()
        .map(|(_, state)| BossView {
            health: state.health,
            phase: state.phase,
        })
}
