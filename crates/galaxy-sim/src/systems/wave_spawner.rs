//! Wave spawning system: builds the entities of a level.
//!
//! Standard levels get a fresh 5x5 grid; milestone levels get exactly one
//! boss plus the repeating timers that drive its attack pattern.

use hecs::{Entity, World};
use tracing::{debug, warn};

use galaxy_core::constants::{GRID_COLS, GRID_ROWS};
use galaxy_core::enums::is_milestone_level;
use galaxy_core::types::{Arena, Position};

use galaxy_boss_ai::profiles::profile_for_level;

use crate::level::{alien_speed, GridLayout};
use crate::systems::boss_ai;
use crate::timers::TimerQueue;
use crate::world_setup;

/// What a level was populated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wave {
    Grid(Vec<Entity>),
    Boss(Entity),
}

impl Wave {
    pub fn len(&self) -> usize {
        match self {
            Wave::Grid(aliens) => aliens.len(),
            Wave::Boss(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spawn the 5x5 standard grid. Every alien starts moving right.
pub fn create_grid(world: &mut World, arena: &Arena, level: u32) -> Vec<Entity> {
    let layout = GridLayout::for_arena(arena);
    let vx = alien_speed(level);

    let mut aliens = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let (x, y) = layout.cell_center(row, col);
            aliens.push(world_setup::spawn_standard_alien(
                world,
                Position::new(x, y),
                layout.cell_width,
                layout.cell_height,
                vx,
            ));
        }
    }
    aliens
}

/// Spawn the boss of a milestone level and arm its timers.
pub fn create_boss(
    world: &mut World,
    timers: &mut TimerQueue,
    arena: &Arena,
    level: u32,
    now_ms: u64,
) -> Option<Entity> {
    let Some(profile) = profile_for_level(level) else {
        warn!(level, "no boss profile for level");
        return None;
    };
    let boss = world_setup::spawn_boss(world, arena, &profile);
    boss_ai::schedule_cycles(timers, boss, &profile, now_ms);
    debug!(level, variant = ?profile.variant, health = profile.health, "boss spawned");
    Some(boss)
}

/// Populate a level.
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    arena: &Arena,
    level: u32,
    now_ms: u64,
) -> Wave {
    if is_milestone_level(level) {
        if let Some(boss) = create_boss(world, timers, arena, level, now_ms) {
            return Wave::Boss(boss);
        }
    }
    Wave::Grid(create_grid(world, arena, level))
}
