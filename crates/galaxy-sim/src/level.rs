//! Level formulas and level-local state.
//!
//! Everything here is a pure function of the level number or the arena,
//! so the controller and the tests share one source of truth.

use galaxy_core::constants::*;
use galaxy_core::enums::is_milestone_level;
use galaxy_core::state::RunState;
use galaxy_core::types::Arena;

/// Standard-alien march speed (px/s) for a level.
///
/// Grows 20% per level to 12, then 5% per level to 20, flat afterwards.
pub fn alien_speed(level: u32) -> f64 {
    let level = level.max(1);
    if level <= 12 {
        ALIEN_BASE_SPEED * 1.2_f64.powi(level as i32 - 1)
    } else {
        let capped = level.min(20);
        ALIEN_BASE_SPEED * 1.2_f64.powi(11) * 1.05_f64.powi(capped as i32 - 12)
    }
}

/// Enemy volley period (ms) for a level.
pub fn shot_period_ms(level: u32) -> u64 {
    if level >= 20 {
        SHOT_PERIOD_LATE_MS
    } else if level >= 10 {
        SHOT_PERIOD_MID_MS
    } else {
        SHOT_PERIOD_EARLY_MS
    }
}

/// Whether the enemy shot with this cumulative number is a power-up.
pub fn is_power_up_shot(shot_number: u32) -> bool {
    shot_number > 0 && shot_number % POWER_UP_SHOT_INTERVAL == 0
}

/// Whether this kill (already counted) promotes an alien to kamikaze.
pub fn kamikaze_due(level: u32, level_kills: u32) -> bool {
    level % KAMIKAZE_LEVEL_MODULUS == KAMIKAZE_LEVEL_REMAINDER
        && level_kills == KAMIKAZE_TRIGGER_KILLS
}

/// Whether completing `level` grants an h-bomb.
pub fn h_bomb_awarded(level: u32) -> bool {
    (level + 1) % H_BOMB_LEVEL_INTERVAL == 0
}

/// Run state carried into the level after `run.level`.
pub fn next_level_run(run: &RunState) -> RunState {
    RunState {
        level: run.level + 1,
        h_bomb_count: run.h_bomb_count + u32::from(h_bomb_awarded(run.level)),
        ..*run
    }
}

/// Geometry of the standard alien grid for an arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell_width: f64,
    pub cell_height: f64,
    /// Center of the top-left cell.
    pub start_x: f64,
    pub start_y: f64,
}

impl GridLayout {
    pub fn for_arena(arena: &Arena) -> Self {
        let cols = GRID_COLS as f64;
        let available = arena.width - GRID_SCREEN_MARGIN * 2.0;
        let max_w = (available - (cols - 1.0) * GRID_PADDING) / cols;
        let cell_width = GRID_MAX_CELL_WIDTH.min(max_w);
        let cell_height = cell_width / GRID_ASPECT_RATIO;

        let block_width = cols * cell_width + (cols - 1.0) * GRID_PADDING;
        Self {
            cell_width,
            cell_height,
            start_x: (arena.width - block_width) / 2.0 + cell_width / 2.0,
            start_y: GRID_TOP_OFFSET + cell_height / 2.0,
        }
    }

    /// Center of the cell at `(row, col)`.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.start_x + col as f64 * (self.cell_width + GRID_PADDING),
            self.start_y + row as f64 * (self.cell_height + GRID_PADDING),
        )
    }
}

/// State that lives for one level and is rebuilt on every (re)start.
#[derive(Debug, Clone)]
pub struct LevelState {
    pub level: u32,
    pub milestone: bool,
    /// Standard aliens destroyed by the player this level.
    pub kill_count: u32,
    /// Shared march direction, +1 (right) or -1 (left).
    pub alien_direction: i32,
    /// Earliest sim time (exclusive) of the next player shot.
    pub next_fire_ms: u64,
    /// A level completion is already scheduled (h-bomb).
    pub pending_completion: bool,
    /// A power-up bullet is in flight.
    pub catch_power_up: bool,
    pub player: Option<hecs::Entity>,
}

impl LevelState {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            milestone: is_milestone_level(level),
            kill_count: 0,
            alien_direction: 1,
            next_fire_ms: 0,
            pending_completion: false,
            catch_power_up: false,
            player: None,
        }
    }
}
