//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width in pixels.
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;

/// Default arena height in pixels.
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

/// Smallest arena that still fits a 5-column grid and the player lane.
pub const MIN_ARENA_WIDTH: f64 = 200.0;
pub const MIN_ARENA_HEIGHT: f64 = 300.0;

// --- Run state ---

/// Lives granted at the start of a fresh run.
pub const STARTING_LIVES: u32 = 100;

/// Milestone levels that spawn a boss instead of a grid.
pub const MILESTONE_LEVELS: [u32; 4] = [10, 20, 30, 40];

// --- Player ---

/// Player sprite edge length.
pub const PLAYER_SIZE: f64 = 100.0;

/// Distance of the player spawn point above the bottom edge.
pub const PLAYER_SPAWN_OFFSET: f64 = 50.0;

/// Horizontal/vertical step per frame while a direction is held.
pub const PLAYER_STEP: f64 = 5.0;

/// Clamp margin keeping the player inside the arena.
pub const PLAYER_CLAMP_MARGIN: f64 = 25.0;

/// Player bullet speed (px/s, upward).
pub const PLAYER_BULLET_SPEED: f64 = 400.0;

/// Player bullet edge length.
pub const PLAYER_BULLET_SIZE: f64 = 30.0;

/// Vertical offset of a fresh bullet above the player.
pub const PLAYER_BULLET_OFFSET: f64 = 50.0;

/// Fire cooldown without rapid fire (ms).
pub const FIRE_COOLDOWN_MS: u64 = 300;

/// Fire cooldown with rapid fire (ms).
pub const RAPID_FIRE_COOLDOWN_MS: u64 = 100;

/// Rapid-fire charges granted by a caught power-up.
pub const RAPID_FIRE_CHARGES: u32 = 100;

// --- Alien grid ---

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;
pub const GRID_PADDING: f64 = 10.0;
pub const GRID_SCREEN_MARGIN: f64 = 10.0;
pub const GRID_MAX_CELL_WIDTH: f64 = 90.0;
pub const GRID_ASPECT_RATIO: f64 = 1.5;
pub const GRID_TOP_OFFSET: f64 = 50.0;

/// Vertical step when the grid reaches a side edge.
pub const ALIEN_STEP_DOWN: f64 = 20.0;

/// Distance above the bottom edge at which a marching alien ends the run.
pub const ALIEN_INVASION_MARGIN: f64 = 50.0;

/// Base march speed at level 1 (px/s).
pub const ALIEN_BASE_SPEED: f64 = 100.0;

// --- Enemy fire ---

/// Enemy bullet speed toward the player (px/s).
pub const ALIEN_BULLET_SPEED: f64 = 200.0;

pub const ALIEN_BULLET_SIZE: f64 = 30.0;
pub const POWER_UP_BULLET_SIZE: f64 = 40.0;

/// Every Nth cumulative enemy shot is a power-up.
pub const POWER_UP_SHOT_INTERVAL: u32 = 25;

pub const SHOT_PERIOD_EARLY_MS: u64 = 1000;
pub const SHOT_PERIOD_MID_MS: u64 = 500;
pub const SHOT_PERIOD_LATE_MS: u64 = 333;

// --- Kamikaze ---

/// Kill count on a `level % 5 == 3` level that triggers a kamikaze.
pub const KAMIKAZE_TRIGGER_KILLS: u32 = 8;
pub const KAMIKAZE_LEVEL_MODULUS: u32 = 5;
pub const KAMIKAZE_LEVEL_REMAINDER: u32 = 3;

pub const KAMIKAZE_SHOT_PERIOD_MS: u64 = 100;
pub const KAMIKAZE_LIFETIME_MS: u64 = 3000;
pub const KAMIKAZE_HOMING_SPEED: f64 = 250.0;
pub const KAMIKAZE_BULLET_SPEED: f64 = 400.0;
pub const KAMIKAZE_BULLET_SIZE: f64 = 20.0;

// --- Boss ---

/// Spawn height of the boss.
pub const BOSS_SPAWN_Y: f64 = 150.0;

/// Initial diagonal patrol velocity component.
pub const BOSS_INITIAL_VELOCITY: f64 = 200.0;

/// Speed used after a life-loss reposition.
pub const BOSS_RESPAWN_SPEED: f64 = 300.0;

/// Red flash after a hit (ms).
pub const BOSS_HIT_FLASH_MS: u64 = 100;

/// Interval between random patrol retargets (ms).
pub const BOSS_RETARGET_PERIOD_MS: u64 = 1000;

/// Travel speed toward a random patrol target (px/s).
pub const BOSS_RETARGET_SPEED: f64 = 300.0;

/// Dash variant: cycle period, warning hold, dash length, recovery window.
pub const DASH_PERIOD_MS: u64 = 7000;
pub const DASH_WARNING_MS: u64 = 1000;
pub const DASH_DURATION_MS: u64 = 1000;
pub const DASH_RECOVERY_MS: u64 = 1000;
pub const DASH_SPEED: f64 = 800.0;

/// Teleport variant: cycle period and the half-length of the fade pulse.
pub const TELEPORT_PERIOD_MS: u64 = 5000;
pub const TELEPORT_FADE_MS: u64 = 500;
pub const TELEPORT_MIN_ALPHA: f64 = 0.2;

/// Horizontal distance from the player at which the boss reappears.
pub const TELEPORT_OFFSET: f64 = 150.0;

// --- Level flow ---

pub const LEVEL_CLEAR_BONUS: u32 = 10;

/// An h-bomb is granted when `(level + 1) % H_BOMB_LEVEL_INTERVAL == 0`.
pub const H_BOMB_LEVEL_INTERVAL: u32 = 5;

/// Delay between level completion and the next level start (ms).
pub const LEVEL_RESTART_DELAY_MS: u64 = 2000;

/// Delay between h-bomb detonation and level completion (ms).
pub const H_BOMB_COMPLETE_DELAY_MS: u64 = 1000;

// --- Tints ---

pub const TINT_HIT: u32 = 0xff0000;
pub const TINT_KAMIKAZE: u32 = 0xffd700;
pub const TINT_POWER_UP: u32 = 0x00ffff;
pub const TINT_PLAIN_SHOT: u32 = 0xff0000;
pub const TINT_DASH_WARNING: u32 = 0xff00ff;
pub const TINT_TELEPORT_WARNING: u32 = 0x00ff00;

// --- Audio ---

/// Number of tracks in the background playlist.
pub const PLAYLIST_LEN: usize = 4;
