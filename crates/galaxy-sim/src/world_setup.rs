//! Entity spawn factories.
//!
//! Creates the player, projectiles, aliens and bosses with the
//! component bundles the systems expect.

use hecs::{Entity, World};

use galaxy_core::components::*;
use galaxy_core::constants::*;
use galaxy_core::enums::{BossPhase, EntityKind};
use galaxy_core::types::{Arena, Position, Velocity};

use galaxy_boss_ai::profiles::BossProfile;

/// Where the player (re)appears.
pub fn player_spawn(arena: &Arena) -> Position {
    Position::new(arena.width / 2.0, arena.height - PLAYER_SPAWN_OFFSET)
}

/// Where the boss (re)appears.
pub fn boss_spawn(arena: &Arena) -> Position {
    Position::new(arena.width / 2.0, BOSS_SPAWN_Y)
}

pub fn spawn_player(world: &mut World, arena: &Arena) -> Entity {
    world.spawn((
        EntityKind::Player,
        player_spawn(arena),
        BodySize {
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
        },
    ))
}

/// Spawn a player bullet just above the ship, moving straight up.
pub fn spawn_player_bullet(world: &mut World, player: &Position) -> Entity {
    world.spawn((
        EntityKind::PlayerBullet,
        Position::new(player.x, player.y - PLAYER_BULLET_OFFSET),
        Velocity::new(0.0, -PLAYER_BULLET_SPEED),
        BodySize {
            width: PLAYER_BULLET_SIZE,
            height: PLAYER_BULLET_SIZE,
        },
    ))
}

/// Spawn an enemy bullet at `from`, aimed at `target`.
pub fn spawn_enemy_bullet(
    world: &mut World,
    from: Position,
    target: &Position,
    speed: f64,
    power_up: bool,
    size: f64,
    tint: u32,
) -> Entity {
    world.spawn((
        EntityKind::AlienBullet { power_up },
        from,
        Velocity::toward(&from, target, speed),
        BodySize {
            width: size,
            height: size,
        },
        Tint(tint),
    ))
}

pub fn spawn_standard_alien(
    world: &mut World,
    position: Position,
    width: f64,
    height: f64,
    velocity_x: f64,
) -> Entity {
    world.spawn((
        EntityKind::StandardAlien,
        position,
        Velocity::new(velocity_x, 0.0),
        BodySize { width, height },
    ))
}

/// Spawn the boss of a milestone level at full health.
pub fn spawn_boss(world: &mut World, arena: &Arena, profile: &BossProfile) -> Entity {
    world.spawn((
        EntityKind::Boss,
        boss_spawn(arena),
        Velocity::new(BOSS_INITIAL_VELOCITY, BOSS_INITIAL_VELOCITY),
        BodySize {
            width: profile.size,
            height: profile.size,
        },
        BossState {
            variant: profile.variant,
            health: profile.health,
            phase: BossPhase::Patrolling,
        },
        Bounded,
    ))
}
