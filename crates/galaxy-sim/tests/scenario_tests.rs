use galaxy_sim::core::commands::{Controls, PlayerCommand};
use galaxy_sim::core::components::BossState;
use galaxy_sim::core::config::SimConfig;
use galaxy_sim::core::constants::*;
use galaxy_sim::core::enums::{EntityKind, GamePhase};
use galaxy_sim::core::events::GameEvent;
use galaxy_sim::core::state::RunState;
use galaxy_sim::core::types::Position;
use galaxy_sim::SimulationEngine;

use hecs::Entity;

/// Overlaps are delivered by the test, the way a host physics layer would.
fn manual_config() -> SimConfig {
    SimConfig {
        seed: 7,
        detect_overlaps: false,
        ..Default::default()
    }
}

fn engine_with(run: RunState) -> SimulationEngine {
    SimulationEngine::with_run_state(manual_config(), run)
}

fn hold_fire(engine: &mut SimulationEngine) {
    engine.queue_command(PlayerCommand::SetControls {
        controls: Controls {
            fire: true,
            ..Default::default()
        },
    });
}

/// Tick until the player has a bullet in flight and return it.
fn next_bullet(engine: &mut SimulationEngine) -> Entity {
    for _ in 0..120 {
        if let Some(&bullet) = engine.entities_of(EntityKind::PlayerBullet).first() {
            return bullet;
        }
        engine.tick();
    }
    panic!("player never fired");
}

fn shoot(engine: &mut SimulationEngine, target: Entity) {
    let bullet = next_bullet(engine);
    engine.report_overlap(bullet, target);
    engine.tick();
}

/// Tick until `ms` of sim time passed. Bounded, since time stands still
/// during game-over.
fn run_for_ms(engine: &mut SimulationEngine, ms: u64) {
    let until = engine.time().elapsed_ms + ms;
    for _ in 0..=ms * u64::from(TICK_RATE) / 1000 + 1 {
        if engine.time().elapsed_ms >= until {
            break;
        }
        engine.tick();
    }
}

#[test]
fn clearing_level_one_scores_kills_plus_bonus() {
    let mut engine = engine_with(RunState::default());
    hold_fire(&mut engine);

    for alien in engine.entities_of(EntityKind::StandardAlien) {
        shoot(&mut engine, alien);
    }

    assert_eq!(engine.phase(), GamePhase::LevelComplete);
    assert_eq!(engine.run_state().score, 25 + LEVEL_CLEAR_BONUS);
    assert_eq!(engine.run_state().lives, STARTING_LIVES);

    run_for_ms(&mut engine, LEVEL_RESTART_DELAY_MS);
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.run_state().level, 2);
    assert_eq!(engine.run_state().score, 35);
    assert_eq!(engine.entities_of(EntityKind::StandardAlien).len(), 25);
}

#[test]
fn eighth_kill_on_level_thirteen_spawns_one_immune_kamikaze() {
    // Level 13 marches fast; a tall arena keeps the grid clear of the
    // invasion line for the whole kamikaze lifetime.
    let config = SimConfig {
        arena_height: 1200.0,
        ..manual_config()
    };
    let mut engine = SimulationEngine::with_run_state(
        config,
        RunState {
            level: 13,
            ..Default::default()
        },
    );
    hold_fire(&mut engine);

    let aliens = engine.entities_of(EntityKind::StandardAlien);
    for &alien in aliens.iter().take(7) {
        shoot(&mut engine, alien);
    }
    assert!(engine.entities_of(EntityKind::KamikazeAlien).is_empty());

    shoot(&mut engine, aliens[7]);
    let kamikazes = engine.entities_of(EntityKind::KamikazeAlien);
    assert_eq!(kamikazes.len(), 1);
    assert_eq!(engine.entities_of(EntityKind::StandardAlien).len(), 16);
    let kamikaze = kamikazes[0];

    // Player fire bounces off.
    let score = engine.run_state().score;
    shoot(&mut engine, kamikaze);
    assert!(engine.world().contains(kamikaze));
    assert_eq!(engine.run_state().score, score);

    run_for_ms(&mut engine, KAMIKAZE_LIFETIME_MS);
    assert!(!engine.world().contains(kamikaze));
    assert_eq!(engine.phase(), GamePhase::Playing, "standard aliens remain");
}

#[test]
fn level_ten_boss_falls_on_the_twenty_fifth_hit() {
    let mut engine = engine_with(RunState {
        level: 10,
        ..Default::default()
    });
    hold_fire(&mut engine);
    let boss = engine.entities_of(EntityKind::Boss)[0];
    assert_eq!(engine.world().get::<&BossState>(boss).unwrap().health, 25);

    for hit in 1..25 {
        shoot(&mut engine, boss);
        let health = engine.world().get::<&BossState>(boss).unwrap().health;
        assert_eq!(health, 25 - hit);
    }
    assert_eq!(engine.run_state().score, 0);

    let bullet = next_bullet(&mut engine);
    engine.report_overlap(bullet, boss);
    let snap = engine.tick();

    assert!(!engine.world().contains(boss));
    assert!(snap.events.contains(&GameEvent::BossDefeated { bonus: 100 }));
    assert_eq!(engine.phase(), GamePhase::LevelComplete);
    assert_eq!(engine.run_state().score, 100 + LEVEL_CLEAR_BONUS);

    run_for_ms(&mut engine, LEVEL_RESTART_DELAY_MS);
    assert_eq!(engine.run_state().level, 11);
    assert!(engine.entities_of(EntityKind::Boss).is_empty());
}

#[test]
fn last_life_ends_the_run_until_acknowledged() {
    let mut engine = engine_with(RunState {
        level: 6,
        lives: 1,
        score: 80,
        h_bomb_count: 1,
        ..Default::default()
    });
    let player = engine.player().unwrap();
    let alien = engine.entities_of(EntityKind::StandardAlien)[0];
    engine.report_overlap(player, alien);
    engine.tick();

    assert_eq!(engine.run_state().lives, 0);
    assert_eq!(engine.phase(), GamePhase::GameOver);

    // Frozen: no time, no motion, no commands except acknowledge.
    let time = engine.time();
    let pos = *engine.world().get::<&Position>(alien).unwrap();
    engine.queue_commands([PlayerCommand::TogglePause, PlayerCommand::UseHBomb]);
    run_ticks(&mut engine, 120);
    assert_eq!(engine.time(), time);
    assert_eq!(*engine.world().get::<&Position>(alien).unwrap(), pos);
    assert!(!engine.is_paused());
    assert_eq!(engine.run_state().h_bomb_count, 1);

    engine.queue_command(PlayerCommand::Acknowledge);
    let snap = engine.tick();
    assert!(snap.events.contains(&GameEvent::RunReset));
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(*engine.run_state(), RunState::default());
    assert_eq!(engine.entities_of(EntityKind::StandardAlien).len(), 25);
}

fn run_ticks(engine: &mut SimulationEngine, ticks: usize) {
    for _ in 0..ticks {
        engine.tick();
    }
}

#[test]
fn built_in_overlap_detection_drives_combat() {
    let config = SimConfig {
        seed: 3,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config);
    hold_fire(&mut engine);
    run_for_ms(&mut engine, 5000);

    // The ship sits under the middle columns and fires straight up.
    assert!(engine.run_state().score > 0);
    assert!(engine.entities_of(EntityKind::StandardAlien).len() < 25);
}
