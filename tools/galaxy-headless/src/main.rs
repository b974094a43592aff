//! galaxy-headless: run the simulation without a host and report the outcome.
//!
//! Usage:
//!   galaxy-headless run --seconds 120 --seed 7
//!   galaxy-headless run --config sim.json --snapshots
//!
//! The ship is flown by a simple autopilot: it steers under the lowest
//! hostile body, holds fire, and spends h-bombs as soon as they are earned.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::info;

use galaxy_core::commands::{Controls, PlayerCommand};
use galaxy_core::config::SimConfig;
use galaxy_core::constants::TICK_RATE;
use galaxy_core::enums::{EntityKind, GamePhase};
use galaxy_core::events::GameEvent;
use galaxy_core::state::GameStateSnapshot;
use galaxy_core::types::Position;
use galaxy_sim::SimulationEngine;

/// Horizontal slack before the autopilot steers.
const STEER_DEADBAND: f64 = 8.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "galaxy-headless: GALAXY WEST headless runner\n\
         \n\
         Commands:\n\
         \n\
         run       Fly the autopilot and print a JSON summary\n\
         \n\
           --config <path>    SimConfig JSON file (optional, defaults otherwise)\n\
           --seed <N>         Override the RNG seed\n\
           --seconds <N>      Simulated seconds to run (default: 60)\n\
           --snapshots        Print every snapshot as a JSON line\n\
         \n\
         Set RUST_LOG=debug for combat and boss traces.\n"
    );
}

struct RunArgs {
    config: Option<PathBuf>,
    seed: Option<u64>,
    seconds: u64,
    snapshots: bool,
}

fn parse_run_args(args: &[String]) -> Result<RunArgs> {
    let mut parsed = RunArgs {
        config: None,
        seed: None,
        seconds: 60,
        snapshots: false,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                parsed.config = Some(PathBuf::from(value_of(args, i)?));
                i += 1;
            }
            "--seed" => {
                parsed.seed = Some(value_of(args, i)?.parse().context("--seed expects an integer")?);
                i += 1;
            }
            "--seconds" => {
                parsed.seconds = value_of(args, i)?
                    .parse()
                    .context("--seconds expects an integer")?;
                i += 1;
            }
            "--snapshots" => parsed.snapshots = true,
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn value_of(args: &[String], i: usize) -> Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} needs a value", args[i]),
    }
}

fn cmd_run(args: &[String]) -> Result<()> {
    let args = parse_run_args(args)?;

    let mut config = match &args.config {
        Some(path) => SimConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;

    info!(seed = config.seed, seconds = args.seconds, "headless run starting");
    let mut engine = SimulationEngine::new(config);
    let total_ticks = args.seconds * u64::from(TICK_RATE);

    let mut ticks_run = 0;
    let mut highest_level = 1;
    let mut lives_lost = 0;
    let mut snapshot = engine.tick();
    while ticks_run < total_ticks {
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        engine.queue_commands(autopilot(&snapshot));
        snapshot = engine.tick();
        ticks_run += 1;

        highest_level = highest_level.max(snapshot.run.level);
        lives_lost += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
            .count();
        if args.snapshots {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
    }

    let summary = serde_json::json!({
        "seed": engine.config().seed,
        "ticks": ticks_run,
        "sim_ms": snapshot.time.elapsed_ms,
        "phase": snapshot.phase,
        "highest_level": highest_level,
        "lives_lost": lives_lost,
        "run": snapshot.run,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!(level = snapshot.run.level, score = snapshot.run.score, "headless run finished");
    Ok(())
}

/// Steer under the lowest hostile body and keep firing.
fn autopilot(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if snapshot.run.h_bomb_count > 0 && snapshot.phase == GamePhase::Playing && snapshot.boss.is_none()
    {
        commands.push(PlayerCommand::UseHBomb);
    }

    let ship = snapshot
        .entities
        .iter()
        .find(|e| e.kind == EntityKind::Player)
        .map(|e| e.position);
    let target = snapshot
        .entities
        .iter()
        .filter(|e| e.kind.is_hostile_body())
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|e| e.position);

    let mut controls = Controls {
        fire: true,
        ..Default::default()
    };
    if let (Some(ship), Some(target)) = (ship, target) {
        steer(&mut controls, &ship, &target);
    }
    commands.push(PlayerCommand::SetControls { controls });
    commands
}

fn steer(controls: &mut Controls, ship: &Position, target: &Position) {
    let dx = target.x - ship.x;
    controls.left = dx < -STEER_DEADBAND;
    controls.right = dx > STEER_DEADBAND;
}
