//! Simulation engine and the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the run state, the timer
//! queue and the RNG. It processes player commands, fires due timers, runs
//! all systems and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

mod dispatch;
mod lifecycle;
mod overlaps;

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use galaxy_core::commands::{Controls, PlayerCommand};
use galaxy_core::config::SimConfig;
use galaxy_core::constants::PLAYLIST_LEN;
use galaxy_core::enums::{EntityKind, GamePhase};
use galaxy_core::events::{AudioEvent, GameEvent};
use galaxy_core::state::{GameStateSnapshot, RunState};
use galaxy_core::types::{Arena, SimTime};

use crate::level::LevelState;
use crate::systems;
use crate::systems::player_control::PlayerInput;
use crate::systems::snapshot::SnapshotInput;
use crate::timers::TimerQueue;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    paused: bool,
    config: SimConfig,
    arena: Arena,
    rng: ChaCha8Rng,
    run: RunState,
    level: LevelState,
    timers: TimerQueue,
    controls: Controls,
    command_queue: VecDeque<PlayerCommand>,
    overlap_queue: Vec<(Entity, Entity)>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
    music_playing: bool,
}

impl SimulationEngine {
    /// Create an engine and start a fresh run at level 1.
    pub fn new(config: SimConfig) -> Self {
        Self::with_run_state(config, RunState::default())
    }

    /// Create an engine that enters `run.level` carrying the given run state.
    pub fn with_run_state(config: SimConfig, run: RunState) -> Self {
        debug_assert!(config.validate().is_ok(), "engine built from an unvalidated config");
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            paused: false,
            arena: config.arena(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            run,
            level: LevelState::new(run.level),
            timers: TimerQueue::new(),
            controls: Controls::default(),
            command_queue: VecDeque::new(),
            overlap_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
            music_playing: false,
        };
        engine.begin_run(run);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Deliver an overlap detected by the host. Resolved during the next
    /// running tick; pairs referencing despawned entities are dropped.
    pub fn report_overlap(&mut self, a: Entity, b: Entity) {
        self.overlap_queue.push((a, b));
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused && self.phase != GamePhase::GameOver {
            // A level started by a timer this tick begins moving next tick.
            let was_playing = self.phase == GamePhase::Playing;
            self.time.advance();
            self.fire_timers();
            if was_playing && self.phase == GamePhase::Playing {
                self.run_systems();
            }
        }
        if self.phase != GamePhase::Playing {
            self.overlap_queue.clear();
        }

        self.snapshot()
    }

    /// Build a snapshot without advancing, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInput {
                time: self.time,
                phase: self.phase,
                paused: self.paused,
                run: &self.run,
                catch_power_up: self.level.catch_power_up,
                events: std::mem::take(&mut self.events),
                audio_events: std::mem::take(&mut self.audio_events),
            },
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn level_state(&self) -> &LevelState {
        &self.level
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// All live entities of one kind, in entity order.
    pub fn entities_of(&self, kind: EntityKind) -> Vec<Entity> {
        let mut found: Vec<Entity> = self
            .world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(entity, _)| entity)
            .collect();
        found.sort_by_key(|e| e.to_bits());
        found
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn force_complete_level(&mut self) {
        self.complete_level();
    }

    #[cfg(test)]
    pub(crate) fn force_lose_life(&mut self) {
        self.lose_life();
    }

    /// The player entity of the current level.
    pub fn player(&self) -> Option<Entity> {
        self.level.player.filter(|p| self.world.contains(*p))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetControls { controls } => {
                self.controls = controls;
            }
            PlayerCommand::TogglePause => {
                if self.phase == GamePhase::GameOver {
                    return;
                }
                self.paused = !self.paused;
                let event = if self.paused {
                    GameEvent::Paused
                } else {
                    GameEvent::Resumed
                };
                debug!(paused = self.paused, "pause toggled");
                self.events.push(event);
            }
            PlayerCommand::UseHBomb => self.use_h_bomb(),
            PlayerCommand::Acknowledge => {
                if self.phase == GamePhase::GameOver {
                    info!("run reset");
                    self.events.push(GameEvent::RunReset);
                    self.begin_run(RunState::default());
                }
            }
            PlayerCommand::TrackFinished => {
                if self.music_playing {
                    self.run.current_track_index = (self.run.current_track_index + 1) % PLAYLIST_LEN;
                    self.audio_events.push(AudioEvent::PlayTrack {
                        index: self.run.current_track_index,
                    });
                }
            }
        }
    }

    /// Run all frame systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.elapsed_ms;

        // 1. Player movement and fire
        if let Some(player) = self.player() {
            systems::player_control::run(
                &mut self.world,
                &self.arena,
                PlayerInput {
                    player,
                    controls: self.controls,
                    milestone: self.level.milestone,
                    now_ms,
                    next_fire_ms: &mut self.level.next_fire_ms,
                    rapid_fire_shots: &mut self.run.rapid_fire_shots,
                },
            );
        }
        // 2. Standard-alien march and invasion check
        let march = systems::alien_march::run(
            &mut self.world,
            &self.arena,
            self.run.level,
            &mut self.level.alien_direction,
        );
        if march.invaded {
            info!(level = self.run.level, "aliens reached the player row");
            self.game_over();
            return;
        }
        // 3. Movement integration and wall bounce
        systems::movement::run(&mut self.world);
        systems::movement::bounce(&mut self.world, &self.arena);
        // 4. Overlap detection and combat
        if self.config.detect_overlaps {
            systems::overlap::detect(&self.world, &mut self.overlap_queue);
        }
        self.resolve_overlaps();
        // 5. Cleanup (bullets off the arena)
        if self.phase == GamePhase::Playing {
            let cleanup =
                systems::cleanup::run(&mut self.world, &self.arena, &mut self.despawn_buffer);
            if cleanup.removed > 0 {
                trace!(removed = cleanup.removed, "bullets left the arena");
            }
            if cleanup.power_up_missed {
                self.level.catch_power_up = false;
            }
        }
    }
}
