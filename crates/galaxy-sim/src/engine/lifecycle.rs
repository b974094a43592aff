//! Run and level lifecycle: starts, life loss, completion, h-bomb, game-over.

use tracing::{debug, info};

use galaxy_core::constants::*;
use galaxy_core::enums::{EntityKind, GamePhase};
use galaxy_core::events::{AudioEvent, GameEvent};
use galaxy_core::state::RunState;
use galaxy_core::types::Position;

use crate::level::{h_bomb_awarded, next_level_run, shot_period_ms, GridLayout, LevelState};
use crate::systems::{alien_march, boss_ai, cleanup, kamikaze, wave_spawner};
use crate::timers::TimerEvent;
use crate::world_setup;

use super::SimulationEngine;

impl SimulationEngine {
    /// Start a run from `run` (a fresh one, or a carried-over state).
    pub(super) fn begin_run(&mut self, run: RunState) {
        self.run = run;
        self.paused = false;
        self.start_level();
        if !self.music_playing {
            self.music_playing = true;
            self.audio_events.push(AudioEvent::PlayTrack {
                index: self.run.current_track_index,
            });
        }
    }

    /// Rebuild the world for `self.run.level`. Only the run state survives.
    pub(super) fn start_level(&mut self) {
        let now_ms = self.time.elapsed_ms;
        let level = self.run.level;

        self.world.clear();
        self.timers.clear();
        self.overlap_queue.clear();
        self.level = LevelState::new(level);
        self.phase = GamePhase::Playing;

        self.level.player = Some(world_setup::spawn_player(&mut self.world, &self.arena));
        let wave = wave_spawner::run(&mut self.world, &mut self.timers, &self.arena, level, now_ms);
        self.timers
            .schedule_repeating(now_ms, shot_period_ms(level), TimerEvent::EnemyVolley);

        info!(
            level,
            lives = self.run.lives,
            score = self.run.score,
            enemies = wave.len(),
            "level started"
        );
        self.events.push(GameEvent::LevelStarted { level });
    }

    /// Take one hit. The level is retried in place: bullets go, the player
    /// and the enemy formation are put back, kamikazes stay.
    pub(super) fn lose_life(&mut self) {
        if self.run.lives == 0 {
            return;
        }
        self.run.lives -= 1;
        info!(lives = self.run.lives, "life lost");
        self.events.push(GameEvent::LifeLost {
            lives_remaining: self.run.lives,
        });

        cleanup::despawn_where(&mut self.world, &mut self.despawn_buffer, EntityKind::is_bullet);
        self.level.catch_power_up = false;

        if self.run.lives == 0 {
            self.game_over();
            return;
        }

        if let Some(player) = self.player() {
            if let Ok(mut pos) = self.world.get::<&mut Position>(player) {
                *pos = world_setup::player_spawn(&self.arena);
            }
        }
        if self.level.milestone {
            boss_ai::reposition(&mut self.world, &mut self.rng, &self.arena);
        } else {
            let top_y = GridLayout::for_arena(&self.arena).start_y;
            alien_march::realign_top(&mut self.world, top_y);
            self.level.alien_direction = 1;
        }
    }

    /// Complete the current level once. Every timer except the restart is
    /// dropped and motion stops until the next level starts.
    pub(super) fn complete_level(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let now_ms = self.time.elapsed_ms;
        let level = self.run.level;

        self.phase = GamePhase::LevelComplete;
        self.level.pending_completion = false;
        self.timers.clear();
        cleanup::despawn_where(&mut self.world, &mut self.despawn_buffer, |kind| {
            kind.is_enemy_bullet() || *kind == EntityKind::KamikazeAlien
        });
        self.level.catch_power_up = false;

        self.run.score += LEVEL_CLEAR_BONUS;
        let awarded = h_bomb_awarded(level);
        info!(level, score = self.run.score, h_bomb_awarded = awarded, "level complete");
        self.events.push(GameEvent::LevelComplete {
            level,
            h_bomb_awarded: awarded,
        });

        self.timers
            .schedule_once(now_ms, LEVEL_RESTART_DELAY_MS, TimerEvent::LevelRestart);
    }

    /// Enter the next level, carrying the run state forward.
    pub(super) fn restart_next_level(&mut self) {
        self.run = next_level_run(&self.run);
        self.start_level();
    }

    /// Complete the level if no aliens of either group remain.
    pub(super) fn check_level_clear(&mut self) {
        if self.level.milestone || self.level.pending_completion {
            return;
        }
        if kamikaze::aliens_remaining(&self.world) == 0 {
            self.complete_level();
        }
    }

    /// Clear the field with an h-bomb; the level completes shortly after.
    pub(super) fn use_h_bomb(&mut self) {
        if self.run.h_bomb_count == 0
            || self.phase != GamePhase::Playing
            || self.paused
            || self.level.milestone
            || self.level.pending_completion
        {
            debug!("h-bomb ignored");
            return;
        }
        self.run.h_bomb_count -= 1;
        cleanup::despawn_where(&mut self.world, &mut self.despawn_buffer, |kind| {
            matches!(
                kind,
                EntityKind::StandardAlien | EntityKind::KamikazeAlien | EntityKind::AlienBullet { .. }
            )
        });
        self.level.catch_power_up = false;
        self.level.pending_completion = true;
        self.timers.schedule_once(
            self.time.elapsed_ms,
            H_BOMB_COMPLETE_DELAY_MS,
            TimerEvent::HBombClear,
        );
        info!(charges = self.run.h_bomb_count, "h-bomb detonated");
        self.events.push(GameEvent::HBombDetonated {
            charges_remaining: self.run.h_bomb_count,
        });
    }

    /// Freeze everything until the player acknowledges.
    pub(super) fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        if self.music_playing {
            self.music_playing = false;
            self.audio_events.push(AudioEvent::StopMusic);
        }
        info!(level = self.run.level, score = self.run.score, "game over");
        self.events.push(GameEvent::GameOver {
            score: self.run.score,
            level: self.run.level,
        });
    }
}
