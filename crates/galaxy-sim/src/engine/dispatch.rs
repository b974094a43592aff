//! Timer dispatch. Every entity-bound handler re-checks liveness first.

use tracing::{debug, trace};

use galaxy_core::enums::{BossPhase, EntityKind, GamePhase};
use galaxy_core::events::GameEvent;

use galaxy_boss_ai::fsm::BossTrigger;

use crate::systems::boss_ai::{self, BossStep};
use crate::systems::enemy_fire::{self, Volley};
use crate::timers::{FiredTimer, TimerEvent};

use super::SimulationEngine;

impl SimulationEngine {
    /// Fire every timer due at the current sim time, earliest first.
    pub(super) fn fire_timers(&mut self) {
        let now_ms = self.time.elapsed_ms;
        while let Some(fired) = self.timers.pop_due(now_ms) {
            trace!(id = ?fired.id, due_ms = fired.due_ms, event = ?fired.event, "timer fired");
            self.dispatch_timer(fired);
        }
    }

    fn dispatch_timer(&mut self, fired: FiredTimer) {
        let now_ms = self.time.elapsed_ms;
        match fired.event {
            TimerEvent::LevelRestart => self.restart_next_level(),
            _ if self.phase != GamePhase::Playing => {}
            TimerEvent::EnemyVolley => {
                let volley = enemy_fire::volley(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.run.alien_shot_count,
                );
                if volley == (Volley::Fired { power_up: true }) {
                    self.level.catch_power_up = true;
                    self.events.push(GameEvent::PowerUpSpawned);
                }
            }
            TimerEvent::KamikazeShoot { alien } => {
                if !enemy_fire::kamikaze_burst(&mut self.world, alien) {
                    self.timers.cancel(fired.id);
                }
            }
            TimerEvent::KamikazeExpire { alien, shoot_timer } => {
                self.timers.cancel(shoot_timer);
                let alive = self
                    .world
                    .get::<&EntityKind>(alien)
                    .is_ok_and(|kind| *kind == EntityKind::KamikazeAlien);
                if alive {
                    let _ = self.world.despawn(alien);
                    debug!(?alien, "kamikaze self-destructed");
                    self.check_level_clear();
                }
            }
            TimerEvent::Boss { boss, trigger } => {
                let step = boss_ai::run(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.timers,
                    &self.arena,
                    boss,
                    trigger,
                    now_ms,
                );
                match step {
                    BossStep::Gone => {
                        self.timers.cancel(fired.id);
                    }
                    BossStep::Entered(BossPhase::Warning) if trigger == BossTrigger::AttackCycle => {
                        self.events.push(GameEvent::BossWarning);
                    }
                    BossStep::Entered(_) | BossStep::Unchanged => {}
                }
            }
            TimerEvent::ClearBossFlash { boss } => boss_ai::clear_flash(&mut self.world, boss),
            TimerEvent::HBombClear => self.complete_level(),
        }
    }
}
