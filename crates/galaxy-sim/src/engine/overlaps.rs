//! Overlap resolution: turns queued pairs into combat effects.

use hecs::Entity;
use tracing::debug;

use galaxy_core::components::BossState;
use galaxy_core::enums::{EntityKind, GamePhase};
use galaxy_core::events::GameEvent;

use galaxy_boss_ai::profiles::profile_for_level;

use crate::combat::{self, CombatContext, Effect, Side};
use crate::systems::{boss_ai, kamikaze};

use super::SimulationEngine;

impl SimulationEngine {
    /// Resolve every queued overlap in delivery order.
    pub(super) fn resolve_overlaps(&mut self) {
        let pairs = std::mem::take(&mut self.overlap_queue);
        // The player is moved back to spawn on a life loss; later contacts
        // from the same frame refer to the old position.
        let mut life_lost = false;

        for (a, b) in pairs {
            if self.phase != GamePhase::Playing {
                break;
            }
            let (Some(kind_a), Some(kind_b)) = (self.kind_of(a), self.kind_of(b)) else {
                continue;
            };
            if life_lost && (kind_a == EntityKind::Player || kind_b == EntityKind::Player) {
                continue;
            }

            let ctx = CombatContext {
                level: self.run.level,
                level_kills: self.level.kill_count,
                boss_health: self.boss_health(a).or_else(|| self.boss_health(b)).unwrap_or(0),
            };
            let effects = combat::resolve(kind_a, kind_b, &ctx);
            if effects.is_empty() {
                continue;
            }
            debug!(?kind_a, ?kind_b, ?effects, "overlap resolved");

            for effect in effects {
                if effect == Effect::LoseLife {
                    life_lost = true;
                }
                self.apply_effect(effect, a, b);
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect, a: Entity, b: Entity) {
        let pick = |side: Side| match side {
            Side::A => a,
            Side::B => b,
        };
        match effect {
            Effect::Destroy(side) => {
                let entity = pick(side);
                let was_boss = self.kind_of(entity) == Some(EntityKind::Boss);
                if self.world.despawn(entity).is_ok() && was_boss {
                    let bonus = profile_for_level(self.run.level).map_or(0, |p| p.bonus);
                    debug!(bonus, "boss defeated");
                    self.events.push(GameEvent::BossDefeated { bonus });
                }
            }
            Effect::AwardScore(points) => self.run.score += points,
            Effect::CountKill => self.level.kill_count += 1,
            Effect::ActivateKamikaze => {
                let now_ms = self.time.elapsed_ms;
                if kamikaze::activate(&mut self.world, &mut self.rng, &mut self.timers, now_ms)
                    .is_some()
                {
                    self.events.push(GameEvent::KamikazeActivated);
                }
            }
            Effect::CheckLevelClear => self.check_level_clear(),
            Effect::DamageBoss(side) => {
                let now_ms = self.time.elapsed_ms;
                if let Some(health) =
                    boss_ai::damage(&mut self.world, &mut self.timers, pick(side), now_ms)
                {
                    self.events.push(GameEvent::BossHit {
                        health_remaining: health,
                    });
                }
            }
            Effect::CompleteLevel => self.complete_level(),
            Effect::LoseLife => self.lose_life(),
            Effect::GrantRapidFire(charges) => {
                self.run.rapid_fire_shots = charges;
                self.level.catch_power_up = false;
                self.events.push(GameEvent::RapidFireGranted { charges });
            }
        }
    }

    fn kind_of(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
    }

    fn boss_health(&self, entity: Entity) -> Option<i32> {
        self.world
            .get::<&BossState>(entity)
            .ok()
            .map(|state| state.health)
    }
}
