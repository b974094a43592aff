//! Combat resolution policy.
//!
//! Maps the kinds of two overlapping entities (plus a little level context)
//! to the list of effects the engine must apply. Pure: no world access,
//! no RNG, no mutation. Liveness is checked by the caller before resolving.

use galaxy_core::constants::RAPID_FIRE_CHARGES;
use galaxy_core::enums::EntityKind;

use galaxy_boss_ai::profiles::profile_for_level;

use crate::level::kamikaze_due;

/// Which participant of the overlap pair an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// A single state change caused by an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Destroy(Side),
    AwardScore(u32),
    /// Count a standard-alien kill toward the level total.
    CountKill,
    ActivateKamikaze,
    /// Complete the level if both alien groups are now empty.
    CheckLevelClear,
    /// Remove one health point from the boss and flash it.
    DamageBoss(Side),
    CompleteLevel,
    LoseLife,
    /// Set rapid-fire charges to the given count.
    GrantRapidFire(u32),
}

/// Level context the policy depends on.
#[derive(Debug, Clone, Copy)]
pub struct CombatContext {
    pub level: u32,
    /// Standard aliens killed this level before this overlap.
    pub level_kills: u32,
    /// Current health of the boss in the pair, if any.
    pub boss_health: i32,
}

/// Resolve one overlap. The order of `a` and `b` does not matter.
pub fn resolve(a: EntityKind, b: EntityKind, ctx: &CombatContext) -> Vec<Effect> {
    let effects = resolve_ordered(a, b, ctx);
    if !effects.is_empty() {
        return effects;
    }
    resolve_ordered(b, a, ctx)
        .into_iter()
        .map(swap_side)
        .collect()
}

/// Resolve assuming the "acting" participant is `a`.
fn resolve_ordered(a: EntityKind, b: EntityKind, ctx: &CombatContext) -> Vec<Effect> {
    use EntityKind::*;

    match (a, b) {
        (PlayerBullet, StandardAlien) => {
            let kills = ctx.level_kills + 1;
            let mut effects = vec![
                Effect::Destroy(Side::A),
                Effect::Destroy(Side::B),
                Effect::AwardScore(1),
                Effect::CountKill,
            ];
            if kamikaze_due(ctx.level, kills) {
                effects.push(Effect::ActivateKamikaze);
            }
            effects.push(Effect::CheckLevelClear);
            effects
        }
        (PlayerBullet, Boss) => {
            let mut effects = vec![Effect::Destroy(Side::A), Effect::DamageBoss(Side::B)];
            if ctx.boss_health - 1 <= 0 {
                let bonus = profile_for_level(ctx.level).map_or(0, |p| p.bonus);
                effects.extend([
                    Effect::Destroy(Side::B),
                    Effect::AwardScore(bonus),
                    Effect::CompleteLevel,
                ]);
            }
            effects
        }
        // Kamikaze aliens shrug off player fire.
        (PlayerBullet, KamikazeAlien) => vec![Effect::Destroy(Side::A)],
        (Player, StandardAlien | KamikazeAlien | Boss) => vec![Effect::LoseLife],
        (Player, AlienBullet { power_up: true }) => vec![
            Effect::GrantRapidFire(RAPID_FIRE_CHARGES),
            Effect::Destroy(Side::B),
        ],
        (Player, AlienBullet { power_up: false }) => {
            vec![Effect::LoseLife, Effect::Destroy(Side::B)]
        }
        _ => Vec::new(),
    }
}

fn swap_side(effect: Effect) -> Effect {
    let flip = |side: Side| match side {
        Side::A => Side::B,
        Side::B => Side::A,
    };
    match effect {
        Effect::Destroy(side) => Effect::Destroy(flip(side)),
        Effect::DamageBoss(side) => Effect::DamageBoss(flip(side)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(level: u32, level_kills: u32, boss_health: i32) -> CombatContext {
        CombatContext {
            level,
            level_kills,
            boss_health,
        }
    }

    #[test]
    fn test_bullet_kills_standard_alien() {
        let effects = resolve(EntityKind::PlayerBullet, EntityKind::StandardAlien, &ctx(1, 0, 0));
        assert_eq!(
            effects,
            vec![
                Effect::Destroy(Side::A),
                Effect::Destroy(Side::B),
                Effect::AwardScore(1),
                Effect::CountKill,
                Effect::CheckLevelClear,
            ]
        );
    }

    #[test]
    fn test_pair_order_is_irrelevant() {
        let forward = resolve(EntityKind::PlayerBullet, EntityKind::Boss, &ctx(10, 0, 5));
        let reverse = resolve(EntityKind::Boss, EntityKind::PlayerBullet, &ctx(10, 0, 5));
        assert_eq!(forward, vec![Effect::Destroy(Side::A), Effect::DamageBoss(Side::B)]);
        assert_eq!(reverse, vec![Effect::Destroy(Side::B), Effect::DamageBoss(Side::A)]);
    }

    #[test]
    fn test_eighth_kill_on_kamikaze_level() {
        let effects = resolve(EntityKind::PlayerBullet, EntityKind::StandardAlien, &ctx(13, 7, 0));
        assert!(effects.contains(&Effect::ActivateKamikaze));

        let seventh = resolve(EntityKind::PlayerBullet, EntityKind::StandardAlien, &ctx(13, 6, 0));
        assert!(!seventh.contains(&Effect::ActivateKamikaze));

        let ninth = resolve(EntityKind::PlayerBullet, EntityKind::StandardAlien, &ctx(13, 8, 0));
        assert!(!ninth.contains(&Effect::ActivateKamikaze));

        let other_level = resolve(EntityKind::PlayerBullet, EntityKind::StandardAlien, &ctx(12, 7, 0));
        assert!(!other_level.contains(&Effect::ActivateKamikaze));
    }

    #[test]
    fn test_last_boss_hit_awards_milestone_bonus() {
        let bonuses = [(10, 100), (20, 200), (30, 500), (40, 1000)];
        for (level, bonus) in bonuses {
            let effects = resolve(EntityKind::PlayerBullet, EntityKind::Boss, &ctx(level, 0, 1));
            assert_eq!(
                effects,
                vec![
                    Effect::Destroy(Side::A),
                    Effect::DamageBoss(Side::B),
                    Effect::Destroy(Side::B),
                    Effect::AwardScore(bonus),
                    Effect::CompleteLevel,
                ],
                "level {level}"
            );
        }
    }

    #[test]
    fn test_kamikaze_is_immune() {
        let effects = resolve(EntityKind::KamikazeAlien, EntityKind::PlayerBullet, &ctx(13, 8, 0));
        assert_eq!(effects, vec![Effect::Destroy(Side::B)]);
    }

    #[test]
    fn test_player_contacts() {
        for hostile in [EntityKind::StandardAlien, EntityKind::KamikazeAlien, EntityKind::Boss] {
            assert_eq!(
                resolve(EntityKind::Player, hostile, &ctx(1, 0, 0)),
                vec![Effect::LoseLife]
            );
        }
        assert_eq!(
            resolve(
                EntityKind::AlienBullet { power_up: false },
                EntityKind::Player,
                &ctx(1, 0, 0)
            ),
            vec![Effect::LoseLife, Effect::Destroy(Side::A)]
        );
        assert_eq!(
            resolve(
                EntityKind::Player,
                EntityKind::AlienBullet { power_up: true },
                &ctx(1, 0, 0)
            ),
            vec![
                Effect::GrantRapidFire(RAPID_FIRE_CHARGES),
                Effect::Destroy(Side::B)
            ]
        );
    }

    #[test]
    fn test_unrelated_pairs_do_nothing() {
        let c = ctx(1, 0, 0);
        assert!(resolve(EntityKind::PlayerBullet, EntityKind::PlayerBullet, &c).is_empty());
        assert!(resolve(
            EntityKind::StandardAlien,
            EntityKind::AlienBullet { power_up: false },
            &c
        )
        .is_empty());
        assert!(resolve(EntityKind::Player, EntityKind::PlayerBullet, &c).is_empty());
    }
}
