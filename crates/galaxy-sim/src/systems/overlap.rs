//! Axis-aligned overlap detection.
//!
//! Produces the same overlap pairs a host physics layer would deliver.
//! Only pairs the combat policy cares about are reported: player bullets
//! against alien bodies, and the player against hostile bodies and enemy
//! bullets.

use hecs::{Entity, World};

use galaxy_core::components::BodySize;
use galaxy_core::enums::EntityKind;
use galaxy_core::types::Position;

#[derive(Debug, Clone, Copy)]
struct Body {
    entity: Entity,
    position: Position,
    size: BodySize,
}

impl Body {
    fn overlaps(&self, other: &Body) -> bool {
        let dx = (self.position.x - other.position.x).abs();
        let dy = (self.position.y - other.position.y).abs();
        dx * 2.0 < self.size.width + other.size.width
            && dy * 2.0 < self.size.height + other.size.height
    }
}

/// Append every overlapping pair to `out`, player-side entity first.
pub fn detect(world: &World, out: &mut Vec<(Entity, Entity)>) {
    let mut players = Vec::new();
    let mut player_bullets = Vec::new();
    let mut bodies = Vec::new();
    let mut enemy_bullets = Vec::new();

    for (entity, (kind, position, size)) in world
        .query::<(&EntityKind, &Position, &BodySize)>()
        .iter()
    {
        let body = Body {
            entity,
            position: *position,
            size: *size,
        };
        match kind {
            EntityKind::Player => players.push(body),
            EntityKind::PlayerBullet => player_bullets.push(body),
            EntityKind::AlienBullet { .. } => enemy_bullets.push(body),
            EntityKind::StandardAlien | EntityKind::KamikazeAlien | EntityKind::Boss => {
                bodies.push(body)
            }
        }
    }

    for bullet in &player_bullets {
        for body in &bodies {
            if bullet.overlaps(body) {
                out.push((bullet.entity, body.entity));
            }
        }
    }
    for player in &players {
        for other in bodies.iter().chain(enemy_bullets.iter()) {
            if player.overlaps(other) {
                out.push((player.entity, other.entity));
            }
        }
    }
}
