//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Bounded bodies bounce elastically off the arena walls.

use hecs::World;

use galaxy_core::components::{BodySize, Bounded};
use galaxy_core::constants::DT;
use galaxy_core::types::{Arena, Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}

/// Reflect bounded bodies that crossed a wall back inside the arena.
pub fn bounce(world: &mut World, arena: &Arena) {
    for (_entity, (pos, vel, size, _bounded)) in
        world.query_mut::<(&mut Position, &mut Velocity, &BodySize, &Bounded)>()
    {
        let (half_w, half_h) = (size.width / 2.0, size.height / 2.0);
        if pos.x - half_w < 0.0 {
            pos.x = half_w;
            vel.x = vel.x.abs();
        } else if pos.x + half_w > arena.width {
            pos.x = arena.width - half_w;
            vel.x = -vel.x.abs();
        }
        if pos.y - half_h < 0.0 {
            pos.y = half_h;
            vel.y = vel.y.abs();
        } else if pos.y + half_h > arena.height {
            pos.y = arena.height - half_h;
            vel.y = -vel.y.abs();
        }
    }
}
