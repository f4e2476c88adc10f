//! Per-step systems built on top of the component stores.

use serde::{Deserialize, Serialize};

use crate::components::{Position, Velocity};
use crate::world::World;

/// Playfield limits used by [`bounce_system`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 440.0,
        }
    }
}

/// Add velocity to position for every alive entity that has both.
pub fn movement_system(world: &mut World) {
    let World {
        registry,
        components,
    } = world;

    let moves: Vec<_> = match components.store::<Velocity>() {
        Some(velocities) => velocities
            .iter()
            .filter(|(entity, _)| registry.is_alive(*entity))
            .map(|(entity, vel)| (entity, *vel))
            .collect(),
        None => return,
    };

    let Some(positions) = components.store_mut::<Position>() else {
        return;
    };
    for (entity, vel) in moves {
        if let Some(pos) = positions.get_mut(entity) {
            pos.x += vel.x;
            pos.y += vel.y;
        }
    }
}

/// Reflect the velocity of entities with the given tag when they leave `bounds`.
pub fn bounce_system(world: &mut World, tag: &str, bounds: Bounds) {
    for entity in world.tags().entities_with_tag(tag) {
        let Some(pos) = world.get_live::<Position>(entity).copied() else {
            continue;
        };
        let Some(vel) = world.get_live_mut::<Velocity>(entity) else {
            continue;
        };
        if pos.y > bounds.height || pos.y < 0.0 {
            vel.y = -vel.y;
        }
        if pos.x > bounds.width || pos.x < 0.0 {
            vel.x = -vel.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement() {
        let mut world = World::new();
        let mover = world.spawn(["enemy"]);
        let still = world.spawn(["player"]);
        world.insert(mover, Position::new(10.0, 10.0));
        world.insert(mover, Velocity::new(2.0, -1.0));
        world.insert(still, Position::new(0.0, 0.0));

        movement_system(&mut world);

        assert_eq!(world.get_live::<Position>(mover), Some(&Position::new(12.0, 9.0)));
        assert_eq!(world.get_live::<Position>(still), Some(&Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_movement_skips_dead() {
        let mut world = World::new();
        let e = world.spawn(["enemy"]);
        world.insert(e, Position::new(0.0, 0.0));
        world.insert(e, Velocity::new(1.0, 1.0));
        world.destroy(e);

        movement_system(&mut world);

        assert_eq!(world.components.get::<Position>(e), Some(&Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_movement_without_stores() {
        let mut world = World::new();
        world.spawn(["player"]);
        movement_system(&mut world);
    }

    #[test]
    fn test_bounce() {
        let mut world = World::new();
        let enemy = world.spawn(["enemy"]);
        let player = world.spawn(["player"]);
        world.insert(enemy, Position::new(601.0, 100.0));
        world.insert(enemy, Velocity::new(3.0, 2.0));
        world.insert(player, Position::new(-5.0, -5.0));
        world.insert(player, Velocity::new(-1.0, -1.0));

        bounce_system(&mut world, "enemy", Bounds::default());

        assert_eq!(world.get_live::<Velocity>(enemy), Some(&Velocity::new(-3.0, 2.0)));
        assert_eq!(world.get_live::<Velocity>(player), Some(&Velocity::new(-1.0, -1.0)));
    }
}
