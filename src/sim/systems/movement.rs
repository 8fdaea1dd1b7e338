//! Free arrow-key movement of the player (debug helper)

use glam::Vec2;

use crate::sim::entities::Player;
use crate::sim::state::World;
use crate::sim::system::System;

pub struct PlayerMovementSystem;

impl System for PlayerMovementSystem {
    fn name(&self) -> &'static str {
        "player-movement"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        let dir = Vec2::new(world.input.horizontal(), world.input.vertical());
        if dir == Vec2::ZERO {
            return;
        }
        let speed = world.settings.physics.move_speed;
        if let Some(player) = world.store.first_mut::<Player>() {
            let pos = player.position() + dir * speed * delta;
            player.move_to(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, Key};
    use crate::sim::testing::runner_world;

    #[test]
    fn test_moves_along_held_axes() {
        let mut world = runner_world(&[0.0; 10]);
        let start = world.store.first::<Player>().unwrap().position();
        world.input.apply(&[InputEvent::KeyDown(Key::Right), InputEvent::KeyDown(Key::Down)]);
        PlayerMovementSystem.update(&mut world, 0.5);
        let pos = world.store.first::<Player>().unwrap().position();
        assert_eq!(pos, start + Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut world = runner_world(&[0.0; 10]);
        let start = world.store.first::<Player>().unwrap().position();
        PlayerMovementSystem.update(&mut world, 0.5);
        assert_eq!(world.store.first::<Player>().unwrap().position(), start);
    }
}
