use crate::consts::TICK_DELTA;
use crate::sim::entities::Player;
use crate::sim::state::World;
use crate::sim::system::System;

/// Picks the running or jumping sheet from the grounded flag and advances it
pub struct PlayerAnimationSystem;

impl System for PlayerAnimationSystem {
    fn name(&self) -> &'static str {
        "player-animation"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        let grounded = world.physics.is_grounded;
        if let Some(player) = world.store.first_mut::<Player>() {
            player.set_jumping(!grounded);
            // One sheet step per display frame
            player.update_animation(delta / TICK_DELTA);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::PlayerPose;
    use crate::sim::testing::runner_world;

    #[test]
    fn test_pose_follows_grounding() {
        let mut world = runner_world(&[0.0; 10]);
        world.physics.is_grounded = false;
        PlayerAnimationSystem.update(&mut world, TICK_DELTA);
        assert_eq!(world.store.first::<Player>().unwrap().pose(), PlayerPose::Jumping);

        world.physics.is_grounded = true;
        PlayerAnimationSystem.update(&mut world, TICK_DELTA);
        assert_eq!(world.store.first::<Player>().unwrap().pose(), PlayerPose::Running);
    }

    #[test]
    fn test_celebration_sticks() {
        let mut world = runner_world(&[0.0; 10]);
        world.store.first_mut::<Player>().unwrap().set_celebrating(true);
        world.physics.is_grounded = false;
        PlayerAnimationSystem.update(&mut world, TICK_DELTA);
        assert_eq!(world.store.first::<Player>().unwrap().pose(), PlayerPose::Celebrating);
    }
}
