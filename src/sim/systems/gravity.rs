use crate::sim::entities::Player;
use crate::sim::state::World;
use crate::sim::system::System;

/// Integrates downward acceleration into the player's vertical motion.
/// No terminal velocity.
pub struct GravitySystem;

impl System for GravitySystem {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        let tuning = &world.settings.physics;
        let scaled = delta * tuning.delta_scale;
        let Some(player) = world.store.first_mut::<Player>() else {
            return;
        };

        world.physics.velocity_y += tuning.gravity * scaled;
        let mut pos = player.position();
        pos.y += world.physics.velocity_y * scaled;
        player.move_to(pos);
    }
}
