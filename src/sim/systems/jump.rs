//! Edge-triggered jump with a limited air-jump budget

use crate::input::InputSnapshot;
use crate::sim::state::{PhysicsState, World};
use crate::sim::system::System;
use crate::settings::PhysicsTuning;

#[derive(Debug, Default)]
pub struct JumpSystem {
    jump_count: u32,
}

impl JumpSystem {
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    fn try_jump(&mut self, physics: &mut PhysicsState, input: &mut InputSnapshot, tuning: &PhysicsTuning) {
        if physics.is_grounded {
            self.jump_count = 0;
        }

        if !input.take_jump_press() || self.jump_count >= tuning.max_jumps {
            return;
        }

        // Holding up doubles the impulse
        physics.velocity_y = if input.up {
            tuning.boosted_jump_force
        } else {
            tuning.jump_force
        };
        physics.is_grounded = false;
        self.jump_count += 1;
    }
}

impl System for JumpSystem {
    fn name(&self) -> &'static str {
        "jump"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        if !world.game.is_playing() {
            return;
        }
        let World {
            physics,
            input,
            settings,
            ..
        } = world;
        self.try_jump(physics, input, &settings.physics);
    }
}
