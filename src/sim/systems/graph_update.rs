//! Advances the curve and couples its slope to run speed
//!
//! While grounded on a climb steeper than the uphill cutoff, the scroll
//! slows to a crawl, the runner animates at reduced speed and sweats.
//! Reads the grounded flag left by the previous tick's collision pass.

use glam::Vec2;
use rand::Rng;

use crate::sim::entities::{Graph, Player, SweatDrop};
use crate::sim::state::World;
use crate::sim::system::System;
use crate::slope_to_degrees;

#[derive(Debug, Default)]
pub struct GraphUpdateSystem {
    /// Strained ticks since the last sweat drop
    since_sweat: u32,
    /// Scrolling ticks since the curve last grew
    since_growth: u32,
}

impl GraphUpdateSystem {
    fn spawn_sweat_drop(world: &mut World, feet_x: f32, top_y: f32) {
        let rng = &mut world.rng;
        let position = Vec2::new(
            feet_x - 5.0 + (rng.random::<f32>() - 0.5) * 5.0,
            top_y - 5.0 + rng.random::<f32>() * 10.0,
        );
        let velocity = Vec2::new(
            -5.0 - rng.random::<f32>() * 5.0,
            -1.0 - rng.random::<f32>() * 5.0,
        );
        let id = world
            .store
            .spawn(|id| SweatDrop::new(id, position, velocity));
        log::debug!("Spawned sweat drop {}", id);
    }

    /// Scroll multiplier for this tick, adjusting the player's animation
    fn strain(&mut self, world: &mut World) -> f32 {
        let curve = world.settings.curve.clone();
        let grounded = world.physics.is_grounded;

        let (Some(player), Some(graph)) = (world.store.first::<Player>(), world.store.first::<Graph>())
        else {
            return 1.0;
        };
        let (feet_x, top_y) = (player.x(), player.top_y());
        let slope = graph.slope_at_x(graph.local_x(feet_x));

        if !grounded {
            return 1.0;
        }

        let strained = slope.is_some_and(|s| slope_to_degrees(s) < curve.uphill_cutoff_degrees);
        let animation_speed = if strained {
            curve.strain_animation_speed
        } else {
            1.0
        };
        if let Some(player) = world.store.first_mut::<Player>() {
            player.set_animation_speed_multiplier(animation_speed);
        }

        if !strained {
            self.since_sweat = 0;
            return 1.0;
        }

        self.since_sweat += 1;
        if self.since_sweat >= curve.sweat_interval_ticks {
            self.since_sweat = 0;
            Self::spawn_sweat_drop(world, feet_x, top_y);
        }
        curve.strain_speed_multiplier
    }

    fn grow(&mut self, world: &mut World) {
        let interval = world.settings.curve.growth_interval_ticks;
        if interval == 0 {
            return;
        }
        self.since_growth += 1;
        if self.since_growth < interval {
            return;
        }
        self.since_growth = 0;
        let max_step = world.settings.curve.max_sample_step;
        let World { store, rng, .. } = world;
        if let Some(graph) = store.first_mut::<Graph>() {
            graph.generate_samples(rng, 1, max_step);
        }
    }
}

impl System for GraphUpdateSystem {
    fn name(&self) -> &'static str {
        "graph-update"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        if world.store.first::<Graph>().is_none() {
            return;
        }

        if world.physics.game_won {
            let slow = world.settings.curve.strain_animation_speed;
            if let Some(player) = world.store.first_mut::<Player>() {
                player.set_animation_speed_multiplier(slow);
            }
            return;
        }

        let multiplier = self.strain(world);
        self.grow(world);
        if let Some(graph) = world.store.first_mut::<Graph>() {
            graph.update_scroll(delta, multiplier);
        }
    }
}
