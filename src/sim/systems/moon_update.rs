use glam::Vec2;

use crate::sim::entities::{Graph, Moon};
use crate::sim::state::World;
use crate::sim::system::System;

/// Keeps the moon parked at a fixed offset from the end of the curve
pub struct MoonUpdateSystem;

impl System for MoonUpdateSystem {
    fn name(&self) -> &'static str {
        "moon-update"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        let Some(end) = world.store.first::<Graph>().and_then(Graph::end_point) else {
            return;
        };
        let tuning = &world.settings.moon;
        let offset = Vec2::new(tuning.offset_x, tuning.offset_y);
        if let Some(moon) = world.store.first_mut::<Moon>() {
            moon.move_to(end + offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testing::{runner_world, with_moon};

    #[test]
    fn test_tracks_curve_end() {
        let mut world = with_moon(runner_world(&[0.0, -3.0, -6.0]), Vec2::ZERO);
        MoonUpdateSystem.update(&mut world, 0.16);
        assert_eq!(world.store.first::<Moon>().unwrap().center(), Vec2::new(156.0, 144.0));

        world.store.first_mut::<Graph>().unwrap().update_scroll(0.16, 1.0);
        MoonUpdateSystem.update(&mut world, 0.16);
        assert_eq!(world.store.first::<Moon>().unwrap().center(), Vec2::new(155.0, 144.0));
    }
}
