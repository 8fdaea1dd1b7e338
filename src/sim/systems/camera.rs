use crate::sim::entities::{Camera, Player};
use crate::sim::entity::EntityData;
use crate::sim::state::World;
use crate::sim::system::System;

/// Attaches the camera to the player once
#[derive(Debug, Default)]
pub struct CamFollowPlayerSystem {
    attached: bool,
}

impl System for CamFollowPlayerSystem {
    fn name(&self) -> &'static str {
        "cam-follow-player"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        if self.attached {
            return;
        }
        let Some(player_id) = world.store.first::<Player>().map(|p| p.id()) else {
            return;
        };
        if let Some(camera) = world.store.first_mut::<Camera>() {
            camera.follow(player_id, 0.0);
            self.attached = true;
            log::debug!("Camera following {}", player_id);
        }
    }
}

/// Moves the camera toward whatever it follows
pub struct CameraUpdateSystem;

impl System for CameraUpdateSystem {
    fn name(&self) -> &'static str {
        "camera-update"
    }

    fn update(&mut self, world: &mut World, delta: f32) {
        let Some(target_id) = world.store.first::<Camera>().and_then(Camera::follow_target) else {
            return;
        };
        let target = world.store.get_by_id(target_id).map(|e| e.node().position);
        if let Some(camera) = world.store.first_mut::<Camera>() {
            camera.update(delta, target);
        }
    }
}
