//! Fixtures shared by the system tests

use glam::Vec2;

use crate::assets::TextureHandle;
use crate::consts::{PLAYER_SPAWN_X, PLAYER_SPAWN_Y};
use crate::settings::Settings;
use crate::sim::entities::{Camera, Graph, Moon, Player, PlayerSprites, PlayerSpawn};
use crate::sim::sprite::AnimatedSprite;
use crate::sim::state::World;

pub(crate) fn test_sprites() -> PlayerSprites {
    let sheet = |name: &str, frames: u32, w: f32, h: f32, speed: f32| {
        let tex = TextureHandle::new(name, format!("{name}.png"), Vec2::new(w * frames as f32, h));
        AnimatedSprite::new(tex, frames, Vec2::new(w, h), speed)
    };
    PlayerSprites {
        running: sheet("running_egg", 3, 237.0, 269.0, 0.15),
        jumping: sheet("jumping_egg", 2, 233.25, 400.0, 0.25),
        celebrating: sheet("celebration_egg", 2, 409.0, 386.0, 0.1),
    }
}

/// World with a camera, a spawn marker, a curve over `samples` and a
/// stopped player at the spawn point
pub(crate) fn runner_world(samples: &[f32]) -> World {
    let mut world = World::new(Settings::default(), 42);
    let curve = world.settings.curve.clone();
    let store = &mut world.store;

    store.spawn(Camera::new);
    store.spawn(|id| PlayerSpawn::new(id, PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
    store.spawn(|id| Graph::new(id, &curve, samples));
    store.spawn(|id| {
        let mut player = Player::new(id, test_sprites());
        player.move_to(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        player.stop_animation();
        player
    });
    world
}

/// Add a moon centered at `center`
pub(crate) fn with_moon(mut world: World, center: Vec2) -> World {
    let tex = TextureHandle::new("moon", "moon.png", Vec2::new(400.0, 400.0));
    let tuning = world.settings.moon.clone();
    world.store.spawn(|id| {
        let mut moon = Moon::new(id, tex, tuning.scale, tuning.landing_fraction);
        moon.move_to(center);
        moon
    });
    world
}
