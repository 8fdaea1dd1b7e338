//! Moon Runner - run along a falling line graph all the way to the moon
//!
//! Core modules:
//! - `sim`: Gameplay simulation (entity store, system pipeline, curve physics)
//! - `scene`: Scene contract, scene engine and the runner scene
//! - `renderer`: Draw-list generation and the browser canvas painter
//! - `assets`: Texture manifest, preloading and sprite-sheet factories
//! - `input`: Keyboard event queue folded into per-tick snapshots
//! - `settings`: Data-driven tuning, persisted in LocalStorage on the web

pub mod assets;
pub mod error;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the browser ticker's nominal rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Tick delta units per elapsed millisecond
    pub const DELTA_PER_MS: f32 = 0.01;
    /// Delta handed to `Scene::update` for one fixed step
    pub const TICK_DELTA: f32 = SIM_DT * 1000.0 * DELTA_PER_MS;

    /// Virtual game area (the camera viewport)
    pub const VIRTUAL_WIDTH: f32 = 800.0;
    pub const VIRTUAL_HEIGHT: f32 = 600.0;

    /// Where the player first appears (feet position)
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 232.0;
    /// Visual scale of the egg sprites
    pub const PLAYER_SCALE: f32 = 0.25;
    /// Collision box, independent of the sprite scale
    pub const PLAYER_COLLISION_WIDTH: f32 = 40.0;
    pub const PLAYER_COLLISION_HEIGHT: f32 = 60.0;

    /// Render layers
    pub const MOON_Z: i32 = 10;
    pub const GRAPH_Z: i32 = 15;
    pub const PLAYER_Z: i32 = 20;
    pub const SWEAT_DROP_Z: i32 = 25;

    /// Curve stroke
    pub const GRAPH_COLOR: u32 = 0xf7931a;
    pub const GRAPH_LINE_WIDTH: f32 = 2.0;

    /// Sweat drop lifetime in ticks
    pub const SWEAT_DROP_LIFETIME: u32 = 30;
    /// Downward pull applied to sweat drops every tick
    pub const SWEAT_DROP_GRAVITY: f32 = 0.5;
}

/// Convert a curve slope (dy/dx, screen y down) to an angle in degrees
#[inline]
pub fn slope_to_degrees(slope: f32) -> f32 {
    slope.atan().to_degrees()
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_delta_matches_browser_ticker() {
        // 16.67ms frame * 0.01
        assert!((consts::TICK_DELTA - 0.16667).abs() < 0.0001);
    }

    #[test]
    fn test_slope_to_degrees() {
        assert!((slope_to_degrees(1.0) - 45.0).abs() < 0.001);
        assert!((slope_to_degrees(-1.0) + 45.0).abs() < 0.001);
        assert!(slope_to_degrees(-12.0) < -60.0);
    }
}
