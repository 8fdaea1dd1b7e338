//! Game settings and tuning
//!
//! Persisted in LocalStorage on the web. Every field has a default, so a
//! partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Player physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration (pixels/tick²)
    pub gravity: f32,
    /// Scale applied to the tick delta before integrating
    pub delta_scale: f32,
    /// Jump impulse (negative is up)
    pub jump_force: f32,
    /// Jump impulse while the up modifier is held
    pub boosted_jump_force: f32,
    /// Jumps allowed before touching the ground again
    pub max_jumps: u32,
    /// Debug arrow-key movement speed
    pub move_speed: f32,
    /// Falling offset at which the ground stops being solid
    pub decay_threshold: f32,
    /// Feet below this y lose the run
    pub death_line_y: f32,
    /// A grounded player stays attached to ground this far below its feet
    pub ground_snap: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            delta_scale: 0.125,
            jump_force: -300.0,
            boosted_jump_force: -600.0,
            max_jumps: 2,
            move_speed: 10.0,
            decay_threshold: 30.0,
            death_line_y: 600.0,
            ground_snap: 6.0,
        }
    }
}

/// Scrolling curve tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveTuning {
    /// Horizontal distance between samples
    pub point_spacing: f32,
    /// Scroll ticks per sample, used when mapping x back to a sample index
    pub frames_per_point: f32,
    /// Base falling speed of samples behind the fall line
    pub fall_speed: f32,
    /// Screen x left of which samples start falling
    pub fall_start_distance: f32,
    /// Extra falling speed per pixel behind the fall line
    pub fall_acceleration: f32,
    /// Slopes steeper than this (degrees, negative is uphill) strain the runner
    pub uphill_cutoff_degrees: f32,
    /// Scroll speed multiplier while straining
    pub strain_speed_multiplier: f32,
    /// Animation playback multiplier while straining
    pub strain_animation_speed: f32,
    /// Ticks between sweat drops while straining
    pub sweat_interval_ticks: u32,
    /// Random samples appended after the opening profile
    pub generated_samples: u32,
    /// Largest height change between generated samples
    pub max_sample_step: f32,
    /// Append a random sample every N scrolling ticks (0 disables growth)
    pub growth_interval_ticks: u32,
}

impl Default for CurveTuning {
    fn default() -> Self {
        Self {
            point_spacing: 3.0,
            frames_per_point: 3.0,
            fall_speed: 0.5,
            fall_start_distance: 60.0,
            fall_acceleration: 0.02,
            uphill_cutoff_degrees: -60.0,
            strain_speed_multiplier: 0.1,
            strain_animation_speed: 0.5,
            sweat_interval_ticks: 10,
            generated_samples: 0,
            max_sample_step: 6.0,
            growth_interval_ticks: 0,
        }
    }
}

/// Moon (goal) tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonTuning {
    /// Sprite scale
    pub scale: f32,
    /// Fraction of the rendered radius that counts as landing area
    pub landing_fraction: f32,
    /// Offset from the curve's end point
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for MoonTuning {
    fn default() -> Self {
        Self {
            scale: 0.3,
            landing_fraction: 0.8,
            offset_x: 150.0,
            offset_y: 150.0,
        }
    }
}

/// A solid rectangle placed in the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsTuning,
    pub curve: CurveTuning,
    pub moon: MoonTuning,
    /// Extra platforms (the default level has none)
    pub platforms: Vec<PlatformSpec>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Outline collision boxes
    pub show_collision_boxes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsTuning::default(),
            curve: CurveTuning::default(),
            moon: MoonTuning::default(),
            platforms: Vec::new(),
            show_fps: true,
            show_collision_boxes: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "moon_runner_settings";

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GameError::Settings)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(GameError::Settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds have no storage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
