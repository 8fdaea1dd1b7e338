//! Frame-based sprite-sheet animation

use glam::Vec2;

use crate::assets::TextureHandle;

/// Horizontal sprite sheet played back at a fractional frame rate
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSprite {
    texture: TextureHandle,
    frames: u32,
    frame_size: Vec2,
    /// Frames advanced per display frame at multiplier 1.0
    animation_speed: f32,
    speed_multiplier: f32,
    /// Fractional frame cursor
    cursor: f32,
    playing: bool,
}

impl AnimatedSprite {
    pub fn new(texture: TextureHandle, frames: u32, frame_size: Vec2, animation_speed: f32) -> Self {
        Self {
            texture,
            frames: frames.max(1),
            frame_size,
            animation_speed,
            speed_multiplier: 1.0,
            cursor: 0.0,
            playing: true,
        }
    }

    /// Advance by `display_frames` display frames (may be fractional)
    pub fn update(&mut self, display_frames: f32) {
        if !self.playing {
            return;
        }
        let step = self.animation_speed * self.speed_multiplier * display_frames;
        self.cursor = (self.cursor + step).rem_euclid(self.frames as f32);
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Restart from the first frame
    pub fn rewind(&mut self) {
        self.cursor = 0.0;
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn current_frame(&self) -> u32 {
        (self.cursor as u32).min(self.frames - 1)
    }

    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Source rectangle of the current frame as (x, y, w, h)
    pub fn source_rect(&self) -> (f32, f32, f32, f32) {
        let x = self.current_frame() as f32 * self.frame_size.x;
        (x, 0.0, self.frame_size.x, self.frame_size.y)
    }
}
