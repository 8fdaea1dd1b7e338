//! Texture manifest, preloading and sprite-sheet factories
//!
//! Textures are described by a JSON manifest. A scene preloads the names it
//! needs; using a texture that was never preloaded is a hard error, the same
//! as asking for a name the manifest does not list.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::sim::sprite::AnimatedSprite;

/// Manifest bundled with the game
const BUILTIN_MANIFEST: &str = include_str!("../assets/manifest.json");

/// Asset manifest describing every texture the game can load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub textures: Vec<TextureDescriptor>,
}

/// A single texture file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup name (e.g. "running_egg")
    pub name: String,
    /// Path relative to the page root
    pub path: String,
    /// Pixel size of the whole image
    pub width: f32,
    pub height: f32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GameError::Manifest)
    }

    /// The manifest shipped in `assets/manifest.json`
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MANIFEST)
    }
}

/// Resolved texture reference handed to entities
#[derive(Debug, Clone, PartialEq)]
pub struct TextureHandle {
    pub name: String,
    pub path: String,
    pub size: Vec2,
}

impl TextureHandle {
    pub fn new(name: impl Into<String>, path: impl Into<String>, size: Vec2) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }
}

/// Horizontal sprite-sheet layout
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub frames: u32,
    pub frame_width: f32,
    pub frame_height: f32,
    /// Frames advanced per display frame
    pub animation_speed: f32,
}

/// Registry of named textures, built from an [`AssetManifest`]
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    textures: HashMap<String, TextureHandle>,
    loaded: HashSet<String>,
}

impl AssetRegistry {
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let textures = manifest
            .textures
            .iter()
            .map(|t| {
                (
                    t.name.clone(),
                    TextureHandle::new(t.name.clone(), t.path.clone(), Vec2::new(t.width, t.height)),
                )
            })
            .collect();
        Self {
            textures,
            loaded: HashSet::new(),
        }
    }

    /// Mark textures as loaded. Fails on the first name the manifest lacks.
    pub fn preload(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.textures.contains_key(*name) {
                return Err(GameError::UnknownAsset((*name).to_string()));
            }
            self.loaded.insert((*name).to_string());
        }
        log::info!("Preloaded {} textures", names.len());
        Ok(())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    /// Fetch a preloaded texture
    pub fn texture(&self, name: &str) -> Result<TextureHandle> {
        let handle = self
            .textures
            .get(name)
            .ok_or_else(|| GameError::UnknownAsset(name.to_string()))?;
        if !self.loaded.contains(name) {
            return Err(GameError::AssetNotLoaded(name.to_string()));
        }
        Ok(handle.clone())
    }

    /// Build an animated sprite from a preloaded horizontal sheet
    pub fn animated_sprite(&self, name: &str, layout: SheetLayout) -> Result<AnimatedSprite> {
        let texture = self.texture(name)?;
        Ok(AnimatedSprite::new(
            texture,
            layout.frames,
            Vec2::new(layout.frame_width, layout.frame_height),
            layout.animation_speed,
        ))
    }

    /// Every known texture, loaded or not
    pub fn handles(&self) -> impl Iterator<Item = &TextureHandle> {
        self.textures.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AssetRegistry {
        AssetRegistry::from_manifest(&AssetManifest::builtin().unwrap())
    }

    #[test]
    fn test_builtin_manifest_parses() {
        let manifest = AssetManifest::builtin().unwrap();
        let names: Vec<_> = manifest.textures.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"running_egg"));
        assert!(names.contains(&"moon"));
    }

    #[test]
    fn test_bad_manifest_is_an_error() {
        let err = AssetManifest::from_json(r#"{ "textures": 3 }"#).unwrap_err();
        assert!(matches!(err, GameError::Manifest(_)));
    }

    #[test]
    fn test_preload_unknown_name_fails() {
        let mut reg = registry();
        let err = reg.preload(&["moon", "nyan_cat"]).unwrap_err();
        assert!(matches!(err, GameError::UnknownAsset(name) if name == "nyan_cat"));
    }

    #[test]
    fn test_texture_requires_preload() {
        let mut reg = registry();
        assert!(matches!(reg.texture("moon"), Err(GameError::AssetNotLoaded(_))));
        reg.preload(&["moon"]).unwrap();
        let moon = reg.texture("moon").unwrap();
        assert_eq!(moon.size, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_animated_sprite_factory() {
        let mut reg = registry();
        reg.preload(&["running_egg"]).unwrap();
        let sprite = reg
            .animated_sprite(
                "running_egg",
                SheetLayout {
                    frames: 3,
                    frame_width: 237.0,
                    frame_height: 269.0,
                    animation_speed: 0.15,
                },
            )
            .unwrap();
        assert_eq!(sprite.frame_count(), 3);
        assert_eq!(sprite.frame_size(), Vec2::new(237.0, 269.0));
    }
}
