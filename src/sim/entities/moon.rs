//! The goal: a circular landing target parked past the end of the curve

use glam::Vec2;

use crate::assets::TextureHandle;
use crate::consts::MOON_Z;
use crate::sim::entity::{EntityData, EntityId, Node};

#[derive(Debug, Clone)]
pub struct Moon {
    id: EntityId,
    node: Node,
    texture: TextureHandle,
    /// Fraction of the rendered radius that counts as landing area
    landing_fraction: f32,
}

impl Moon {
    pub fn new(id: EntityId, texture: TextureHandle, scale: f32, landing_fraction: f32) -> Self {
        let node = Node {
            size: texture.size,
            scale: Vec2::splat(scale),
            anchor: Vec2::splat(0.5),
            z_index: MOON_Z,
            ..Node::default()
        };
        Self {
            id,
            node,
            texture,
            landing_fraction,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.node.position = position;
    }

    pub fn center(&self) -> Vec2 {
        self.node.position
    }

    /// Rendered radius
    pub fn radius(&self) -> f32 {
        self.node.scaled_size().x / 2.0
    }

    pub fn landing_radius(&self) -> f32 {
        self.radius() * self.landing_fraction
    }

    /// Surface y at a horizontal position, if it lies over the landing area
    pub fn surface_y_at(&self, x: f32) -> Option<f32> {
        let r = self.landing_radius();
        let dx = (x - self.center().x).abs();
        if dx > r {
            return None;
        }
        Some(self.center().y - (r * r - dx * dx).sqrt())
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }
}

impl EntityData for Moon {
    fn id(&self) -> EntityId {
        self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}
