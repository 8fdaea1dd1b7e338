//! Short-lived droplet flung off the player while straining uphill

use glam::Vec2;

use crate::consts::{SWEAT_DROP_GRAVITY, SWEAT_DROP_LIFETIME, SWEAT_DROP_Z};
use crate::sim::entity::{EntityData, EntityId, Node};

pub const SWEAT_DROP_COLOR: u32 = 0xa0d8ef;

#[derive(Debug, Clone)]
pub struct SweatDrop {
    id: EntityId,
    node: Node,
    pub velocity: Vec2,
    /// Remaining ticks
    pub lifetime: u32,
    pub max_lifetime: u32,
}

impl SweatDrop {
    pub fn new(id: EntityId, position: Vec2, velocity: Vec2) -> Self {
        let node = Node {
            position,
            size: Vec2::new(4.0, 8.0),
            anchor: Vec2::splat(0.5),
            alpha: 0.9,
            z_index: SWEAT_DROP_Z,
            ..Node::default()
        };
        Self {
            id,
            node,
            velocity,
            lifetime: SWEAT_DROP_LIFETIME,
            max_lifetime: SWEAT_DROP_LIFETIME,
        }
    }

    /// Integrate one tick and fade out
    pub fn update(&mut self, delta: f32) {
        self.node.position.x += self.velocity.x * delta;
        self.velocity.y += SWEAT_DROP_GRAVITY;
        self.node.position.y += self.velocity.y * delta;

        self.lifetime = self.lifetime.saturating_sub(1);
        self.node.alpha = self.lifetime as f32 / self.max_lifetime.max(1) as f32;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }
}

impl EntityData for SweatDrop {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_and_fades() {
        let mut drop = SweatDrop::new(EntityId(1), Vec2::new(10.0, 10.0), Vec2::new(-5.0, -2.0));
        drop.update(1.0);
        assert_eq!(drop.node().position, Vec2::new(5.0, 8.5));
        assert_eq!(drop.velocity.y, -1.5);
        assert_eq!(drop.lifetime, SWEAT_DROP_LIFETIME - 1);
        assert!(drop.node().alpha < 1.0);
    }

    #[test]
    fn test_expires_after_lifetime() {
        let mut drop = SweatDrop::new(EntityId(1), Vec2::ZERO, Vec2::ZERO);
        for _ in 0..SWEAT_DROP_LIFETIME - 1 {
            drop.update(0.1);
        }
        assert!(!drop.is_expired());
        drop.update(0.1);
        assert!(drop.is_expired());
        assert_eq!(drop.node().alpha, 0.0);
    }
}
