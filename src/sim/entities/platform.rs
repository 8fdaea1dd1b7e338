use glam::Vec2;

use crate::sim::entity::{EntityData, EntityId, Node};

/// Solid rectangle the player can stand on
#[derive(Debug, Clone)]
pub struct Platform {
    id: EntityId,
    node: Node,
    pub color: u32,
}

impl Platform {
    pub fn new(id: EntityId, x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut node = Node::sized(Vec2::new(width, height));
        node.position = Vec2::new(x, y);
        Self {
            id,
            node,
            color: 0xffffff,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.node.position = Vec2::new(x, y);
    }
}

impl EntityData for Platform {
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
