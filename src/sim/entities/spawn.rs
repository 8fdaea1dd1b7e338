use glam::Vec2;

use crate::sim::entity::{EntityData, EntityId, Node};

/// Invisible marker holding where the player starts
#[derive(Debug, Clone)]
pub struct PlayerSpawn {
    id: EntityId,
    node: Node,
}

impl PlayerSpawn {
    pub fn new(id: EntityId, x: f32, y: f32) -> Self {
        let node = Node {
            position: Vec2::new(x, y),
            visible: false,
            ..Node::default()
        };
        Self { id, node }
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.node.position
    }
}

impl EntityData for PlayerSpawn {
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
