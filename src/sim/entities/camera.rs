//! Viewport over the virtual game area
//!
//! The camera follows another entity. With a follow speed of 0 it snaps to
//! the target each update; otherwise it moves at most `speed * delta` pixels
//! toward it.

use glam::Vec2;

use crate::consts::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::sim::entity::{EntityData, EntityId, Node, Rect};

/// Viewport update rate relative to the tick delta
const VIEWPORT_RATE: f32 = 1.15;

#[derive(Debug, Clone)]
pub struct Camera {
    id: EntityId,
    node: Node,
    viewport: Vec2,
    center: Vec2,
    follow: Option<EntityId>,
    follow_speed: f32,
}

impl Camera {
    pub fn new(id: EntityId) -> Self {
        let viewport = Vec2::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT);
        let node = Node {
            visible: false,
            ..Node::default()
        };
        Self {
            id,
            node,
            viewport,
            center: viewport / 2.0,
            follow: None,
            follow_speed: 0.0,
        }
    }

    pub fn follow(&mut self, target: EntityId, speed: f32) {
        self.follow = Some(target);
        self.follow_speed = speed.max(0.0);
    }

    pub fn follow_target(&self) -> Option<EntityId> {
        self.follow
    }

    pub fn move_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Move toward the followed entity's position
    pub fn update(&mut self, delta: f32, target: Option<Vec2>) {
        let Some(target) = target else {
            return;
        };
        if self.follow_speed == 0.0 {
            self.center = target;
            return;
        }
        let to_target = target - self.center;
        let max_step = self.follow_speed * delta * VIEWPORT_RATE;
        if to_target.length() <= max_step {
            self.center = target;
        } else {
            self.center += to_target.normalize_or_zero() * max_step;
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// World position of the viewport's top-left corner
    pub fn zero_pos(&self) -> Vec2 {
        self.center - self.viewport / 2.0
    }

    pub fn visible_bounds(&self) -> Rect {
        let origin = self.zero_pos();
        Rect::new(origin.x, origin.y, self.viewport.x, self.viewport.y)
    }
}

impl EntityData for Camera {
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
