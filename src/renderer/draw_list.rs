//! Draw-list generation
//!
//! The scene is flattened into a list of backend-agnostic commands in
//! screen space (camera offset already applied). The canvas painter on the
//! web and the headless demo natively both consume the same list.

use glam::Vec2;

use crate::consts::{GRAPH_COLOR, GRAPH_LINE_WIDTH};
use crate::sim::entities::sweat_drop::SWEAT_DROP_COLOR;
use crate::sim::entities::{Camera, Moon, Player};
use crate::sim::{Entity, EntityData, EntityStore, Rect};

/// Debug outline color for collision shapes
const DEBUG_COLOR: u32 = 0xff00ff;

/// A single paint operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<Vec2>,
        color: u32,
        width: f32,
    },
    Rect {
        rect: Rect,
        color: u32,
        alpha: f32,
    },
    /// Stroked rectangle (debug shapes)
    Outline { rect: Rect, color: u32 },
    /// Stroked circle (debug shapes)
    Circle {
        center: Vec2,
        radius: f32,
        color: u32,
    },
    Sprite {
        /// Texture path relative to the page root
        path: String,
        /// Source rectangle inside the texture (x, y, w, h)
        source: (f32, f32, f32, f32),
        dest: Rect,
        alpha: f32,
    },
    /// Centered text in screen space (prompts)
    Text {
        text: String,
        position: Vec2,
        color: u32,
        size: f32,
    },
}

/// Ordered paint commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    /// World position of the screen's top-left corner
    camera_offset: Vec2,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn set_camera_offset(&mut self, offset: Vec2) {
        self.camera_offset = offset;
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera_offset
    }

    fn to_screen(&self, p: Vec2) -> Vec2 {
        p - self.camera_offset
    }

    fn rect_to_screen(&self, r: Rect) -> Rect {
        let p = self.to_screen(Vec2::new(r.x, r.y));
        Rect::new(p.x, p.y, r.width, r.height)
    }

    pub fn polyline(&mut self, points: &[Vec2], color: u32, width: f32) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.commands.push(DrawCommand::Polyline {
            points,
            color,
            width,
        });
    }

    pub fn rect(&mut self, rect: Rect, color: u32, alpha: f32) {
        let rect = self.rect_to_screen(rect);
        self.commands.push(DrawCommand::Rect { rect, color, alpha });
    }

    pub fn outline(&mut self, rect: Rect, color: u32) {
        let rect = self.rect_to_screen(rect);
        self.commands.push(DrawCommand::Outline { rect, color });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: u32) {
        let center = self.to_screen(center);
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn sprite(&mut self, path: &str, source: (f32, f32, f32, f32), dest: Rect, alpha: f32) {
        let dest = self.rect_to_screen(dest);
        self.commands.push(DrawCommand::Sprite {
            path: path.to_string(),
            source,
            dest,
            alpha,
        });
    }

    /// Screen-space text, unaffected by the camera
    pub fn text(&mut self, text: &str, position: Vec2, color: u32, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
            size,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rebuild from the store: camera offset from the first camera, then
    /// every visible entity in stage order.
    pub fn build(&mut self, store: &mut EntityStore, show_collision_boxes: bool) {
        self.clear();
        self.camera_offset = store.first::<Camera>().map(Camera::zero_pos).unwrap_or(Vec2::ZERO);

        for id in store.draw_order() {
            let Some(entity) = store.get_by_id(id) else {
                continue;
            };
            if !entity.node().visible {
                continue;
            }
            self.push_entity(entity);
        }

        if show_collision_boxes {
            if let Some(player) = store.first::<Player>() {
                self.outline(player.rect(), DEBUG_COLOR);
            }
            if let Some(moon) = store.first::<Moon>() {
                self.circle(moon.center(), moon.landing_radius(), DEBUG_COLOR);
            }
        }
    }

    fn push_entity(&mut self, entity: &Entity) {
        let node = entity.node();
        match entity {
            Entity::Graph(graph) => {
                self.polyline(&graph.screen_points(), GRAPH_COLOR, GRAPH_LINE_WIDTH);
            }
            Entity::Moon(moon) => {
                let tex = moon.texture();
                self.sprite(&tex.path, (0.0, 0.0, tex.size.x, tex.size.y), node.bounds(), node.alpha);
            }
            Entity::Platform(platform) => {
                self.rect(node.bounds(), platform.color, node.alpha);
            }
            Entity::Player(player) => {
                let sprite = player.sprite();
                self.sprite(&sprite.texture().path, sprite.source_rect(), node.bounds(), node.alpha);
            }
            Entity::SweatDrop(_) => {
                self.rect(node.bounds(), SWEAT_DROP_COLOR, node.alpha);
            }
            Entity::Camera(_) | Entity::PlayerSpawn(_) => {}
        }
    }
}

/// `0xrrggbb` as a CSS color string
pub fn css_color(color: u32) -> String {
    format!("#{:06x}", color & 0xffffff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::Platform;
    use crate::sim::testing::runner_world;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(0xf7931a), "#f7931a");
        assert_eq!(css_color(0xff), "#0000ff");
    }

    #[test]
    fn test_short_polyline_is_skipped() {
        let mut list = DrawList::new();
        list.polyline(&[Vec2::ZERO], 0, 1.0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_camera_offset_applied() {
        let mut list = DrawList::new();
        list.set_camera_offset(Vec2::new(100.0, 50.0));
        list.rect(Rect::new(150.0, 60.0, 10.0, 10.0), 0xffffff, 1.0);
        assert_eq!(
            list.commands()[0],
            DrawCommand::Rect {
                rect: Rect::new(50.0, 10.0, 10.0, 10.0),
                color: 0xffffff,
                alpha: 1.0,
            }
        );
    }

    #[test]
    fn test_build_follows_stage_order() {
        let mut world = runner_world(&[0.0, -3.0, -6.0]);
        world.store.spawn(|id| Platform::new(id, 0.0, 0.0, 50.0, 10.0));
        let mut list = DrawList::new();
        list.build(&mut world.store, false);

        // platform (z 0), graph (15), player (20); camera and spawn are hidden
        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Polyline { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Sprite { .. }));
    }

    #[test]
    fn test_debug_shapes() {
        let mut world = runner_world(&[0.0, -3.0, -6.0]);
        let mut list = DrawList::new();
        list.build(&mut world.store, true);
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Outline { .. })));
    }
}
