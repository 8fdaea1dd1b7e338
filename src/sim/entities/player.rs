//! The runner
//!
//! Anchored bottom-center, so `position.y` is the feet coordinate. The
//! collision box is a fixed size independent of the sprite scale.

use glam::Vec2;

use crate::consts::{PLAYER_COLLISION_HEIGHT, PLAYER_COLLISION_WIDTH, PLAYER_SCALE, PLAYER_Z};
use crate::sim::entity::{EntityData, EntityId, Node, Rect};
use crate::sim::sprite::AnimatedSprite;

/// Which sprite sheet is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    Running,
    Jumping,
    Celebrating,
}

/// The three sheets the player switches between
#[derive(Debug, Clone)]
pub struct PlayerSprites {
    pub running: AnimatedSprite,
    pub jumping: AnimatedSprite,
    pub celebrating: AnimatedSprite,
}

#[derive(Debug, Clone)]
pub struct Player {
    id: EntityId,
    node: Node,
    sprites: PlayerSprites,
    pose: PlayerPose,
    collision_size: Vec2,
    animating: bool,
}

impl Player {
    pub fn new(id: EntityId, sprites: PlayerSprites) -> Self {
        let node = Node {
            size: sprites.running.frame_size(),
            scale: Vec2::splat(PLAYER_SCALE),
            anchor: Vec2::new(0.5, 1.0),
            z_index: PLAYER_Z,
            ..Node::default()
        };
        Self {
            id,
            node,
            sprites,
            pose: PlayerPose::Running,
            collision_size: Vec2::new(PLAYER_COLLISION_WIDTH, PLAYER_COLLISION_HEIGHT),
            animating: true,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.node.position = position;
    }

    /// Feet position
    pub fn position(&self) -> Vec2 {
        self.node.position
    }

    pub fn x(&self) -> f32 {
        self.node.position.x
    }

    /// Feet y
    pub fn y(&self) -> f32 {
        self.node.position.y
    }

    /// Top of the visible sprite
    pub fn top_y(&self) -> f32 {
        self.node.bounds().top()
    }

    pub fn pose(&self) -> PlayerPose {
        self.pose
    }

    fn set_pose(&mut self, pose: PlayerPose) {
        if self.pose == pose {
            return;
        }
        self.pose = pose;
        let animating = self.animating;
        let sprite = self.sprite_mut();
        sprite.rewind();
        if animating {
            sprite.play();
        } else {
            sprite.stop();
        }
        self.node.size = self.sprite().frame_size();
    }

    /// Switch between the jumping and running sheets. Ignored while celebrating.
    pub fn set_jumping(&mut self, jumping: bool) {
        if self.pose == PlayerPose::Celebrating {
            return;
        }
        self.set_pose(if jumping {
            PlayerPose::Jumping
        } else {
            PlayerPose::Running
        });
    }

    pub fn set_celebrating(&mut self, celebrating: bool) {
        if celebrating {
            self.set_pose(PlayerPose::Celebrating);
        } else if self.pose == PlayerPose::Celebrating {
            self.set_pose(PlayerPose::Running);
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.pose == PlayerPose::Celebrating
    }

    pub fn stop_animation(&mut self) {
        self.animating = false;
        self.sprite_mut().stop();
    }

    pub fn resume_animation(&mut self) {
        self.animating = true;
        self.sprite_mut().play();
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Playback multiplier applied to every sheet
    pub fn set_animation_speed_multiplier(&mut self, multiplier: f32) {
        self.sprites.running.set_speed_multiplier(multiplier);
        self.sprites.jumping.set_speed_multiplier(multiplier);
        self.sprites.celebrating.set_speed_multiplier(multiplier);
    }

    pub fn animation_speed_multiplier(&self) -> f32 {
        self.sprite().speed_multiplier()
    }

    /// Advance the visible sheet
    pub fn update_animation(&mut self, display_frames: f32) {
        self.sprite_mut().update(display_frames);
    }

    /// Sheet for the current pose
    pub fn sprite(&self) -> &AnimatedSprite {
        match self.pose {
            PlayerPose::Running => &self.sprites.running,
            PlayerPose::Jumping => &self.sprites.jumping,
            PlayerPose::Celebrating => &self.sprites.celebrating,
        }
    }

    fn sprite_mut(&mut self) -> &mut AnimatedSprite {
        match self.pose {
            PlayerPose::Running => &mut self.sprites.running,
            PlayerPose::Jumping => &mut self.sprites.jumping,
            PlayerPose::Celebrating => &mut self.sprites.celebrating,
        }
    }
}

impl EntityData for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    /// Fixed collision box standing on the feet point
    fn rect(&self) -> Rect {
        let size = self.collision_size;
        let pos = self.node.position;
        Rect::new(pos.x - size.x / 2.0, pos.y - size.y, size.x, size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testing::test_sprites;

    #[test]
    fn test_collision_rect_ignores_sprite_scale() {
        let mut p = Player::new(EntityId(1), test_sprites());
        p.move_to(Vec2::new(50.0, 232.0));
        let r = p.rect();
        assert_eq!(r, Rect::new(30.0, 172.0, 40.0, 60.0));
        assert_eq!(r.bottom(), p.y());
    }

    #[test]
    fn test_top_y_uses_visible_sprite() {
        let mut p = Player::new(EntityId(1), test_sprites());
        p.move_to(Vec2::new(0.0, 100.0));
        assert!((p.top_y() - (100.0 - 269.0 * PLAYER_SCALE)).abs() < 1e-4);
        p.set_jumping(true);
        assert!((p.top_y() - (100.0 - 400.0 * PLAYER_SCALE)).abs() < 1e-4);
    }

    #[test]
    fn test_celebrating_locks_pose() {
        let mut p = Player::new(EntityId(1), test_sprites());
        p.set_celebrating(true);
        p.set_jumping(true);
        assert_eq!(p.pose(), PlayerPose::Celebrating);
        assert!(p.is_celebrating());
    }

    #[test]
    fn test_stopped_player_stays_stopped_across_poses() {
        let mut p = Player::new(EntityId(1), test_sprites());
        p.stop_animation();
        p.set_jumping(true);
        assert!(!p.sprite().is_playing());
        p.resume_animation();
        assert!(p.sprite().is_playing());
    }
}
