//! Ground contact against platforms, the curve and the moon
//!
//! The three colliders run back to back. Platform collision opens the
//! contact pass (clears grounding after remembering it), so any of them can
//! re-ground the player for this tick.

use glam::Vec2;

use crate::sim::entities::{Graph, Moon, Platform, Player};
use crate::sim::entity::{EntityData, Rect};
use crate::sim::state::{LossCause, World};
use crate::sim::system::System;

/// Axis-aligned min-overlap resolution against every platform
pub struct PlatformCollisionSystem;

/// Which face of a platform the player hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

fn contact_face(player: &Rect, platform: &Rect) -> Option<(Face, f32)> {
    if !player.intersects(platform) {
        return None;
    }
    let overlaps = [
        (Face::Top, player.bottom() - platform.top()),
        (Face::Bottom, platform.bottom() - player.top()),
        (Face::Left, player.right() - platform.left()),
        (Face::Right, platform.right() - player.left()),
    ];
    overlaps
        .into_iter()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

impl System for PlatformCollisionSystem {
    fn name(&self) -> &'static str {
        "platform-collision"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        world.physics.begin_contact_pass();

        let platforms: Vec<Rect> = world.store.get_all::<Platform>().map(|p| p.rect()).collect();
        let Some(player) = world.store.first_mut::<Player>() else {
            return;
        };

        for plat in &platforms {
            let rect = player.rect();
            let Some((face, _)) = contact_face(&rect, plat) else {
                continue;
            };
            let pos = player.position();
            match face {
                Face::Top if world.physics.velocity_y >= 0.0 => {
                    player.move_to(Vec2::new(pos.x, plat.top()));
                    world.physics.land();
                }
                Face::Bottom if world.physics.velocity_y < 0.0 => {
                    // Head bump
                    player.move_to(Vec2::new(pos.x, plat.bottom() + rect.height));
                    world.physics.velocity_y = 0.0;
                }
                Face::Left => player.move_to(Vec2::new(plat.left() - rect.width / 2.0, pos.y)),
                Face::Right => player.move_to(Vec2::new(plat.right() + rect.width / 2.0, pos.y)),
                _ => {}
            }
        }
    }
}

/// Lands the player on the scrolling curve and detects ground giving way
#[derive(Debug, Default)]
pub struct GraphCollisionSystem {
    /// The curve grounded the player on the previous pass
    on_curve: bool,
}

impl System for GraphCollisionSystem {
    fn name(&self) -> &'static str {
        "graph-collision"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        let tuning = world.settings.physics.clone();
        let (Some(player), Some(graph)) = (world.store.first::<Player>(), world.store.first::<Graph>())
        else {
            return;
        };

        let feet = player.position();
        let x = graph.local_x(feet.x);
        let ground = graph.y_at_x(x);
        let solid = graph.falling_offset_at_x(x) < tuning.decay_threshold;
        let physics = &mut world.physics;

        // Standing on the curve since last tick, not jumping off it
        let standing = self.on_curve && physics.was_grounded;
        self.on_curve = false;

        if let Some(ground_y) = ground {
            if standing && !solid {
                log::info!("Ground gave way under the player at x={:.1}", feet.x);
                physics.signal_loss(LossCause::GroundGaveWay);
            } else if solid {
                let falling_onto = physics.velocity_y >= 0.0 && feet.y >= ground_y;
                // Keep a grounded runner attached when the ground drops away slightly
                let downhill = standing && ground_y > feet.y && ground_y - feet.y <= tuning.ground_snap;
                if falling_onto || downhill {
                    physics.land();
                    self.on_curve = true;
                    if let Some(player) = world.store.first_mut::<Player>() {
                        player.move_to(Vec2::new(feet.x, ground_y));
                    }
                }
            }
        }

        if feet.y > tuning.death_line_y {
            world.physics.signal_loss(LossCause::FellOutOfWorld);
        }
    }
}

/// Lands the player on the moon and wins the run
pub struct MoonCollisionSystem;

impl System for MoonCollisionSystem {
    fn name(&self) -> &'static str {
        "moon-collision"
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        // A lost run stays lost
        if world.physics.loss.is_some() {
            return;
        }
        let (Some(player), Some(moon)) = (world.store.first::<Player>(), world.store.first::<Moon>()) else {
            return;
        };

        let feet = player.position();
        let Some(surface_y) = moon.surface_y_at(feet.x) else {
            return;
        };
        if world.physics.velocity_y < 0.0 || feet.y < surface_y {
            return;
        }

        world.physics.land();
        let first_touch = !world.physics.game_won;
        world.physics.game_won = true;
        if let Some(player) = world.store.first_mut::<Player>() {
            player.move_to(Vec2::new(feet.x, surface_y));
            if first_touch {
                player.set_celebrating(true);
                log::info!("Landed on the moon");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PhysicsTuning;
    use crate::sim::state::PhysicsState;
    use crate::sim::testing::{runner_world, with_moon};

    fn player_pos(world: &World) -> Vec2 {
        world.store.first::<Player>().unwrap().position()
    }

    fn place_player(world: &mut World, pos: Vec2) {
        world.store.first_mut::<Player>().unwrap().move_to(pos);
    }

    /// One full contact pass as the pipeline runs it
    fn contact(world: &mut World, graph_sys: &mut GraphCollisionSystem) {
        PlatformCollisionSystem.update(world, 0.16);
        graph_sys.update(world, 0.16);
        MoonCollisionSystem.update(world, 0.16);
    }

    #[test]
    fn test_falling_player_lands_on_curve() {
        let mut world = runner_world(&[100.0; 100]);
        place_player(&mut world, Vec2::new(50.0, 103.0));
        world.physics.velocity_y = 20.0;

        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);

        assert!(world.physics.is_grounded);
        assert_eq!(world.physics.velocity_y, 0.0);
        assert_eq!(player_pos(&world), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_rising_player_passes_through_curve() {
        let mut world = runner_world(&[100.0; 100]);
        place_player(&mut world, Vec2::new(50.0, 103.0));
        world.physics.velocity_y = -50.0;

        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(!world.physics.is_grounded);
        assert_eq!(player_pos(&world).y, 103.0);
    }

    #[test]
    fn test_grounded_player_snaps_down_small_drops() {
        let mut world = runner_world(&[100.0; 100]);
        place_player(&mut world, Vec2::new(50.0, 100.0));
        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(world.physics.is_grounded);

        // Ground drops 3px below the feet between ticks
        place_player(&mut world, Vec2::new(50.0, 97.0));
        contact(&mut world, &mut graph_sys);
        assert!(world.physics.is_grounded);
        assert_eq!(player_pos(&world).y, 100.0);

        // A big drop is a fall, not a snap
        place_player(&mut world, Vec2::new(50.0, 50.0));
        contact(&mut world, &mut graph_sys);
        assert!(!world.physics.is_grounded);
        assert_eq!(player_pos(&world).y, 50.0);
    }

    #[test]
    fn test_snap_reaches_exactly_ground_snap() {
        let snap = PhysicsTuning::default().ground_snap;
        for (drop, attached) in [(snap, true), (snap + 0.5, false)] {
            let mut world = runner_world(&[100.0; 100]);
            place_player(&mut world, Vec2::new(50.0, 100.0));
            let mut graph_sys = GraphCollisionSystem::default();
            contact(&mut world, &mut graph_sys);
            assert!(world.physics.is_grounded);

            place_player(&mut world, Vec2::new(50.0, 100.0 - drop));
            contact(&mut world, &mut graph_sys);
            assert_eq!(world.physics.is_grounded, attached, "drop {drop}");
            let expected_y = if attached { 100.0 } else { 100.0 - drop };
            assert_eq!(player_pos(&world).y, expected_y, "drop {drop}");
        }
    }

    #[test]
    fn test_decayed_ground_gives_way() {
        let mut world = runner_world(&[100.0; 100]);
        place_player(&mut world, Vec2::new(50.0, 100.0));
        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(world.physics.is_grounded);

        // Stand still while the ground sinks
        let mut ticks = 0;
        while world.physics.loss.is_none() && ticks < 500 {
            world
                .store
                .first_mut::<Graph>()
                .unwrap()
                .update_scroll(0.16, 0.0);
            let ground = {
                let g = world.store.first::<Graph>().unwrap();
                g.y_at_x(50.0).unwrap()
            };
            place_player(&mut world, Vec2::new(50.0, ground));
            contact(&mut world, &mut graph_sys);
            ticks += 1;
        }
        assert_eq!(world.physics.loss, Some(LossCause::GroundGaveWay));
        assert!(!world.physics.is_grounded);
    }

    #[test]
    fn test_falling_onto_decayed_ground_does_not_land() {
        let mut world = runner_world(&[100.0; 100]);
        for _ in 0..100 {
            world
                .store
                .first_mut::<Graph>()
                .unwrap()
                .update_scroll(0.16, 0.0);
        }
        let g = world.store.first::<Graph>().unwrap();
        assert!(g.falling_offset_at_x(50.0) >= world.settings.physics.decay_threshold);
        let ground = g.y_at_x(50.0).unwrap();

        place_player(&mut world, Vec2::new(50.0, ground + 1.0));
        world.physics.velocity_y = 10.0;
        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(!world.physics.is_grounded);
        assert!(world.physics.loss.is_none());
    }

    #[test]
    fn test_past_the_curve_is_a_fall() {
        let mut world = runner_world(&[100.0; 5]);
        place_player(&mut world, Vec2::new(50.0, 120.0));
        world.physics.velocity_y = 5.0;
        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(!world.physics.is_grounded);
    }

    #[test]
    fn test_death_line() {
        let mut world = runner_world(&[100.0; 5]);
        let below = world.settings.physics.death_line_y + 1.0;
        place_player(&mut world, Vec2::new(50.0, below));
        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert_eq!(world.physics.loss, Some(LossCause::FellOutOfWorld));
    }

    #[test]
    fn test_platform_landing_and_head_bump() {
        let mut world = runner_world(&[500.0; 100]);
        world
            .store
            .spawn(|id| Platform::new(id, 0.0, 200.0, 100.0, 16.0));

        place_player(&mut world, Vec2::new(50.0, 204.0));
        world.physics.velocity_y = 10.0;
        PlatformCollisionSystem.update(&mut world, 0.16);
        assert!(world.physics.is_grounded);
        assert_eq!(player_pos(&world).y, 200.0);

        // Jumping up into the underside
        world.physics = PhysicsState {
            velocity_y: -40.0,
            ..Default::default()
        };
        place_player(&mut world, Vec2::new(50.0, 270.0));
        PlatformCollisionSystem.update(&mut world, 0.16);
        assert_eq!(world.physics.velocity_y, 0.0);
        assert_eq!(player_pos(&world).y, 216.0 + 60.0);
    }

    #[test]
    fn test_platform_side_push() {
        let mut world = runner_world(&[500.0; 100]);
        world
            .store
            .spawn(|id| Platform::new(id, 100.0, 0.0, 50.0, 300.0));
        place_player(&mut world, Vec2::new(82.0, 150.0));
        PlatformCollisionSystem.update(&mut world, 0.16);
        assert_eq!(player_pos(&world), Vec2::new(80.0, 150.0));
    }

    #[test]
    fn test_moon_landing_wins_once() {
        let mut world = with_moon(runner_world(&[100.0; 5]), Vec2::new(50.0, 300.0));
        place_player(&mut world, Vec2::new(60.0, 290.0));
        world.physics.velocity_y = 30.0;

        let mut graph_sys = GraphCollisionSystem::default();
        contact(&mut world, &mut graph_sys);
        assert!(world.physics.game_won);
        assert!(world.physics.is_grounded);
        let player = world.store.first::<Player>().unwrap();
        assert!(player.is_celebrating());
        let expected = world.store.first::<Moon>().unwrap().surface_y_at(60.0).unwrap();
        assert!((player.y() - expected).abs() < 1e-4);

        contact(&mut world, &mut graph_sys);
        assert!(world.physics.game_won);
    }

    #[test]
    fn test_moon_ignored_after_loss() {
        let mut world = with_moon(runner_world(&[100.0; 5]), Vec2::new(50.0, 300.0));
        world.physics.signal_loss(LossCause::GroundGaveWay);
        place_player(&mut world, Vec2::new(60.0, 290.0));
        world.physics.velocity_y = 30.0;

        MoonCollisionSystem.update(&mut world, 0.16);
        assert!(!world.physics.game_won);
        assert!(!world.physics.is_grounded);
        assert!(!world.store.first::<Player>().unwrap().is_celebrating());
        assert_eq!(player_pos(&world), Vec2::new(60.0, 290.0));
    }

    #[test]
    fn test_moon_out_of_reach() {
        let mut world = with_moon(runner_world(&[100.0; 5]), Vec2::new(500.0, 300.0));
        place_player(&mut world, Vec2::new(50.0, 400.0));
        world.physics.velocity_y = 30.0;
        MoonCollisionSystem.update(&mut world, 0.16);
        assert!(!world.physics.game_won);
    }
}
