//! Waiting → Playing → Won/Lost, and the restart request
//!
//! The only system that runs while waiting. Every jump press it reacts to is
//! consumed so the jump system never sees it.

use crate::sim::entities::Player;
use crate::sim::state::{GamePhase, World};
use crate::sim::system::System;

pub struct GameStateSystem;

impl GameStateSystem {
    pub const NAME: &'static str = "game-state";
}

impl System for GameStateSystem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn update(&mut self, world: &mut World, _delta: f32) {
        match world.game.phase() {
            GamePhase::Waiting => {
                if world.input.take_jump_press() {
                    world.game.start();
                    if let Some(player) = world.store.first_mut::<Player>() {
                        player.resume_animation();
                    }
                    log::info!("Run started");
                }
            }
            GamePhase::Playing => {
                if world.physics.game_won {
                    world.game.win();
                    // Must press again to restart
                    world.input.take_jump_press();
                    log::info!("Reached the moon after {} ticks", world.time_ticks);
                } else if let Some(cause) = world.physics.loss {
                    world.game.lose();
                    world.input.take_jump_press();
                    if let Some(player) = world.store.first_mut::<Player>() {
                        player.stop_animation();
                    }
                    log::info!("Run lost: {:?}", cause);
                }
            }
            GamePhase::Won | GamePhase::Lost => {
                if world.input.take_jump_press() {
                    world.reload_requested = true;
                    log::info!("Restart requested");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, Key};
    use crate::sim::state::LossCause;
    use crate::sim::testing::runner_world;

    fn press(world: &mut World) {
        world.input.apply(&[InputEvent::KeyUp(Key::Jump), InputEvent::KeyDown(Key::Jump)]);
    }

    #[test]
    fn test_jump_press_starts_and_is_consumed() {
        let mut world = runner_world(&[0.0; 100]);
        let mut sys = GameStateSystem;

        sys.update(&mut world, 0.16);
        assert!(world.game.is_waiting());

        press(&mut world);
        sys.update(&mut world, 0.16);
        assert!(world.game.is_playing());
        assert!(!world.input.jump_pressed());
        assert!(world.store.first::<Player>().unwrap().is_animating());
    }

    #[test]
    fn test_win_then_restart() {
        let mut world = runner_world(&[0.0; 100]);
        let mut sys = GameStateSystem;
        world.game.start();

        world.physics.game_won = true;
        press(&mut world);
        sys.update(&mut world, 0.16);
        assert!(world.game.is_won());
        // The press that landed on the winning tick does not restart
        assert!(!world.reload_requested);

        press(&mut world);
        sys.update(&mut world, 0.16);
        assert!(world.reload_requested);
    }

    #[test]
    fn test_loss_then_restart() {
        let mut world = runner_world(&[0.0; 100]);
        let mut sys = GameStateSystem;
        world.game.start();

        world.physics.signal_loss(LossCause::FellOutOfWorld);
        sys.update(&mut world, 0.16);
        assert!(world.game.is_lost());

        press(&mut world);
        sys.update(&mut world, 0.16);
        assert!(world.reload_requested);
    }
}
