//! Per-run context shared by every system
//!
//! Physics and game phase are explicit context objects on [`World`], not
//! entities discovered through the store. There is exactly one of each per
//! scene by construction.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::store::EntityStore;
use crate::input::InputSnapshot;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Start screen, waiting for the first jump press
    #[default]
    Waiting,
    /// Active run
    Playing,
    /// Landed on the moon
    Won,
    /// Ground gave way or fell out of the world
    Lost,
}

/// Why a run was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// The ground under a grounded player decayed past the threshold
    GroundGaveWay,
    /// Feet passed the world death line
    FellOutOfWorld,
}

/// Player physics shared by gravity, jump and collision
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicsState {
    /// Pixels per tick, positive is down
    pub velocity_y: f32,
    pub is_grounded: bool,
    /// Grounded flag as it was when the current collision pass began
    pub was_grounded: bool,
    pub game_won: bool,
    /// Loss raised by collision, consumed by the game-state system
    pub loss: Option<LossCause>,
}

impl PhysicsState {
    /// Start a collision pass: remember the previous grounding, then let the
    /// colliders re-establish it.
    pub fn begin_contact_pass(&mut self) {
        self.was_grounded = self.is_grounded;
        self.is_grounded = false;
    }

    /// Rest on a surface
    pub fn land(&mut self) {
        self.velocity_y = 0.0;
        self.is_grounded = true;
    }

    /// Record the first loss cause of the run
    pub fn signal_loss(&mut self, cause: LossCause) {
        if self.loss.is_none() {
            self.loss = Some(cause);
        }
    }
}

/// Win/lose state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    phase: GamePhase,
}

impl GameState {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_waiting(&self) -> bool {
        self.phase == GamePhase::Waiting
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Won or lost
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Won | GamePhase::Lost)
    }

    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
    }

    pub fn win(&mut self) {
        self.phase = GamePhase::Won;
    }

    pub fn lose(&mut self) {
        self.phase = GamePhase::Lost;
    }

    pub fn reset(&mut self) {
        self.phase = GamePhase::Waiting;
    }
}

/// Everything a system may read or write during one tick
#[derive(Debug)]
pub struct World {
    pub store: EntityStore,
    pub physics: PhysicsState,
    pub game: GameState,
    pub input: InputSnapshot,
    pub settings: Settings,
    /// Run RNG (curve generation, sweat drops)
    pub rng: Pcg32,
    /// Ticks since the scene loaded
    pub time_ticks: u64,
    /// Set by the game-state system to ask the scene engine for a reload
    pub reload_requested: bool,
}

impl World {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            store: EntityStore::new(),
            physics: PhysicsState::default(),
            game: GameState::default(),
            input: InputSnapshot::default(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            reload_requested: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut game = GameState::default();
        assert!(game.is_waiting());
        game.start();
        assert!(game.is_playing());
        game.win();
        assert!(game.is_won() && game.is_over());
        game.reset();
        assert!(game.is_waiting());
        game.lose();
        assert!(game.is_lost() && game.is_over());
    }

    #[test]
    fn test_contact_pass_remembers_grounding() {
        let mut physics = PhysicsState {
            is_grounded: true,
            ..Default::default()
        };
        physics.begin_contact_pass();
        assert!(physics.was_grounded);
        assert!(!physics.is_grounded);
    }

    #[test]
    fn test_first_loss_cause_wins() {
        let mut physics = PhysicsState::default();
        physics.signal_loss(LossCause::GroundGaveWay);
        physics.signal_loss(LossCause::FellOutOfWorld);
        assert_eq!(physics.loss, Some(LossCause::GroundGaveWay));
    }
}
