//! Gameplay simulation
//!
//! All gameplay logic lives here and never touches the DOM:
//! - `store`: typed entity storage with O(1) swap-remove
//! - `system`: the ordered per-tick pipeline
//! - `entities`: player, curve, moon and friends
//! - `systems`: the pipeline's stages
//! - `state`: physics and game-phase context shared by the systems

pub mod entities;
pub mod entity;
pub mod sprite;
pub mod stage;
pub mod state;
pub mod store;
pub mod system;
pub mod systems;

#[cfg(test)]
pub(crate) mod testing;

pub use entity::{Entity, EntityData, EntityId, EntityKind, EntityType, Node, Rect};
pub use sprite::AnimatedSprite;
pub use stage::Stage;
pub use state::{GamePhase, GameState, LossCause, PhysicsState, World};
pub use store::EntityStore;
pub use system::{System, SystemAgg};
