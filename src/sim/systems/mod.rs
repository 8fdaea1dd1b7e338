//! Per-tick systems, listed in the order the runner scene registers them

pub mod animation;
pub mod camera;
pub mod collision;
pub mod game_state;
pub mod graph_update;
pub mod gravity;
pub mod jump;
pub mod moon_update;
pub mod movement;
pub mod sweat_drops;

pub use animation::PlayerAnimationSystem;
pub use camera::{CamFollowPlayerSystem, CameraUpdateSystem};
pub use collision::{GraphCollisionSystem, MoonCollisionSystem, PlatformCollisionSystem};
pub use game_state::GameStateSystem;
pub use graph_update::GraphUpdateSystem;
pub use gravity::GravitySystem;
pub use jump::JumpSystem;
pub use moon_update::MoonUpdateSystem;
pub use movement::PlayerMovementSystem;
pub use sweat_drops::SweatDropsSystem;

use super::system::SystemAgg;

/// Register the full gameplay pipeline.
///
/// Curve advance runs before gravity and collision, and collision runs
/// before the animation switch reads the grounded flag.
pub fn register_all(agg: &mut SystemAgg) {
    agg.add(GameStateSystem)
        .add(PlayerMovementSystem)
        .add(JumpSystem::default())
        .add(GraphUpdateSystem::default())
        .add(GravitySystem)
        .add(PlatformCollisionSystem)
        .add(GraphCollisionSystem::default())
        .add(MoonCollisionSystem)
        .add(PlayerAnimationSystem)
        .add(MoonUpdateSystem)
        .add(CamFollowPlayerSystem::default())
        .add(CameraUpdateSystem)
        .add(SweatDropsSystem);
}
