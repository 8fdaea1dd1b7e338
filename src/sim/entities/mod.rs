//! Concrete entity kinds

pub mod camera;
pub mod graph;
pub mod moon;
pub mod platform;
pub mod player;
pub mod profile;
pub mod spawn;
pub mod sweat_drop;

pub use camera::Camera;
pub use graph::Graph;
pub use moon::Moon;
pub use platform::Platform;
pub use player::{Player, PlayerPose, PlayerSprites};
pub use profile::OPENING_PROFILE;
pub use spawn::PlayerSpawn;
pub use sweat_drop::SweatDrop;
