//! Rendering
//!
//! The simulation is flattened into a [`DrawList`] each frame. On the web the
//! list is painted with the 2D canvas API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use draw_list::{DrawCommand, DrawList, css_color};
