//! WebGPU rendering module
//!
//! A single vertex-colored pipeline draws the whole scene as filled
//! rectangles; `shapes` assembles the per-frame vertex list from the
//! simulation snapshot.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{scene_vertices, track_to_screen_x};
