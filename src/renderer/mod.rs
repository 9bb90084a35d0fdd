//! WebGPU rendering module
//!
//! `scene` turns a frame snapshot into colored triangles in playfield
//! coordinates; `pipeline` letterboxes them onto the canvas.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
