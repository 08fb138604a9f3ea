//! WebGPU rendering module
//!
//! `scene` turns a `World` into colored triangles in canvas pixels;
//! `pipeline` uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{SceneOptions, build_scene};
pub use vertex::Vertex;
