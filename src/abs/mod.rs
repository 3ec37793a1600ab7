//! Thin wrappers over the window, the OpenGL context and vertex buffers.

pub mod app;
pub mod mesh;

pub use app::*;
pub use mesh::*;
