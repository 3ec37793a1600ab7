//! Shader program construction shared by the tutorials.
//!
//! [`ShaderProgramBuilder`] reads a vertex and a fragment shader from disk,
//! compiles both, and links them into a [`Program`]. Intermediate shader
//! objects are released on every path, and failures come back as
//! [`ShaderError`] values instead of terminating the process.
//!
//! The builder is written against the [`ShaderDriver`] trait; the OpenGL
//! implementation lives in [`gl`].

pub mod driver;
pub mod error;
pub mod gl;
pub mod program;
pub mod shader;
pub mod source;

#[cfg(test)]
mod mock;

pub use driver::{ShaderDriver, ShaderStage};
pub use error::ShaderError;
pub use gl::{GlProgram, Uniform};
pub use program::{Program, ShaderProgramBuilder};
pub use shader::CompiledShader;
pub use source::ShaderSource;
