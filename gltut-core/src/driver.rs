//! The graphics-driver calls the program builder depends on.
//!
//! [`ShaderDriver`] is implemented for [`glow::Context`] in [`crate::gl`].
//! Keeping the builder behind this trait lets it run against any driver that
//! exposes the classic compile/link entry points.

use std::{ffi::CStr, fmt};

/// Pipeline stage a shader object is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The OpenGL enum for this stage.
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// Shader and program entry points of a graphics driver.
///
/// Handles are plain copyable ids; ownership is tracked by the types in
/// [`crate::shader`] and [`crate::program`], not by the driver.
pub trait ShaderDriver {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &CStr);
    fn compile_shader(&self, shader: Self::Shader);
    fn compile_status(&self, shader: Self::Shader) -> bool;
    /// Length of the shader's info log, terminator included (`GL_INFO_LOG_LENGTH`).
    fn shader_info_log_length(&self, shader: Self::Shader) -> i32;
    /// Copies at most `buf.len() - 1` bytes of the log into `buf` followed by
    /// a NUL, and returns the number of bytes written without the NUL.
    fn shader_info_log(&self, shader: Self::Shader, buf: &mut [u8]) -> usize;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;
    /// Length of the program's info log, terminator included.
    fn program_info_log_length(&self, program: Self::Program) -> i32;
    /// Same contract as [`ShaderDriver::shader_info_log`].
    fn program_info_log(&self, program: Self::Program, buf: &mut [u8]) -> usize;
    fn delete_program(&self, program: Self::Program);
}

/// Two-step info log retrieval: the caller has already queried the length,
/// `fetch` fills a buffer one byte longer than that.
///
/// Whatever the driver claims to have written, the result never exceeds the
/// queried length and never contains the terminator.
pub(crate) fn fetch_info_log(length: i32, fetch: impl FnOnce(&mut [u8]) -> usize) -> String {
    let length = usize::try_from(length).unwrap_or(0);
    let mut buf = vec![0u8; length + 1];
    let written = fetch(&mut buf).min(length);
    buf.truncate(written);
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }
    String::from_utf8_lossy(&buf).trim_end().to_string()
}

/// GL reports info log lengths with the terminator counted, and zero for an
/// empty log.
pub(crate) fn log_length(log: &str) -> i32 {
    if log.is_empty() {
        0
    } else {
        i32::try_from(log.len() + 1).unwrap_or(i32::MAX)
    }
}

/// `glGet*InfoLog` semantics on top of an already retrieved log.
pub(crate) fn copy_log(log: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let n = log.len().min(room);
    buf[..n].copy_from_slice(&log.as_bytes()[..n]);
    buf[n] = 0;
    n
}
