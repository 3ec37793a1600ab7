//! OpenGL backend.
//!
//! Implements [`ShaderDriver`] for [`glow::Context`] and adds the parts of a
//! program that only make sense against a real context: binding it and
//! uploading uniforms through the [`Uniform`] trait.

use std::ffi::CStr;

use glam::{Mat4, Vec3, Vec4};
use glow::HasContext;

use crate::{
    Program, ShaderDriver, ShaderStage,
    driver::{copy_log, log_length},
};

/// Program built on a live OpenGL context.
pub type GlProgram = Program<glow::Context>;

// glow already hands logs back as `String`s, so the length query and the
// fetch both go through the same getter.
impl ShaderDriver for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &CStr) {
        unsafe { HasContext::shader_source(self, shader, &source.to_string_lossy()) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log_length(&self, shader: glow::Shader) -> i32 {
        log_length(&unsafe { self.get_shader_info_log(shader) })
    }

    fn shader_info_log(&self, shader: glow::Shader, buf: &mut [u8]) -> usize {
        copy_log(&unsafe { self.get_shader_info_log(shader) }, buf)
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn link_status(&self, program: glow::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log_length(&self, program: glow::Program) -> i32 {
        log_length(&unsafe { self.get_program_info_log(program) })
    }

    fn program_info_log(&self, program: glow::Program, buf: &mut [u8]) -> usize {
        copy_log(&unsafe { self.get_program_info_log(program) }, buf)
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }
}

/// A value that can be uploaded to a uniform variable.
pub trait Uniform {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for bool {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self as i32) }
    }
}

impl Uniform for i32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_i32(Some(location), *self) }
    }
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Vec3 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_3_f32(Some(location), self.x, self.y, self.z) }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

impl Uniform for Mat4 {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_matrix_4_f32_slice(Some(location), false, &self.to_cols_array()) }
    }
}

impl<T: Uniform> Uniform for &T {
    fn set_uniform(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).set_uniform(gl, location);
    }
}

impl Program<glow::Context> {
    /// Binds the program for subsequent draw calls.
    pub fn use_program(&self) {
        unsafe { self.driver().use_program(Some(self.id())) }
    }

    pub fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.driver().get_uniform_location(self.id(), name) }
    }

    /// Uploads `value` to the uniform called `name`. The program must be bound.
    ///
    /// Returns `false` if the program has no active uniform with that name,
    /// which includes uniforms the compiler optimized away.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) -> bool {
        match self.uniform_location(name) {
            Some(location) => {
                value.set_uniform(self.driver(), &location);
                true
            }
            None => false,
        }
    }
}
