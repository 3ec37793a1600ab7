//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct: a vertex array object with one
//! tightly packed `f32` buffer per vertex attribute, drawn as triangles.

use std::rc::Rc;

use glow::HasContext;

use crate::AppError;

/// Data for one vertex attribute.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    /// Shader location (`layout(location = N)`).
    pub index: u32,
    /// Components per vertex, 1 to 4.
    pub components: i32,
    pub data: &'a [f32],
}

impl<'a> Attribute<'a> {
    pub fn new(index: u32, components: i32, data: &'a [f32]) -> Self {
        Self {
            index,
            components,
            data,
        }
    }

    fn vertex_count(&self) -> usize {
        self.data.len() / self.components.max(1) as usize
    }
}

/// Checks that every attribute describes the same number of vertices and
/// returns that number.
pub fn vertex_count(attributes: &[Attribute<'_>]) -> Result<usize, AppError> {
    let Some(first) = attributes.first() else {
        return Ok(0);
    };
    let expected = first.vertex_count();
    for attribute in attributes {
        let actual = attribute.vertex_count();
        if actual != expected || attribute.data.len() % attribute.components.max(1) as usize != 0 {
            return Err(AppError::AttributeCount {
                index: attribute.index,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    vbos: Vec<glow::Buffer>,
    vertex_count: usize,
}

impl Mesh {
    /// Uploads the attributes and records their layout in a new vertex array.
    pub fn new(gl: &Rc<glow::Context>, attributes: &[Attribute<'_>]) -> Result<Self, AppError> {
        let vertex_count = vertex_count(attributes)?;
        unsafe {
            let vao = gl.create_vertex_array().map_err(AppError::Gl)?;
            // Owned from here so a failed buffer allocation releases the rest.
            let mut mesh = Self {
                gl: Rc::clone(gl),
                vao,
                vbos: Vec::with_capacity(attributes.len()),
                vertex_count,
            };

            gl.bind_vertex_array(Some(vao));
            for attribute in attributes {
                let vbo = gl.create_buffer().map_err(AppError::Gl)?;
                mesh.vbos.push(vbo);

                gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    std::slice::from_raw_parts(
                        attribute.data.as_ptr() as *const u8,
                        std::mem::size_of_val(attribute.data),
                    ),
                    glow::STATIC_DRAW,
                );
                gl.enable_vertex_attrib_array(attribute.index);
                gl.vertex_attrib_pointer_f32(
                    attribute.index,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    0,
                    0,
                );
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            log::debug!(
                "uploaded mesh with {} vertices in {} buffers",
                vertex_count,
                attributes.len()
            );
            Ok(mesh)
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            for vbo in self.vbos.drain(..) {
                self.gl.delete_buffer(vbo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
