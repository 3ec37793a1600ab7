//! Linked shader programs and the builder that produces them.

use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    CompiledShader, ShaderDriver, ShaderError, ShaderSource, ShaderStage,
    driver::fetch_info_log,
};

/// A linked, ready-to-use shader program.
///
/// The program is deleted when dropped. It holds the driver through an `Rc`,
/// so it cannot leave the thread that owns the graphics context.
pub struct Program<D: ShaderDriver> {
    driver: Rc<D>,
    id: D::Program,
}

/// Keeps a shader attached to a program until dropped.
struct Attachment<'a, D: ShaderDriver> {
    driver: &'a D,
    program: D::Program,
    shader: D::Shader,
}

impl<'a, D: ShaderDriver> Attachment<'a, D> {
    fn new(driver: &'a D, program: D::Program, shader: &CompiledShader<'_, D>) -> Self {
        driver.attach_shader(program, shader.id());
        Self {
            driver,
            program,
            shader: shader.id(),
        }
    }
}

impl<D: ShaderDriver> Drop for Attachment<'_, D> {
    fn drop(&mut self) {
        self.driver.detach_shader(self.program, self.shader);
    }
}

impl<D: ShaderDriver> Program<D> {
    /// Links a vertex and a fragment shader into a program.
    ///
    /// Both shaders are detached again before this returns, whatever the
    /// outcome. They stay alive until their owners drop them.
    pub fn link(
        driver: &Rc<D>,
        vertex: &CompiledShader<'_, D>,
        fragment: &CompiledShader<'_, D>,
    ) -> Result<Self, ShaderError> {
        debug_assert_eq!(vertex.stage(), ShaderStage::Vertex);
        debug_assert_eq!(fragment.stage(), ShaderStage::Fragment);

        let id = driver
            .create_program()
            .map_err(|reason| ShaderError::Create {
                object: "program",
                reason,
            })?;
        let program = Self {
            driver: Rc::clone(driver),
            id,
        };

        let gl: &D = driver;
        let attached = [
            Attachment::new(gl, id, vertex),
            Attachment::new(gl, id, fragment),
        ];
        gl.link_program(id);

        if !gl.link_status(id) {
            let length = gl.program_info_log_length(id);
            let log = fetch_info_log(length, |buf| gl.program_info_log(id, buf));
            log::warn!("program link failed");
            // Detach before the program itself is deleted.
            drop(attached);
            return Err(ShaderError::Link { log });
        }

        drop(attached);
        log::debug!("linked program {id:?}");
        Ok(program)
    }

    /// Compiles and links two in-memory sources.
    ///
    /// The fragment stage is not attempted if the vertex stage fails.
    pub fn from_sources(
        driver: &Rc<D>,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<Self, ShaderError> {
        let vertex = CompiledShader::compile(driver.as_ref(), ShaderStage::Vertex, vertex)?;
        let fragment = CompiledShader::compile(driver.as_ref(), ShaderStage::Fragment, fragment)?;
        Self::link(driver, &vertex, &fragment)
    }

    /// Reads, compiles and links the two shader files.
    ///
    /// Both files are read before the driver is touched, so an unreadable
    /// path never costs a compile.
    pub fn from_files(
        driver: &Rc<D>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex = ShaderSource::read(vertex_path)?;
        let fragment = ShaderSource::read(fragment_path)?;
        Self::from_sources(driver, &vertex, &fragment)
    }

    pub fn id(&self) -> D::Program {
        self.id
    }

    pub fn driver(&self) -> &Rc<D> {
        &self.driver
    }
}

impl<D: ShaderDriver> Drop for Program<D> {
    fn drop(&mut self) {
        self.driver.delete_program(self.id);
    }
}

/// Vertex and fragment shader paths for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgramBuilder {
    vertex: PathBuf,
    fragment: PathBuf,
}

impl ShaderProgramBuilder {
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Conventional layout: `<dir>/vert.glsl` and `<dir>/frag.glsl`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("vert.glsl"), dir.join("frag.glsl"))
    }

    pub fn vertex_path(&self) -> &Path {
        &self.vertex
    }

    pub fn fragment_path(&self) -> &Path {
        &self.fragment
    }

    pub fn build<D: ShaderDriver>(&self, driver: &Rc<D>) -> Result<Program<D>, ShaderError> {
        log::info!(
            "building program from {} and {}",
            self.vertex.display(),
            self.fragment.display()
        );
        Program::from_files(driver, &self.vertex, &self.fragment)
    }
}
