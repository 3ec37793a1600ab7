//! Individual shader objects.

use crate::{
    ShaderDriver, ShaderError, ShaderSource, ShaderStage,
    driver::fetch_info_log,
};

/// A successfully compiled shader object.
///
/// The object is deleted when this value is dropped. Drivers keep a shader
/// alive while it is attached to a program, so dropping a `CompiledShader`
/// after linking is always safe.
pub struct CompiledShader<'d, D: ShaderDriver> {
    driver: &'d D,
    id: D::Shader,
    stage: ShaderStage,
}

impl<'d, D: ShaderDriver> CompiledShader<'d, D> {
    /// Compiles `source` for `stage`.
    ///
    /// On failure the shader object is deleted and the driver's info log is
    /// returned inside [`ShaderError::Compile`].
    pub fn compile(driver: &'d D, stage: ShaderStage, source: &ShaderSource) -> Result<Self, ShaderError> {
        let id = driver
            .create_shader(stage)
            .map_err(|reason| ShaderError::Create {
                object: "shader",
                reason,
            })?;
        // Owned from here on so every early return deletes it.
        let shader = Self { driver, id, stage };

        driver.shader_source(id, source.as_c_str());
        driver.compile_shader(id);

        if !driver.compile_status(id) {
            let length = driver.shader_info_log_length(id);
            let log = fetch_info_log(length, |buf| driver.shader_info_log(id, buf));
            log::warn!("{stage} shader {} failed to compile", source.origin().display());
            return Err(ShaderError::Compile {
                stage,
                code: source.text(),
                log,
            });
        }

        log::debug!("compiled {stage} shader {}", source.origin().display());
        Ok(shader)
    }

    pub fn id(&self) -> D::Shader {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl<D: ShaderDriver> Drop for CompiledShader<'_, D> {
    fn drop(&mut self) {
        self.driver.delete_shader(self.id);
    }
}
