use std::{
    ffi::{CStr, CString},
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::ShaderError;

/// Shader text ready to be handed to the driver.
///
/// The text is kept NUL-terminated so it can be passed straight through to C
/// entry points. `origin` is the file it came from, or a label for in-memory
/// sources.
#[derive(Clone)]
pub struct ShaderSource {
    origin: PathBuf,
    code: CString,
}

impl ShaderSource {
    /// Wraps in-memory shader text, e.g. from `include_str!`.
    ///
    /// Fails if the text contains a NUL byte, which would silently truncate
    /// the source on the driver side.
    pub fn new(label: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, ShaderError> {
        let origin = label.into();
        let code = CString::new(text.into()).map_err(|e| ShaderError::Io {
            path: origin.clone(),
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!("interior NUL byte at offset {}", e.nul_position()),
            ),
        })?;
        Ok(Self { origin, code })
    }

    /// Reads the whole file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes of shader source from {}", text.len(), path.display());
        Self::new(path, text)
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// The source with its trailing NUL.
    pub fn as_c_str(&self) -> &CStr {
        &self.code
    }

    /// The source text without the terminator.
    pub fn text(&self) -> String {
        self.code.to_string_lossy().into_owned()
    }
}

impl fmt::Debug for ShaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderSource")
            .field("origin", &self.origin)
            .field("len", &self.code.as_bytes().len())
            .finish()
    }
}
