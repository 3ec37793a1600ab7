//! Errors produced while building a shader program.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::ShaderStage;

/// Everything that can go wrong between reading shader files and holding a
/// linked program.
#[derive(Debug, Error)]
pub enum ShaderError {
    /// A shader source file could not be read.
    #[error("failed to read shader source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The driver rejected a shader. `code` is the source that was submitted.
    #[error("failed to compile {stage} shader: {log}\n{code}")]
    Compile {
        stage: ShaderStage,
        code: String,
        log: String,
    },

    /// The driver rejected the program linkage.
    #[error("failed to link program: {log}")]
    Link { log: String },

    /// The driver refused to allocate a shader or program object.
    #[error("failed to create {object}: {reason}")]
    Create { object: &'static str, reason: String },
}

impl ShaderError {
    /// The driver diagnostic attached to a compile or link failure.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Compile { log, .. } | Self::Link { log } => Some(log),
            _ => None,
        }
    }
}
