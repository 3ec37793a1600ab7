use std::{io, path::PathBuf};

use gltut_core::ShaderError;
use thiserror::Error;

/// Startup failures of a tutorial.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("failed to read settings from {}: {source}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error("OpenGL error: {0}")]
    Gl(String),

    #[error("mesh attribute {index} has {actual} vertices, expected {expected}")]
    AttributeCount {
        index: u32,
        expected: usize,
        actual: usize,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
