//! Window settings.
//!
//! Every tutorial has built-in defaults. A `settings.json` in the working
//! directory may override any subset of them.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::AppError;

/// File looked up in the working directory at startup.
pub const SETTINGS_FILE: &str = "settings.json";

/// Parameters for the window and its OpenGL context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
    pub gl_major: u8,
    pub gl_minor: u8,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            width: 640,
            height: 480,
            resizable: true,
            vsync: true,
            gl_major: 4,
            gl_minor: 1,
        }
    }
}

impl WindowSettings {
    /// Defaults with a different window title.
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Applies the JSON object in `json` on top of `self`.
    pub fn merge_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), serde_json::Value::Object(overrides)) = (value.as_object_mut(), overrides) {
            base.extend(overrides);
        }
        serde_json::from_value(value)
    }

    /// Loads overrides from `path` on top of `self`, or returns `self`
    /// unchanged if the file does not exist.
    pub fn load_or(self, path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no {}, using built-in window settings", path.display());
                return Ok(self);
            }
            Err(source) => {
                return Err(AppError::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = self
            .merge_json(&json)
            .map_err(|source| AppError::SettingsFormat {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("loaded window settings from {}", path.display());
        Ok(settings)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
