//! Shared pieces of the OpenGL tutorials: window and context setup, mesh
//! upload, the camera transform, and startup plumbing (settings, logging,
//! errors). Shader programs come from [`gltut_core`].

pub mod abs;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod settings;

pub use error::AppError;
pub use settings::{SETTINGS_FILE, WindowSettings};

/// Runs a tutorial body and turns its failure into a logged, non-zero exit.
pub fn run_tutorial(name: &str, body: impl FnOnce() -> Result<(), AppError>) {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }
    log::info!("starting {name}");

    if let Err(e) = body() {
        log::error!("{name} failed: {e}");
        std::process::exit(1);
    }
}
