//! Opens a window and clears it to white.

use glow::HasContext;
use gltut::{SETTINGS_FILE, WindowSettings, abs::App};

fn main() {
    gltut::run_tutorial("tutorial1", || {
        let settings = WindowSettings::titled("Window").load_or(SETTINGS_FILE)?;
        let mut app = App::new(&settings)?;
        log::info!("OpenGL version {}", app.gl_version());

        unsafe {
            app.gl.clear_color(1.0, 1.0, 1.0, 1.0);
        }

        app.run(|frame| unsafe {
            frame.gl.clear(glow::COLOR_BUFFER_BIT);
        });
        Ok(())
    });
}
