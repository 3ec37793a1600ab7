//! Draws a single flat-colored triangle.

use glow::HasContext;
use gltut::{
    SETTINGS_FILE, WindowSettings,
    abs::{App, Attribute, Mesh},
    geometry,
};
use gltut_core::ShaderProgramBuilder;

fn main() {
    gltut::run_tutorial("tutorial2", || {
        let settings = WindowSettings::titled("Triangle").load_or(SETTINGS_FILE)?;
        let mut app = App::new(&settings)?;
        log::info!("OpenGL version {}", app.gl_version());

        let triangle = Mesh::new(&app.gl, &[Attribute::new(0, 3, &geometry::TRIANGLE)])?;
        let program = ShaderProgramBuilder::new(
            "shaders/triangle/vert.glsl",
            "shaders/triangle/frag.glsl",
        )
        .build(&app.gl)?;

        unsafe {
            app.gl.clear_color(0.11, 0.545, 0.765, 0.0);
        }

        app.run(|frame| {
            unsafe {
                frame
                    .gl
                    .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
            }
            program.use_program();
            triangle.draw();
        });
        Ok(())
    });
}
