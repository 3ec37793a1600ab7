//! Draws a cube with random vertex colors, seen by a camera orbiting it.

use glam::Mat4;
use glow::HasContext;
use gltut::{
    SETTINGS_FILE, WindowSettings,
    abs::{App, Attribute, Mesh},
    camera::Camera,
    geometry,
};
use gltut_core::ShaderProgramBuilder;

/// Radians per second.
const ORBIT_SPEED: f32 = 0.5;

fn main() {
    gltut::run_tutorial("tutorial4", || {
        let settings = WindowSettings::titled("Cube").load_or(SETTINGS_FILE)?;
        let mut app = App::new(&settings)?;
        log::info!("OpenGL version {}", app.gl_version());

        let colors = geometry::random_colors(geometry::vertex_count(&geometry::CUBE), &mut rand::rng());
        let cube = Mesh::new(
            &app.gl,
            &[
                Attribute::new(0, 3, &geometry::CUBE),
                Attribute::new(1, 3, &colors),
            ],
        )?;
        let program = ShaderProgramBuilder::from_dir("shaders/cube").build(&app.gl)?;

        let camera = Camera::default();
        let model = Mat4::IDENTITY;

        unsafe {
            app.gl.clear_color(0.11, 0.545, 0.765, 0.0);
            app.gl.enable(glow::DEPTH_TEST);
            // Keep the fragment closest to the camera.
            app.gl.depth_func(glow::LESS);
        }

        program.use_program();
        if program.uniform_location("MVP").is_none() {
            log::warn!("cube program has no MVP uniform");
        }

        app.run(|frame| {
            unsafe {
                frame
                    .gl
                    .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
            }
            let mvp = camera
                .orbit(frame.elapsed * ORBIT_SPEED)
                .mvp(model, frame.aspect_ratio());

            program.use_program();
            program.set_uniform("MVP", mvp);
            cube.draw();
        });
        Ok(())
    });
}
