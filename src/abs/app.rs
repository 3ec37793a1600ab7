//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! window and the OpenGL context it renders into, plus the render loop.

use std::{rc::Rc, time::Instant};

use glow::HasContext;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    video::{GLProfile, SwapInterval},
};

use crate::{AppError, WindowSettings};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// The context is shared as an `Rc`, so neither the app nor anything built
/// from its context can leave the thread that created it.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Rc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    size: (u32, u32),
}

/// What the frame callback gets to see each iteration of the render loop.
pub struct Frame<'a> {
    pub gl: &'a glow::Context,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the loop started.
    pub elapsed: f32,
    pub width: u32,
    pub height: u32,
}

impl Frame<'_> {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl App {
    /// Opens a window with a core-profile, forward-compatible OpenGL context
    /// and makes the context current.
    pub fn new(settings: &WindowSettings) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Sdl)?;
        let video_subsystem = sdl.video().map_err(AppError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(settings.gl_major, settings.gl_minor);
        gl_attr.set_context_flags().forward_compatible().set();

        let mut builder = video_subsystem.window(&settings.title, settings.width, settings.height);
        builder.opengl().position_centered();
        if settings.resizable {
            builder.resizable();
        }
        let window = builder.build()?;

        let gl_context = window.gl_create_context().map_err(AppError::Sdl)?;
        window.gl_make_current(&gl_context).map_err(AppError::Sdl)?;

        let interval = if settings.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(AppError::Sdl)?;

        let size = window.drawable_size();
        unsafe {
            gl.viewport(0, 0, size.0 as i32, size.1 as i32);
        }

        log::info!(
            "opened {}x{} window \"{}\"",
            settings.width,
            settings.height,
            settings.title
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Rc::new(gl),
            event_pump,
            size,
        })
    }

    /// The `GL_VERSION` string of the current context.
    pub fn gl_version(&self) -> String {
        unsafe { self.gl.get_parameter_string(glow::VERSION) }
    }

    /// Current drawable size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Runs the render loop until the window is closed or Escape is pressed.
    ///
    /// `frame` is called once per iteration after events are handled; the
    /// buffers are swapped after it returns.
    pub fn run(&mut self, mut frame: impl FnMut(&Frame<'_>)) {
        let start = Instant::now();
        let mut last_frame = start;

        'running: loop {
            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'running,
                    Event::Window {
                        win_event: WindowEvent::Resized(width, height),
                        ..
                    } => {
                        unsafe {
                            self.gl.viewport(0, 0, width, height);
                        }
                        self.size = (width.max(0) as u32, height.max(0) as u32);
                        log::debug!("resized to {width}x{height}");
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            frame(&Frame {
                gl: &self.gl,
                delta_time: now.duration_since(last_frame).as_secs_f32(),
                elapsed: now.duration_since(start).as_secs_f32(),
                width: self.size.0,
                height: self.size.1,
            });
            last_frame = now;

            self.window.gl_swap_window();
        }

        log::info!("window closed after {:.1}s", start.elapsed().as_secs_f32());
    }
}

