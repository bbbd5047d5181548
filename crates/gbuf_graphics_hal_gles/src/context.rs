use std::cell::{RefCell, RefMut};

use gbuf_graphics_hal::WindowBackend;
use glow::HasContext;

use crate::GlesSettings;

/// Keep current state for optimizations here, such as
/// currently bound objects.
#[derive(Default)]
pub struct GlesState {
    pub bound_texture: Option<glow::Texture>,
    pub bound_frame_buffer: Option<glow::Framebuffer>,
    pub bound_render_buffer: Option<glow::Renderbuffer>,
}

pub struct Limits {
    /// Color attachments usable at once, i.e. also routable through draw buffers.
    pub max_color_attachments: u32,
}

pub struct GlesContext<B: WindowBackend> {
    pub gl: glow::Context,
    pub backend: B,
    pub state: RefCell<GlesState>,
    pub limits: Limits,
    pub settings: GlesSettings,
}

impl<B: WindowBackend> GlesContext<B> {
    /// # Safety
    ///
    /// The GL context `backend` loads from must be current on this thread
    /// for the whole lifetime of the returned value.
    pub unsafe fn new(backend: B, settings: GlesSettings) -> Self {
        let gl = glow::Context::from_loader_function(|s| backend.get_proc_address(s));

        let color_attachments = gl.get_parameter_i32(glow::MAX_COLOR_ATTACHMENTS);
        let draw_buffers = gl.get_parameter_i32(glow::MAX_DRAW_BUFFERS);
        let limits = Limits {
            max_color_attachments: color_attachments.min(draw_buffers).max(0) as u32,
        };

        log::debug!(
            "GL context loaded, {} color attachments available",
            limits.max_color_attachments
        );

        Self {
            gl,
            backend,
            state: Default::default(),
            limits,
            settings,
        }
    }

    pub fn get_ref(&self) -> GlesContextRef<'_> {
        GlesContextRef {
            gl: &self.gl,
            state: self.state.borrow_mut(),
            settings: &self.settings,
        }
    }
}

pub struct GlesContextRef<'a> {
    pub gl: &'a glow::Context,
    pub state: RefMut<'a, GlesState>,
    pub settings: &'a GlesSettings,
}

impl<'a> GlesContextRef<'a> {
    pub fn bind_texture(&mut self, texture: Option<glow::Texture>) {
        if self.state.bound_texture != texture {
            unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture) };
            self.state.bound_texture = texture;
        }
    }

    pub fn bind_render_buffer(&mut self, render_buffer: Option<glow::Renderbuffer>) {
        if self.state.bound_render_buffer != render_buffer {
            unsafe { self.gl.bind_renderbuffer(glow::RENDERBUFFER, render_buffer) };
            self.state.bound_render_buffer = render_buffer;
        }
    }

    pub fn bind_frame_buffer(&mut self, frame_buffer: Option<glow::Framebuffer>) {
        if self.state.bound_frame_buffer != frame_buffer {
            unsafe { self.gl.bind_framebuffer(glow::FRAMEBUFFER, frame_buffer) };
            self.state.bound_frame_buffer = frame_buffer;
        }
    }

    /// Logs a pending GL error raised by `operation`, if error checks are enabled.
    pub fn check_error(&self, operation: &str) {
        if !self.settings.check_errors {
            return;
        }

        let error = unsafe { self.gl.get_error() };
        if error != glow::NO_ERROR {
            log::warn!("{operation} raised GL error {error:#x}");
        }
    }
}
