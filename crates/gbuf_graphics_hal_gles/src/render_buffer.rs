use gbuf_graphics_hal::{
    render_buffer::{RenderBuffer, RenderBufferFormat},
    GraphicsError, ImageSize, ObjectKind, WindowBackend,
};
use glow::HasContext;

use crate::{constants::GlConstant, Gles};

pub struct GlesRenderBuffer<B: WindowBackend> {
    ctx: Gles<B>,
    size: ImageSize<u32>,
    format: RenderBufferFormat,
    pub renderbuffer: glow::Renderbuffer,
}

impl<B: WindowBackend> RenderBuffer<Gles<B>> for GlesRenderBuffer<B> {
    fn new(
        ctx: Gles<B>,
        size: ImageSize<u32>,
        format: RenderBufferFormat,
    ) -> Result<Self, GraphicsError> {
        let renderbuffer = unsafe {
            let mut ctx = ctx.get_ref();
            let rb = ctx
                .gl
                .create_renderbuffer()
                .map_err(|e| GraphicsError::allocation(ObjectKind::RenderBuffer, e))?;
            ctx.bind_render_buffer(Some(rb));
            ctx.gl.renderbuffer_storage(
                glow::RENDERBUFFER,
                format.gl_const(),
                size.w as i32,
                size.h as i32,
            );

            ctx.check_error("render buffer creation");
            rb
        };

        log::debug!("created {format:?} render buffer {}x{}", size.w, size.h);

        Ok(Self {
            ctx,
            size,
            format,
            renderbuffer,
        })
    }

    fn size(&self) -> ImageSize<u32> {
        self.size
    }

    fn format(&self) -> RenderBufferFormat {
        self.format
    }
}

impl<B: WindowBackend> Drop for GlesRenderBuffer<B> {
    fn drop(&mut self) {
        unsafe {
            let mut ctx = self.ctx.get_ref();
            if ctx.state.bound_render_buffer == Some(self.renderbuffer) {
                ctx.bind_render_buffer(None);
            }
            ctx.gl.delete_renderbuffer(self.renderbuffer);
        }
    }
}
