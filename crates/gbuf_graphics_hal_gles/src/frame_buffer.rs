use gbuf_graphics_hal::{
    frame_buffer::{FrameBuffer, FrameBufferStatus},
    render_buffer::RenderBuffer,
    GraphicsError, ObjectKind, WindowBackend,
};
use glow::HasContext;

use crate::{
    constants::{frame_buffer_status, render_buffer_attachment},
    render_buffer::GlesRenderBuffer,
    texture::GlesTexture,
    Gles,
};

pub struct GlesFrameBuffer<B: WindowBackend> {
    ctx: Gles<B>,
    framebuffer: glow::Framebuffer,
}

impl<B: WindowBackend> FrameBuffer<Gles<B>> for GlesFrameBuffer<B> {
    fn new(ctx: Gles<B>) -> Result<Self, GraphicsError> {
        let framebuffer = unsafe {
            let mut ctx = ctx.get_ref();
            let fb = ctx
                .gl
                .create_framebuffer()
                .map_err(|e| GraphicsError::allocation(ObjectKind::FrameBuffer, e))?;
            ctx.bind_frame_buffer(Some(fb));
            fb
        };

        Ok(Self { ctx, framebuffer })
    }

    fn bind(&self) {
        self.ctx.get_ref().bind_frame_buffer(Some(self.framebuffer));
    }

    fn attach_color(&self, slot: u32, texture: &GlesTexture<B>) {
        let mut ctx = self.ctx.get_ref();
        ctx.bind_frame_buffer(Some(self.framebuffer));
        unsafe {
            ctx.gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0 + slot,
                glow::TEXTURE_2D,
                Some(texture.texture),
                0,
            )
        };
        ctx.check_error("color attachment");
    }

    fn attach_depth_stencil(&self, render_buffer: &GlesRenderBuffer<B>) {
        let mut ctx = self.ctx.get_ref();
        ctx.bind_frame_buffer(Some(self.framebuffer));
        unsafe {
            ctx.gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                render_buffer_attachment(render_buffer.format()),
                glow::RENDERBUFFER,
                Some(render_buffer.renderbuffer),
            )
        };
        ctx.check_error("depth/stencil attachment");
    }

    fn set_draw_buffers(&self, count: u32) {
        let buffers: Vec<u32> = (0..count).map(|i| glow::COLOR_ATTACHMENT0 + i).collect();

        let mut ctx = self.ctx.get_ref();
        ctx.bind_frame_buffer(Some(self.framebuffer));
        unsafe { ctx.gl.draw_buffers(&buffers) };
        ctx.check_error("draw buffer selection");
    }

    fn status(&self) -> FrameBufferStatus {
        let mut ctx = self.ctx.get_ref();
        ctx.bind_frame_buffer(Some(self.framebuffer));
        let status = unsafe { ctx.gl.check_framebuffer_status(glow::FRAMEBUFFER) };
        frame_buffer_status(status)
    }
}

impl<B: WindowBackend> Drop for GlesFrameBuffer<B> {
    fn drop(&mut self) {
        let mut ctx = self.ctx.get_ref();

        // Deleting the bound frame buffer reverts the binding to the default one.
        if ctx.state.bound_frame_buffer == Some(self.framebuffer) {
            ctx.state.bound_frame_buffer = None;
        }

        unsafe { ctx.gl.delete_framebuffer(self.framebuffer) };
    }
}
