use gbuf_graphics_hal::{
    sampler::SamplerState,
    texture::{PixelFormat, Texture},
    GraphicsError, ImageSize, ObjectKind, WindowBackend,
};
use glow::HasContext;

use crate::{
    constants::{pixel_format, GlConstant},
    Gles,
};

pub struct GlesTexture<B: WindowBackend> {
    ctx: Gles<B>,
    format: PixelFormat,
    sampler: SamplerState,
    pub size: ImageSize<u32>,
    pub texture: glow::Texture,
}

impl<B: WindowBackend> Texture<Gles<B>> for GlesTexture<B> {
    fn new(
        ctx: Gles<B>,
        format: PixelFormat,
        size: ImageSize<u32>,
        sampler: SamplerState,
    ) -> Result<Self, GraphicsError> {
        let texture = unsafe {
            let mut ctx = ctx.get_ref();
            let texture = ctx
                .gl
                .create_texture()
                .map_err(|e| GraphicsError::allocation(ObjectKind::Texture, e))?;

            ctx.bind_texture(Some(texture));

            // Storage only, contents are rendered into later.
            let (internal_format, format, ty) = pixel_format(format);
            ctx.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format as i32,
                size.w as i32,
                size.h as i32,
                0,
                format,
                ty,
                None,
            );

            let gl = ctx.gl;
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                sampler.min_filter.gl_const() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                sampler.mag_filter.gl_const() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                sampler.wrap.gl_const() as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                sampler.wrap.gl_const() as i32,
            );

            // A mipmapped min filter leaves the texture incomplete without levels.
            if sampler.uses_mipmaps() {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }

            ctx.check_error("texture creation");
            texture
        };

        log::debug!("created {format:?} texture {}x{}", size.w, size.h);

        Ok(GlesTexture {
            ctx,
            format,
            sampler,
            size,
            texture,
        })
    }

    fn id(&self) -> glow::Texture {
        self.texture
    }

    fn size(&self) -> ImageSize<u32> {
        self.size
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn sampler(&self) -> SamplerState {
        self.sampler
    }
}

impl<B: WindowBackend> Drop for GlesTexture<B> {
    fn drop(&mut self) {
        let mut ctx = self.ctx.get_ref();
        if ctx.state.bound_texture == Some(self.texture) {
            ctx.bind_texture(None);
        }

        unsafe { ctx.gl.delete_texture(self.texture) };
    }
}
