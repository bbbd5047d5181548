use gbuf_graphics_hal::{
    frame_buffer::FrameBufferStatus,
    render_buffer::RenderBufferFormat,
    sampler::{Filter, MinFilter, WrapFunction},
    texture::PixelFormat,
};

pub trait GlConstant {
    fn gl_const(self) -> u32;
}

impl GlConstant for WrapFunction {
    fn gl_const(self) -> u32 {
        match self {
            WrapFunction::Clamp => glow::CLAMP_TO_EDGE,
            WrapFunction::Repeat => glow::REPEAT,
            WrapFunction::MirrorClamp => glow::MIRROR_CLAMP_TO_EDGE,
            WrapFunction::MirrorRepeat => glow::MIRRORED_REPEAT,
        }
    }
}

impl GlConstant for Filter {
    fn gl_const(self) -> u32 {
        match self {
            Filter::Linear => glow::LINEAR,
            Filter::Nearest => glow::NEAREST,
        }
    }
}

impl GlConstant for MinFilter {
    fn gl_const(self) -> u32 {
        match self {
            MinFilter::Origin(filter) => filter.gl_const(),
            MinFilter::Mipmap {
                mipmap: Filter::Linear,
                texel: Filter::Nearest,
            } => glow::LINEAR_MIPMAP_NEAREST,
            MinFilter::Mipmap {
                mipmap: Filter::Nearest,
                texel: Filter::Linear,
            } => glow::NEAREST_MIPMAP_LINEAR,
            MinFilter::Mipmap {
                mipmap: Filter::Linear,
                texel: Filter::Linear,
            } => glow::LINEAR_MIPMAP_LINEAR,
            MinFilter::Mipmap {
                mipmap: Filter::Nearest,
                texel: Filter::Nearest,
            } => glow::NEAREST_MIPMAP_NEAREST,
        }
    }
}

impl GlConstant for RenderBufferFormat {
    fn gl_const(self) -> u32 {
        match self {
            RenderBufferFormat::Depth => glow::DEPTH_COMPONENT24,
            RenderBufferFormat::Stencil => glow::STENCIL_INDEX8,
            RenderBufferFormat::DepthStencil => glow::DEPTH24_STENCIL8,
        }
    }
}

/// Frame buffer attachment point a render buffer of this format binds to.
pub fn render_buffer_attachment(format: RenderBufferFormat) -> u32 {
    match format {
        RenderBufferFormat::Depth => glow::DEPTH_ATTACHMENT,
        RenderBufferFormat::Stencil => glow::STENCIL_ATTACHMENT,
        RenderBufferFormat::DepthStencil => glow::DEPTH_STENCIL_ATTACHMENT,
    }
}

/// Returns `(internal format, format, type)` for `glTexImage2D`.
pub fn pixel_format(format: PixelFormat) -> (u32, u32, u32) {
    match format {
        PixelFormat::Rgb8 => (glow::RGB8, glow::RGB, glow::UNSIGNED_BYTE),
        PixelFormat::Rgba8 => (glow::RGBA8, glow::RGBA, glow::UNSIGNED_BYTE),
        PixelFormat::Rgb16F => (glow::RGB16F, glow::RGB, glow::FLOAT),
        PixelFormat::Rgba16F => (glow::RGBA16F, glow::RGBA, glow::FLOAT),
    }
}

pub fn frame_buffer_status(status: u32) -> FrameBufferStatus {
    match status {
        glow::FRAMEBUFFER_COMPLETE => FrameBufferStatus::Complete,
        glow::FRAMEBUFFER_UNDEFINED => FrameBufferStatus::Undefined,
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FrameBufferStatus::IncompleteAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => FrameBufferStatus::MissingAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FrameBufferStatus::IncompleteDrawBuffer,
        glow::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FrameBufferStatus::IncompleteReadBuffer,
        glow::FRAMEBUFFER_UNSUPPORTED => FrameBufferStatus::Unsupported,
        glow::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FrameBufferStatus::IncompleteMultisample,
        glow::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FrameBufferStatus::IncompleteLayerTargets,
        other => FrameBufferStatus::Unknown(other),
    }
}
