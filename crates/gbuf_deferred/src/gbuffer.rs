use derive_more::Display;
use gbuf_graphics_hal::{
    frame_buffer::{FrameBuffer, FrameBufferStatus},
    render_buffer::RenderBufferFormat,
    sampler::SamplerState,
    texture::{PixelFormat, Texture},
    Graphics, GraphicsError, ImageSize,
};
use thiserror::Error;

/// What a g-buffer color attachment stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GBufferTextureKind {
    /// World-space position, 16-bit float RGB.
    Position,
    /// World-space normal, 16-bit float RGB.
    Normal,
    /// Albedo in RGB and specular intensity in A, 8-bit RGBA.
    AlbedoSpecular,
}

impl GBufferTextureKind {
    pub fn pixel_format(self) -> PixelFormat {
        match self {
            GBufferTextureKind::Position | GBufferTextureKind::Normal => PixelFormat::Rgb16F,
            GBufferTextureKind::AlbedoSpecular => PixelFormat::Rgba8,
        }
    }
}

/// Describes one color attachment requested from [`GBuffer::init`].
///
/// `texture` is filled in with the id of the created texture. The id stays
/// valid only as long as the [`GBuffer`] that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GBufferTexture<T> {
    pub kind: GBufferTextureKind,
    pub texture: Option<T>,
}

impl<T> GBufferTexture<T> {
    pub fn new(kind: GBufferTextureKind) -> Self {
        Self {
            kind,
            texture: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum GBufferState {
    #[display(fmt = "uninitialized")]
    Uninitialized,
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "failed")]
    Failed,
}

#[derive(Debug, Error)]
pub enum GBufferError {
    #[error("g-buffer frame buffer is not complete: {0}")]
    Incomplete(FrameBufferStatus),
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
    #[error("{requested} color attachments requested, but only {supported} are supported")]
    TooManyAttachments { requested: usize, supported: u32 },
    #[error("g-buffer is already initialized")]
    AlreadyInitialized,
    #[error("g-buffer is not ready to be bound, it is {0}")]
    NotReady(GBufferState),
}

/// An off-screen frame buffer with several color textures and an optional
/// depth buffer, rendered into by the geometry pass of a deferred renderer.
///
/// All GPU objects are owned and released on drop, whatever `init` returned.
/// Must be used on the thread that owns the graphics context.
pub struct GBuffer<G: Graphics> {
    ctx: G,
    state: GBufferState,
    size: ImageSize<u32>,

    // Field order is release order.
    frame_buffer: Option<G::FrameBuffer>,
    textures: Vec<G::Texture>,
    depth_buffer: Option<G::RenderBuffer>,
}

impl<G: Graphics> GBuffer<G> {
    pub fn new(ctx: G) -> Self {
        Self {
            ctx,
            state: GBufferState::Uninitialized,
            size: ImageSize::default(),
            frame_buffer: None,
            textures: Vec::new(),
            depth_buffer: None,
        }
    }

    /// Creates the frame buffer, one texture per descriptor attached at
    /// sequential color slots, and a depth render buffer if requested.
    ///
    /// On success the default frame buffer is bound again. On failure
    /// nothing is rolled back: the objects created so far stay owned by
    /// `self` until it is dropped, and the g-buffer frame buffer is left bound.
    pub fn init(
        &mut self,
        size: impl Into<ImageSize<u32>>,
        descriptors: &mut [GBufferTexture<G::TextureId>],
        need_depth_buffer: bool,
    ) -> Result<(), GBufferError> {
        if self.state != GBufferState::Uninitialized {
            return Err(GBufferError::AlreadyInitialized);
        }

        let supported = self.ctx.max_color_attachments();
        if descriptors.len() > supported as usize {
            return Err(GBufferError::TooManyAttachments {
                requested: descriptors.len(),
                supported,
            });
        }

        self.size = size.into();
        let result = self.create_attachments(descriptors, need_depth_buffer);
        self.state = match result {
            Ok(()) => GBufferState::Ready,
            Err(_) => GBufferState::Failed,
        };

        result
    }

    fn create_attachments(
        &mut self,
        descriptors: &mut [GBufferTexture<G::TextureId>],
        need_depth_buffer: bool,
    ) -> Result<(), GBufferError> {
        let size = self.size;
        if size.is_empty() {
            log::warn!("creating a g-buffer of zero size {}x{}", size.w, size.h);
        }

        let frame_buffer = self.frame_buffer.insert(self.ctx.new_frame_buffer()?);

        for (slot, descriptor) in descriptors.iter_mut().enumerate() {
            let texture = self.ctx.new_texture(
                descriptor.kind.pixel_format(),
                size,
                SamplerState::nearest(),
            )?;

            frame_buffer.attach_color(slot as u32, &texture);
            descriptor.texture = Some(texture.id());
            self.textures.push(texture);
        }

        frame_buffer.set_draw_buffers(descriptors.len() as u32);

        if need_depth_buffer {
            let render_buffer = self.ctx.new_render_buffer(size, RenderBufferFormat::Depth)?;
            let depth_buffer = self.depth_buffer.insert(render_buffer);
            frame_buffer.attach_depth_stencil(depth_buffer);
        }

        let status = frame_buffer.status();
        if !status.is_complete() {
            log::error!("g-buffer frame buffer is not complete: {status}");
            return Err(GBufferError::Incomplete(status));
        }

        self.ctx.bind_default_frame_buffer();
        log::debug!(
            "g-buffer ready: {}x{}, {} color attachments, depth: {}",
            size.w,
            size.h,
            self.textures.len(),
            need_depth_buffer
        );

        Ok(())
    }

    /// Makes the g-buffer the current render target.
    pub fn bind(&self) -> Result<(), GBufferError> {
        match (&self.frame_buffer, self.state) {
            (Some(frame_buffer), GBufferState::Ready) => {
                frame_buffer.bind();
                Ok(())
            }
            (_, state) => Err(GBufferError::NotReady(state)),
        }
    }

    /// Releases every GPU object. Same as dropping the g-buffer.
    pub fn destroy(self) {}

    pub fn state(&self) -> GBufferState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == GBufferState::Ready
    }

    pub fn size(&self) -> ImageSize<u32> {
        self.size
    }

    pub fn color_attachment_count(&self) -> usize {
        self.textures.len()
    }

    pub fn has_depth_buffer(&self) -> bool {
        self.depth_buffer.is_some()
    }

    /// The texture attached at color slot `slot`, for sampling in later passes.
    pub fn texture(&self, slot: usize) -> Option<&G::Texture> {
        self.textures.get(slot)
    }

    pub fn textures(&self) -> &[G::Texture] {
        &self.textures
    }
}

impl<G: Graphics> Drop for GBuffer<G> {
    fn drop(&mut self) {
        if self.state != GBufferState::Uninitialized {
            log::debug!(
                "releasing {} g-buffer: {} textures, depth: {}",
                self.state,
                self.textures.len(),
                self.depth_buffer.is_some()
            );
        }
    }
}
