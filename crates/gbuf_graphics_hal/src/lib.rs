use std::{ffi::c_void, fmt::Debug};

use frame_buffer::FrameBuffer;
use render_buffer::{RenderBuffer, RenderBufferFormat};
use sampler::SamplerState;
use texture::{PixelFormat, Texture};

pub use error::{GraphicsError, ObjectKind};
pub use primitives::*;

pub mod error;
pub mod frame_buffer;
pub mod primitives;
pub mod render_buffer;
pub mod sampler;
pub mod texture;

pub trait WindowBackend
where
    Self: 'static,
{
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

/// Entry point of a graphics backend.
///
/// A `Graphics` value is a cheap handle to the backend context. Every object
/// created through it keeps a clone of the handle, so the context outlives
/// all of its objects and nothing relies on a global current context.
pub trait Graphics
where
    Self: Sized + Clone + 'static,
{
    type Backend: WindowBackend;
    type TextureId: Copy + Eq + Debug;
    type Texture: Texture<Self>;
    type RenderBuffer: RenderBuffer<Self>;
    type FrameBuffer: FrameBuffer<Self>;

    fn new(backend: Self::Backend) -> Self;

    fn new_texture(
        &self,
        format: PixelFormat,
        size: impl Into<ImageSize<u32>>,
        sampler: SamplerState,
    ) -> Result<Self::Texture, GraphicsError> {
        Self::Texture::new(self.clone(), format, size.into(), sampler)
    }

    fn new_render_buffer(
        &self,
        size: impl Into<ImageSize<u32>>,
        format: RenderBufferFormat,
    ) -> Result<Self::RenderBuffer, GraphicsError> {
        Self::RenderBuffer::new(self.clone(), size.into(), format)
    }

    /// Creates an empty frame buffer and leaves it bound.
    fn new_frame_buffer(&self) -> Result<Self::FrameBuffer, GraphicsError> {
        Self::FrameBuffer::new(self.clone())
    }

    /// Makes the window frame buffer the current render target.
    fn bind_default_frame_buffer(&self);

    /// Number of color attachment slots a frame buffer supports.
    fn max_color_attachments(&self) -> u32;
}
