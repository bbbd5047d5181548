use crate::{sampler::SamplerState, Graphics, GraphicsError, ImageSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
    Rgb16F,
    Rgba16F,
}

/// An immutable-size 2D texture with storage but no initial contents.
pub trait Texture<G: Graphics> {
    fn new(
        ctx: G,
        format: PixelFormat,
        size: ImageSize<u32>,
        sampler: SamplerState,
    ) -> Result<Self, GraphicsError>
    where
        Self: Sized;

    fn id(&self) -> G::TextureId;

    fn size(&self) -> ImageSize<u32>;

    fn format(&self) -> PixelFormat;

    fn sampler(&self) -> SamplerState;
}
