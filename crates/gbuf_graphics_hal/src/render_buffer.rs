use crate::{Graphics, GraphicsError, ImageSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderBufferFormat {
    Depth,
    Stencil,
    DepthStencil,
}

pub trait RenderBuffer<G: Graphics> {
    fn new(ctx: G, size: ImageSize<u32>, format: RenderBufferFormat) -> Result<Self, GraphicsError>
    where
        Self: Sized;

    fn size(&self) -> ImageSize<u32>;

    fn format(&self) -> RenderBufferFormat;
}
