use derive_more::Display;

use crate::{Graphics, GraphicsError};

/// Result of a frame buffer completeness check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum FrameBufferStatus {
    #[display(fmt = "complete")]
    Complete,
    #[display(fmt = "undefined")]
    Undefined,
    #[display(fmt = "incomplete attachment")]
    IncompleteAttachment,
    #[display(fmt = "missing attachment")]
    MissingAttachment,
    #[display(fmt = "incomplete draw buffer")]
    IncompleteDrawBuffer,
    #[display(fmt = "incomplete read buffer")]
    IncompleteReadBuffer,
    #[display(fmt = "unsupported attachment combination")]
    Unsupported,
    #[display(fmt = "incomplete multisample")]
    IncompleteMultisample,
    #[display(fmt = "incomplete layer targets")]
    IncompleteLayerTargets,
    #[display(fmt = "unknown status {:#x}", _0)]
    Unknown(u32),
}

impl FrameBufferStatus {
    pub fn is_complete(self) -> bool {
        self == FrameBufferStatus::Complete
    }
}

/// An off-screen render target assembled from attachments.
///
/// Attachment calls bind the frame buffer first if it is not bound yet.
/// Attached objects are not owned by the frame buffer: the caller keeps them
/// alive for as long as the frame buffer is used.
pub trait FrameBuffer<G: Graphics> {
    /// Creates an empty frame buffer and leaves it bound.
    fn new(ctx: G) -> Result<Self, GraphicsError>
    where
        Self: Sized;

    fn bind(&self);

    /// Attaches `texture` at color attachment `slot`.
    fn attach_color(&self, slot: u32, texture: &G::Texture);

    /// Attaches `render_buffer` at the depth and/or stencil slot matching its format.
    fn attach_depth_stencil(&self, render_buffer: &G::RenderBuffer);

    /// Routes fragment outputs `0..count` to color attachments `0..count`.
    fn set_draw_buffers(&self, count: u32);

    fn status(&self) -> FrameBufferStatus;
}
