use derive_more::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ObjectKind {
    #[display(fmt = "texture")]
    Texture,
    #[display(fmt = "render buffer")]
    RenderBuffer,
    #[display(fmt = "frame buffer")]
    FrameBuffer,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphicsError {
    #[error("unable to create a {kind}: {reason}")]
    Allocation { kind: ObjectKind, reason: String },
}

impl GraphicsError {
    pub fn allocation(kind: ObjectKind, reason: impl Into<String>) -> Self {
        Self::Allocation {
            kind,
            reason: reason.into(),
        }
    }
}
