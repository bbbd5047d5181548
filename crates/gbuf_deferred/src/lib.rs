pub use gbuffer::{GBuffer, GBufferError, GBufferState, GBufferTexture, GBufferTextureKind};

mod gbuffer;

#[cfg(test)]
mod recording;
