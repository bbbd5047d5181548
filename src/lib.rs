//! Geometry-buffer render targets for deferred rendering.
//!
//! [`GBuffer`] is generic over the [`Graphics`] hardware abstraction, and
//! [`Gles`] implements it on top of OpenGL / GLES.

pub use gbuf_deferred::*;
pub use gbuf_graphics_hal as hal;
pub use gbuf_graphics_hal::Graphics;
pub use gbuf_graphics_hal_gles::{Gles, GlesSettings};
