use std::rc::Rc;

use context::GlesContext;
use derive_more::Deref;
use frame_buffer::GlesFrameBuffer;
use gbuf_graphics_hal::{Graphics, WindowBackend};
use render_buffer::GlesRenderBuffer;
use smart_default::SmartDefault;
use texture::GlesTexture;

mod constants;
mod context;
mod frame_buffer;
mod render_buffer;
mod texture;

#[derive(Deref)]
pub struct Gles<B: WindowBackend>(pub Rc<GlesContext<B>>);

#[derive(SmartDefault, Clone, Debug)]
pub struct GlesSettings {
    /// If true, `glGetError` is queried after every object operation and
    /// failures are logged as warnings.
    ///
    /// This forces a pipeline sync on most drivers, so it is only enabled
    /// by default in debug builds.
    #[default(cfg!(debug_assertions))]
    pub check_errors: bool,
}

impl<B: WindowBackend> Gles<B> {
    pub fn new_with_settings(backend: B, settings: GlesSettings) -> Self {
        let ctx = unsafe { GlesContext::new(backend, settings) };
        Self(Rc::new(ctx))
    }
}

impl<B: WindowBackend> Clone for Gles<B> {
    fn clone(&self) -> Self {
        Gles(self.0.clone())
    }
}

impl<B: WindowBackend + 'static> Graphics for Gles<B> {
    type Backend = B;
    type TextureId = glow::Texture;
    type Texture = GlesTexture<B>;
    type RenderBuffer = GlesRenderBuffer<B>;
    type FrameBuffer = GlesFrameBuffer<B>;

    fn new(backend: B) -> Self {
        Self::new_with_settings(backend, Default::default())
    }

    fn bind_default_frame_buffer(&self) {
        self.get_ref().bind_frame_buffer(None);
    }

    fn max_color_attachments(&self) -> u32 {
        self.limits.max_color_attachments
    }
}
