//! In-memory graphics backend that journals every call.
//!
//! Completeness is emulated with the GL rules the g-buffer can run into:
//! no attachments at all, zero-sized attachments, attachments of different
//! sizes and draw buffers routed to empty color slots.

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::{BTreeMap, HashMap},
    ffi::c_void,
    ptr,
    rc::Rc,
};

use gbuf_graphics_hal::{
    frame_buffer::{FrameBuffer, FrameBufferStatus},
    render_buffer::{RenderBuffer, RenderBufferFormat},
    sampler::SamplerState,
    texture::{PixelFormat, Texture},
    Graphics, GraphicsError, ImageSize, ObjectKind, WindowBackend,
};
use smart_default::SmartDefault;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateFrameBuffer(u32),
    BindFrameBuffer(Option<u32>),
    CreateTexture {
        id: u32,
        format: PixelFormat,
        size: ImageSize<u32>,
        sampler: SamplerState,
    },
    CreateRenderBuffer {
        id: u32,
        format: RenderBufferFormat,
        size: ImageSize<u32>,
    },
    AttachColor {
        frame_buffer: u32,
        slot: u32,
        texture: u32,
    },
    AttachDepthStencil {
        frame_buffer: u32,
        render_buffer: u32,
    },
    DrawBuffers {
        frame_buffer: u32,
        count: u32,
    },
    DeleteFrameBuffer(u32),
    DeleteTexture(u32),
    DeleteRenderBuffer(u32),
}

#[derive(Default)]
struct Attachments {
    colors: BTreeMap<u32, u32>,
    depth_stencil: Option<u32>,
    draw_buffers: u32,
}

#[derive(SmartDefault)]
pub struct Journal {
    pub calls: Vec<Call>,
    pub bound_frame_buffer: Option<u32>,

    #[default(8)]
    pub max_color_attachments: u32,
    /// Index of the texture creation that fails, counting from zero.
    pub fail_texture_at: Option<usize>,
    /// Overrides the emulated completeness check.
    pub force_status: Option<FrameBufferStatus>,

    #[default(1)]
    next_id: u32,
    textures_requested: usize,
    sizes: HashMap<u32, ImageSize<u32>>,
    attachments: HashMap<u32, Attachments>,
}

impl Journal {
    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn bind(&mut self, frame_buffer: Option<u32>) {
        self.calls.push(Call::BindFrameBuffer(frame_buffer));
        self.bound_frame_buffer = frame_buffer;
    }

    fn status(&self, frame_buffer: u32) -> FrameBufferStatus {
        if let Some(status) = self.force_status {
            return status;
        }

        let attachments = &self.attachments[&frame_buffer];
        if attachments.colors.is_empty() && attachments.depth_stencil.is_none() {
            return FrameBufferStatus::MissingAttachment;
        }

        let attached = attachments
            .colors
            .values()
            .chain(attachments.depth_stencil.iter());
        let mut sizes = Vec::new();
        for id in attached {
            match self.sizes.get(id) {
                Some(size) if !size.is_empty() => sizes.push(*size),
                _ => return FrameBufferStatus::IncompleteAttachment,
            }
        }

        // GLES2 requires every attachment to share one size.
        if sizes.windows(2).any(|pair| pair[0] != pair[1]) {
            return FrameBufferStatus::IncompleteAttachment;
        }

        let routed_to_empty_slot =
            (0..attachments.draw_buffers).any(|slot| !attachments.colors.contains_key(&slot));
        if routed_to_empty_slot {
            return FrameBufferStatus::IncompleteDrawBuffer;
        }

        FrameBufferStatus::Complete
    }
}

pub struct NullBackend;

impl WindowBackend for NullBackend {
    fn get_proc_address(&self, _symbol: &str) -> *const c_void {
        ptr::null()
    }
}

#[derive(Clone)]
pub struct Recorder(Rc<RefCell<Journal>>);

impl Recorder {
    pub fn journal(&self) -> Ref<'_, Journal> {
        self.0.borrow()
    }

    pub fn journal_mut(&self) -> RefMut<'_, Journal> {
        self.0.borrow_mut()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.journal_mut().calls.clear();
    }

    /// Ids of every object created so far, in creation order.
    pub fn created(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateFrameBuffer(id)
                | Call::CreateTexture { id, .. }
                | Call::CreateRenderBuffer { id, .. } => Some(id),
                _ => None,
            })
            .collect()
    }

    /// Ids of every object deleted so far, in deletion order, duplicates included.
    pub fn deleted(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DeleteFrameBuffer(id)
                | Call::DeleteTexture(id)
                | Call::DeleteRenderBuffer(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl Graphics for Recorder {
    type Backend = NullBackend;
    type TextureId = u32;
    type Texture = RecordedTexture;
    type RenderBuffer = RecordedRenderBuffer;
    type FrameBuffer = RecordedFrameBuffer;

    fn new(_backend: NullBackend) -> Self {
        Recorder(Default::default())
    }

    fn bind_default_frame_buffer(&self) {
        self.journal_mut().bind(None);
    }

    fn max_color_attachments(&self) -> u32 {
        self.journal().max_color_attachments
    }
}

pub struct RecordedTexture {
    ctx: Recorder,
    id: u32,
    format: PixelFormat,
    size: ImageSize<u32>,
    sampler: SamplerState,
}

impl Texture<Recorder> for RecordedTexture {
    fn new(
        ctx: Recorder,
        format: PixelFormat,
        size: ImageSize<u32>,
        sampler: SamplerState,
    ) -> Result<Self, GraphicsError> {
        let id = {
            let mut journal = ctx.journal_mut();
            let index = journal.textures_requested;
            journal.textures_requested += 1;
            if journal.fail_texture_at == Some(index) {
                return Err(GraphicsError::allocation(ObjectKind::Texture, "out of memory"));
            }

            let id = journal.next_id();
            journal.sizes.insert(id, size);
            journal.calls.push(Call::CreateTexture {
                id,
                format,
                size,
                sampler,
            });
            id
        };

        Ok(Self {
            ctx,
            id,
            format,
            size,
            sampler,
        })
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn size(&self) -> ImageSize<u32> {
        self.size
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn sampler(&self) -> SamplerState {
        self.sampler
    }
}

impl Drop for RecordedTexture {
    fn drop(&mut self) {
        let mut journal = self.ctx.journal_mut();
        journal.sizes.remove(&self.id);
        journal.calls.push(Call::DeleteTexture(self.id));
    }
}

pub struct RecordedRenderBuffer {
    ctx: Recorder,
    id: u32,
    size: ImageSize<u32>,
    format: RenderBufferFormat,
}

impl RenderBuffer<Recorder> for RecordedRenderBuffer {
    fn new(
        ctx: Recorder,
        size: ImageSize<u32>,
        format: RenderBufferFormat,
    ) -> Result<Self, GraphicsError> {
        let id = {
            let mut journal = ctx.journal_mut();
            let id = journal.next_id();
            journal.sizes.insert(id, size);
            journal
                .calls
                .push(Call::CreateRenderBuffer { id, format, size });
            id
        };

        Ok(Self {
            ctx,
            id,
            size,
            format,
        })
    }

    fn size(&self) -> ImageSize<u32> {
        self.size
    }

    fn format(&self) -> RenderBufferFormat {
        self.format
    }
}

impl Drop for RecordedRenderBuffer {
    fn drop(&mut self) {
        let mut journal = self.ctx.journal_mut();
        journal.sizes.remove(&self.id);
        journal.calls.push(Call::DeleteRenderBuffer(self.id));
    }
}

pub struct RecordedFrameBuffer {
    ctx: Recorder,
    id: u32,
}

impl RecordedFrameBuffer {
    fn bound(&self) -> RefMut<'_, Journal> {
        let mut journal = self.ctx.journal_mut();
        if journal.bound_frame_buffer != Some(self.id) {
            journal.bind(Some(self.id));
        }
        journal
    }
}

impl FrameBuffer<Recorder> for RecordedFrameBuffer {
    fn new(ctx: Recorder) -> Result<Self, GraphicsError> {
        let id = {
            let mut journal = ctx.journal_mut();
            let id = journal.next_id();
            journal.attachments.insert(id, Attachments::default());
            journal.calls.push(Call::CreateFrameBuffer(id));
            journal.bind(Some(id));
            id
        };

        Ok(Self { ctx, id })
    }

    fn bind(&self) {
        self.ctx.journal_mut().bind(Some(self.id));
    }

    fn attach_color(&self, slot: u32, texture: &RecordedTexture) {
        let mut journal = self.bound();
        let attachments = journal.attachments.entry(self.id).or_default();
        attachments.colors.insert(slot, texture.id);
        journal.calls.push(Call::AttachColor {
            frame_buffer: self.id,
            slot,
            texture: texture.id,
        });
    }

    fn attach_depth_stencil(&self, render_buffer: &RecordedRenderBuffer) {
        let mut journal = self.bound();
        let attachments = journal.attachments.entry(self.id).or_default();
        attachments.depth_stencil = Some(render_buffer.id);
        journal.calls.push(Call::AttachDepthStencil {
            frame_buffer: self.id,
            render_buffer: render_buffer.id,
        });
    }

    fn set_draw_buffers(&self, count: u32) {
        let mut journal = self.bound();
        let attachments = journal.attachments.entry(self.id).or_default();
        attachments.draw_buffers = count;
        journal.calls.push(Call::DrawBuffers {
            frame_buffer: self.id,
            count,
        });
    }

    fn status(&self) -> FrameBufferStatus {
        self.bound().status(self.id)
    }
}

impl Drop for RecordedFrameBuffer {
    fn drop(&mut self) {
        let mut journal = self.ctx.journal_mut();
        if journal.bound_frame_buffer == Some(self.id) {
            journal.bound_frame_buffer = None;
        }
        journal.attachments.remove(&self.id);
        journal.calls.push(Call::DeleteFrameBuffer(self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(ctx: &Recorder, size: (u32, u32)) -> RecordedTexture {
        let format = PixelFormat::Rgb16F;
        let sampler = SamplerState::nearest();
        ctx.new_texture(format, size, sampler).unwrap()
    }

    fn depth(ctx: &Recorder, size: (u32, u32)) -> RecordedRenderBuffer {
        let format = RenderBufferFormat::Depth;
        ctx.new_render_buffer(size, format).unwrap()
    }

    #[test]
    fn test_matching_sizes_are_complete() {
        let ctx = Recorder::new(NullBackend);
        let frame_buffer = ctx.new_frame_buffer().unwrap();
        let position = texture(&ctx, (64, 64));
        let normal = texture(&ctx, (64, 64));
        let depth = depth(&ctx, (64, 64));

        frame_buffer.attach_color(0, &position);
        frame_buffer.attach_color(1, &normal);
        frame_buffer.attach_depth_stencil(&depth);
        frame_buffer.set_draw_buffers(2);

        assert_eq!(frame_buffer.status(), FrameBufferStatus::Complete);
    }

    #[test]
    fn test_mismatched_color_sizes_are_incomplete() {
        let ctx = Recorder::new(NullBackend);
        let frame_buffer = ctx.new_frame_buffer().unwrap();
        let position = texture(&ctx, (64, 64));
        let normal = texture(&ctx, (32, 16));

        frame_buffer.attach_color(0, &position);
        frame_buffer.attach_color(1, &normal);
        frame_buffer.set_draw_buffers(2);

        assert_eq!(
            frame_buffer.status(),
            FrameBufferStatus::IncompleteAttachment
        );
    }

    #[test]
    fn test_mismatched_depth_size_is_incomplete() {
        let ctx = Recorder::new(NullBackend);
        let frame_buffer = ctx.new_frame_buffer().unwrap();
        let position = texture(&ctx, (64, 64));
        let depth = depth(&ctx, (32, 32));

        frame_buffer.attach_color(0, &position);
        frame_buffer.attach_depth_stencil(&depth);
        frame_buffer.set_draw_buffers(1);

        assert_eq!(
            frame_buffer.status(),
            FrameBufferStatus::IncompleteAttachment
        );
    }
}
