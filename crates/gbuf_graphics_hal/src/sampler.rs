#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    Linear,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinFilter {
    Origin(Filter),
    Mipmap { mipmap: Filter, texel: Filter },
}

impl Default for MinFilter {
    fn default() -> Self {
        Self::Origin(Filter::Linear)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapFunction {
    Clamp,
    #[default]
    Repeat,
    MirrorClamp,
    MirrorRepeat,
}

/// Filtering and wrapping baked into a texture at creation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerState {
    pub wrap: WrapFunction,
    pub min_filter: MinFilter,
    pub mag_filter: Filter,
}

impl SamplerState {
    pub fn nearest() -> Self {
        SamplerState {
            wrap: WrapFunction::Clamp,
            min_filter: MinFilter::Origin(Filter::Nearest),
            mag_filter: Filter::Nearest,
        }
    }

    /// A texture sampled with this state is only complete once it has mipmaps.
    pub fn uses_mipmaps(&self) -> bool {
        matches!(self.min_filter, MinFilter::Mipmap { .. })
    }
}
