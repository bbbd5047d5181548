use derive_more::Constructor;

#[derive(Constructor, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize<T> {
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T)> for ImageSize<T> {
    fn from((w, h): (T, T)) -> Self {
        Self::new(w, h)
    }
}

impl ImageSize<u32> {
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
