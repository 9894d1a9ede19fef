use super::Vec2;

/// Screen size in pixels.
///
/// Fixed for a camera session; live window resizes are the host's concern.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Screen centre; the zoom anchor when the modifier is held.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() / 2.0
    }
}
