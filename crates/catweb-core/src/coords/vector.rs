use super::{ScaleOffset, Vec2};

/// Position of an element relative to its parent, one [`ScaleOffset`] per axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PositionVector {
    pub x: ScaleOffset,
    pub y: ScaleOffset,
}

impl PositionVector {
    #[inline]
    pub const fn new(x: ScaleOffset, y: ScaleOffset) -> Self {
        Self { x, y }
    }

    /// Absolute pixel coordinates inside a parent of the given size.
    ///
    /// Each axis resolves against its own parent dimension only.
    #[inline]
    pub fn to_pixels(self, parent_width: f64, parent_height: f64) -> Vec2 {
        Vec2::new(self.x.resolve(parent_width), self.y.resolve(parent_height))
    }
}

/// Size of an element relative to its parent, one [`ScaleOffset`] per axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SizeVector {
    pub width: ScaleOffset,
    pub height: ScaleOffset,
}

impl SizeVector {
    #[inline]
    pub const fn new(width: ScaleOffset, height: ScaleOffset) -> Self {
        Self { width, height }
    }

    /// Fills the parent on both axes.
    #[inline]
    pub const fn full() -> Self {
        Self::new(ScaleOffset::full(), ScaleOffset::full())
    }

    /// Absolute pixel width and height inside a parent of the given size.
    #[inline]
    pub fn to_pixels(self, parent_width: f64, parent_height: f64) -> Vec2 {
        Vec2::new(self.width.resolve(parent_width), self.height.resolve(parent_height))
    }
}
