use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}
