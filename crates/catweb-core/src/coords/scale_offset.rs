use crate::error::{check_unit, ValueError};

/// One axis of an anchor-relative coordinate: a fraction of the parent's
/// dimension plus a fixed pixel offset.
///
/// `scale` is validated to `[0, 1]`; `offset` is any pixel delta, negative
/// included.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScaleOffset {
    scale: f64,
    offset: f64,
}

impl ScaleOffset {
    /// Fails with [`ValueError::Range`] unless `0 <= scale <= 1`.
    #[inline]
    pub fn new(scale: f64, offset: f64) -> Result<Self, ValueError> {
        let scale = check_unit("scale", scale)?;
        Ok(Self { scale, offset })
    }

    /// Pure pixel offset, no proportional part.
    #[inline]
    pub const fn px(offset: f64) -> Self {
        Self { scale: 0.0, offset }
    }

    /// Whole parent dimension with no offset.
    #[inline]
    pub const fn full() -> Self {
        Self { scale: 1.0, offset: 0.0 }
    }

    #[inline]
    pub const fn scale(self) -> f64 {
        self.scale
    }

    #[inline]
    pub const fn offset(self) -> f64 {
        self.offset
    }

    /// `scale * parent_dim + offset`.
    #[inline]
    pub fn resolve(self, parent_dim: f64) -> f64 {
        self.scale * parent_dim + self.offset
    }
}
