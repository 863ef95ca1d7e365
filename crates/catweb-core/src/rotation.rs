//! Rotation in degrees.

/// A signed angle in degrees with no range restriction.
///
/// The stored value is whatever was last set or accumulated; the normalized
/// forms are computed on demand and never written back. Mutation takes
/// `&mut self`, so a rotation shared across threads has to be wrapped by the
/// owner (a `Mutex` or similar).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rotation {
    degrees: f64,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    /// The raw, unnormalized angle.
    #[inline]
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn set(&mut self, degrees: f64) {
        self.degrees = degrees;
    }

    #[inline]
    pub fn add(&mut self, delta: f64) {
        self.degrees += delta;
    }

    /// Angle wrapped into `[0, 360)`.
    #[inline]
    pub fn normalized_360(self) -> f64 {
        let d = self.degrees.rem_euclid(360.0);
        // Tiny negative inputs round up to exactly 360.0.
        if d >= 360.0 { 0.0 } else { d }
    }

    /// Angle wrapped into `(-180, 180]`. Exactly 180 stays 180.
    #[inline]
    pub fn normalized_180(self) -> f64 {
        let d = self.normalized_360();
        if d > 180.0 { d - 360.0 } else { d }
    }

    /// The raw angle in radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.degrees.to_radians()
    }
}

impl From<f64> for Rotation {
    #[inline]
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}
