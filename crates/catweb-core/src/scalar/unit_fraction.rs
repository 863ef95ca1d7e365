use crate::error::{check_unit, ValueError};

/// A float constrained to `[0, 1]`.
///
/// Used for transparencies and any other proportion stored by the catalog.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct UnitFraction(f64);

impl UnitFraction {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Fails with [`ValueError::Range`] unless `0 <= value <= 1`.
    #[inline]
    pub fn new(value: f64) -> Result<Self, ValueError> {
        check_unit("unit fraction", value).map(Self)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitFraction {
    type Error = ValueError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitFraction> for f64 {
    #[inline]
    fn from(fraction: UnitFraction) -> f64 {
        fraction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_closed_interval() {
        for v in [0.0, 0.001, 0.25, 0.5, 0.999, 1.0] {
            let f = UnitFraction::new(v).unwrap();
            assert_eq!(f64::from(f), v);
            assert_eq!(f.get(), v);
        }
    }

    #[test]
    fn rejects_outside_interval() {
        for v in [-0.0001, -1.0, 1.0001, 42.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(UnitFraction::new(v), Err(ValueError::Range { .. })), "{v}");
        }
    }

    #[test]
    fn negative_zero_is_in_range() {
        assert!(UnitFraction::new(-0.0).is_ok());
    }

    #[test]
    fn try_from_matches_new() {
        assert_eq!(UnitFraction::try_from(0.75), UnitFraction::new(0.75));
        assert!(UnitFraction::try_from(2.0).is_err());
    }
}
