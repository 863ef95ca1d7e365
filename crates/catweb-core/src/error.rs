use thiserror::Error;

/// Failure raised by a validating constructor or a gradient query.
///
/// Every variant is terminal: nothing in this crate retries or repairs a
/// rejected value, the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// A fraction, scale, stop position or query position fell outside `[0, 1]`.
    #[error("{what} must be between 0 and 1, got {value}")]
    Range { what: &'static str, value: f64 },

    /// A hex color code without the `#` marker or with a length other than 4 or 7.
    #[error("invalid hex color {code:?}: expected '#' followed by 3 or 6 characters")]
    Format { code: String },

    /// A gradient stop holds a value of the wrong kind for its gradient.
    #[error("{gradient} stop {index} must hold a {expected} value")]
    TypeMismatch {
        gradient: &'static str,
        index: usize,
        expected: &'static str,
    },

    /// A gradient with no stops was queried.
    #[error("{gradient} has no stops to sample")]
    EmptyGradient { gradient: &'static str },

    /// Interpolation landed between two stops sharing the same position.
    #[error("cannot interpolate at {position}: bracketing stops share the same position")]
    ZeroWidthSpan { position: f64 },
}

/// Checks that `value` lies in `[0, 1]`, naming the offending quantity on failure.
///
/// NaN is rejected.
#[inline]
pub(crate) fn check_unit(what: &'static str, value: f64) -> Result<f64, ValueError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValueError::Range { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_unit_accepts_bounds() {
        assert_eq!(check_unit("scale", 0.0), Ok(0.0));
        assert_eq!(check_unit("scale", 1.0), Ok(1.0));
    }

    #[test]
    fn check_unit_rejects_nan() {
        assert!(matches!(
            check_unit("scale", f64::NAN),
            Err(ValueError::Range { what: "scale", .. })
        ));
    }

    #[test]
    fn messages_name_the_quantity() {
        let err = check_unit("stop position", 1.5).unwrap_err();
        assert_eq!(err.to_string(), "stop position must be between 0 and 1, got 1.5");
    }
}
