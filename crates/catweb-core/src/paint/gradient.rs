use std::cmp::Ordering;

use crate::error::{check_unit, ValueError};

use super::{GradientStop, StopValue};

/// Binds every stop to the gradient's value kind and sorts them by position.
///
/// The sort is stable: stops sharing a position keep their input order.
fn bind_stops<T>(
    gradient: &'static str,
    expected: &'static str,
    stops: Vec<GradientStop>,
    extract: impl Fn(StopValue) -> Option<T>,
) -> Result<Vec<GradientStop<T>>, ValueError> {
    let mut bound = Vec::with_capacity(stops.len());
    for (index, stop) in stops.into_iter().enumerate() {
        let found = stop.value().kind();
        match stop.try_map(&extract) {
            Some(stop) => bound.push(stop),
            None => {
                log::debug!("rejecting {gradient}: stop {index} is {found}, expected {expected}");
                return Err(ValueError::TypeMismatch { gradient, index, expected });
            }
        }
    }

    // Positions are range-checked, never NaN.
    bound.sort_by(|a, b| a.position().partial_cmp(&b.position()).unwrap_or(Ordering::Equal));
    log::trace!("built {gradient} with {} stops", bound.len());
    Ok(bound)
}

// ── TransparencyGradient ──────────────────────────────────────────────────

/// Numeric gradient, linearly interpolated between stops.
///
/// Immutable once built; there is no way to add or reorder stops.
#[derive(Debug, Clone, PartialEq)]
pub struct TransparencyGradient {
    stops: Vec<GradientStop<f64>>,
}

impl TransparencyGradient {
    const NAME: &'static str = "transparency gradient";

    /// Fails with [`ValueError::TypeMismatch`] if any stop holds text. Any
    /// stop count is accepted, including none.
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, ValueError> {
        let stops = bind_stops(Self::NAME, "numeric", stops, |v| v.as_number())?;
        Ok(Self { stops })
    }

    /// Two-stop gradient from `start` at 0 to `end` at 1.
    pub fn linear(start: f64, end: f64) -> Result<Self, ValueError> {
        Self::new(vec![GradientStop::new(0.0, start)?, GradientStop::new(1.0, end)?])
    }

    /// Stops in ascending position order.
    #[inline]
    pub fn stops(&self) -> &[GradientStop<f64>] {
        &self.stops
    }

    /// Interpolated value at `position`.
    ///
    /// Positions at or before the first stop return the first value, at or
    /// after the last stop the last value. Fails with [`ValueError::Range`]
    /// for positions outside `[0, 1]`, with [`ValueError::EmptyGradient`] if
    /// there are no stops and with [`ValueError::ZeroWidthSpan`] if the
    /// bracketing stops share a position.
    pub fn value_at(&self, position: f64) -> Result<f64, ValueError> {
        let position = check_unit("gradient position", position)?;

        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Err(ValueError::EmptyGradient { gradient: Self::NAME });
        };

        if position <= first.position() {
            return Ok(*first.value());
        }
        if position >= last.position() {
            return Ok(*last.value());
        }

        for pair in self.stops.windows(2) {
            let (s0, s1) = (&pair[0], &pair[1]);
            if s0.position() <= position && position <= s1.position() {
                let span = s1.position() - s0.position();
                // Unreachable through sorted stops: a shared position is
                // caught by the clamp above or by an earlier pair.
                if span == 0.0 {
                    return Err(ValueError::ZeroWidthSpan { position });
                }
                let t = (position - s0.position()) / span;
                return Ok(s0.value() + t * (s1.value() - s0.value()));
            }
        }

        // Sorted stops always bracket a position strictly inside their range.
        Ok(*last.value())
    }
}

// ── ColorGradient ─────────────────────────────────────────────────────────

/// Text-valued (color) gradient that steps at each stop instead of blending.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    stops: Vec<GradientStop<String>>,
}

impl ColorGradient {
    const NAME: &'static str = "color gradient";

    /// Fails with [`ValueError::TypeMismatch`] if any stop holds a number.
    /// Any stop count is accepted, including none.
    pub fn new(stops: Vec<GradientStop>) -> Result<Self, ValueError> {
        let stops = bind_stops(Self::NAME, "text", stops, |v| match v {
            StopValue::Text(s) => Some(s),
            StopValue::Number(_) => None,
        })?;
        Ok(Self { stops })
    }

    /// Single-stop gradient: the same value everywhere.
    pub fn solid(value: impl Into<StopValue>) -> Result<Self, ValueError> {
        Self::new(vec![GradientStop::new(0.0, value)?])
    }

    /// Stops in ascending position order.
    #[inline]
    pub fn stops(&self) -> &[GradientStop<String>] {
        &self.stops
    }

    /// Value of the last stop at or before `position`.
    ///
    /// Below every stop the lowest stop's value is returned. Among stops
    /// sharing a position the one given last wins. Fails with
    /// [`ValueError::Range`] for positions outside `[0, 1]` and with
    /// [`ValueError::EmptyGradient`] if there are no stops.
    pub fn value_at(&self, position: f64) -> Result<&str, ValueError> {
        let position = check_unit("gradient position", position)?;
        let stop = self
            .stops
            .iter()
            .rev()
            .find(|s| s.position() <= position)
            .or_else(|| self.stops.first())
            .ok_or(ValueError::EmptyGradient { gradient: Self::NAME })?;
        Ok(stop.value().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(stops: &[(f64, f64)]) -> TransparencyGradient {
        TransparencyGradient::new(
            stops.iter().map(|&(p, v)| GradientStop::new(p, v).unwrap()).collect(),
        )
        .unwrap()
    }

    fn col(stops: &[(f64, &str)]) -> ColorGradient {
        ColorGradient::new(stops.iter().map(|&(p, v)| GradientStop::new(p, v).unwrap()).collect())
            .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn stops_sorted_by_position() {
        let g = num(&[(1.0, 1.0), (0.0, 0.0), (0.5, 0.3)]);
        let positions: Vec<f64> = g.stops().iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn equal_positions_keep_input_order() {
        let g = num(&[(0.5, 0.8), (0.0, 0.0), (0.5, 0.2)]);
        let values: Vec<f64> = g.stops().iter().map(|s| *s.value()).collect();
        assert_eq!(values, vec![0.0, 0.8, 0.2]);
    }

    #[test]
    fn mixed_kinds_rejected_by_both() {
        let mixed = || vec![GradientStop::new(0.0, 0.5).unwrap(), GradientStop::new(1.0, "#FFF").unwrap()];
        assert_eq!(
            TransparencyGradient::new(mixed()),
            Err(ValueError::TypeMismatch { gradient: "transparency gradient", index: 1, expected: "numeric" })
        );
        assert_eq!(
            ColorGradient::new(mixed()),
            Err(ValueError::TypeMismatch { gradient: "color gradient", index: 0, expected: "text" })
        );
    }

    #[test]
    fn empty_stop_list_builds_but_fails_on_query() {
        let g = TransparencyGradient::new(vec![]).unwrap();
        assert!(g.stops().is_empty());
        assert_eq!(
            g.value_at(0.5),
            Err(ValueError::EmptyGradient { gradient: "transparency gradient" })
        );

        let g = ColorGradient::new(vec![]).unwrap();
        assert!(g.stops().is_empty());
        assert_eq!(g.value_at(0.0), Err(ValueError::EmptyGradient { gradient: "color gradient" }));
    }

    #[test]
    fn empty_gradient_still_range_checks_first() {
        let g = TransparencyGradient::new(vec![]).unwrap();
        assert!(matches!(g.value_at(2.0), Err(ValueError::Range { .. })));
    }

    // ── TransparencyGradient::value_at ────────────────────────────────────

    #[test]
    fn interpolates_between_two_stops() {
        let g = num(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(g.value_at(0.25), Ok(0.25));
        assert_eq!(g.value_at(0.0), Ok(0.0));
        assert_eq!(g.value_at(1.0), Ok(1.0));
    }

    #[test]
    fn query_outside_unit_range_fails() {
        let g = num(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(g.value_at(-0.1), Err(ValueError::Range { .. })));
        assert!(matches!(g.value_at(1.1), Err(ValueError::Range { .. })));
        assert!(g.value_at(f64::NAN).is_err());
    }

    #[test]
    fn clamps_outside_stop_range() {
        let g = num(&[(0.2, 0.4), (0.8, 0.9)]);
        assert_eq!(g.value_at(0.0), Ok(0.4));
        assert_eq!(g.value_at(0.2), Ok(0.4));
        assert_eq!(g.value_at(0.95), Ok(0.9));
    }

    #[test]
    fn picks_the_bracketing_pair() {
        let g = num(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        assert_eq!(g.value_at(0.5), Ok(1.0));
        assert!(close(g.value_at(0.75).unwrap(), 0.5));
        assert!(close(g.value_at(0.25).unwrap(), 0.5));
    }

    #[test]
    fn single_stop_is_constant() {
        let g = num(&[(0.3, 0.7)]);
        for p in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(g.value_at(p), Ok(0.7));
        }
    }

    #[test]
    fn duplicate_positions_step_without_dividing_by_zero() {
        let g = num(&[(0.0, 0.0), (0.5, 0.2), (0.5, 0.8), (1.0, 1.0)]);
        assert_eq!(g.value_at(0.5), Ok(0.2));
        assert!(close(g.value_at(0.6).unwrap(), 0.84));
        assert!(close(g.value_at(0.4).unwrap(), 0.16));
    }

    #[test]
    fn linear_shorthand() {
        let g = TransparencyGradient::linear(1.0, 0.0).unwrap();
        assert_eq!(g.value_at(0.25), Ok(0.75));
    }

    // ── ColorGradient::value_at ───────────────────────────────────────────

    #[test]
    fn steps_at_each_stop() {
        let g = col(&[(0.0, "#000000"), (0.5, "#FFFFFF")]);
        assert_eq!(g.value_at(0.25), Ok("#000000"));
        assert_eq!(g.value_at(0.6), Ok("#FFFFFF"));
        assert_eq!(g.value_at(0.0), Ok("#000000"));
        assert_eq!(g.value_at(0.5), Ok("#FFFFFF"));
    }

    #[test]
    fn below_first_stop_falls_back_to_lowest() {
        let g = col(&[(0.7, "#222"), (0.4, "#111")]);
        assert_eq!(g.value_at(0.1), Ok("#111"));
        assert_eq!(g.value_at(1.0), Ok("#222"));
    }

    #[test]
    fn later_stop_wins_on_shared_position() {
        let g = col(&[(0.5, "#AAA"), (0.5, "#BBB")]);
        assert_eq!(g.value_at(0.5), Ok("#BBB"));
        assert_eq!(g.value_at(0.1), Ok("#AAA"));
    }

    #[test]
    fn color_query_outside_unit_range_fails() {
        let g = ColorGradient::solid("#FFF").unwrap();
        assert!(g.value_at(1.5).is_err());
        assert_eq!(g.value_at(0.9), Ok("#FFF"));
    }
}
