use crate::error::{check_unit, ValueError};
use crate::scalar::{HexColor, UnitFraction};

/// Value carried by a gradient stop before it is bound to a gradient.
///
/// A gradient accepts a single kind: [`TransparencyGradient`] takes only
/// numbers, [`ColorGradient`] only text.
///
/// [`TransparencyGradient`]: super::TransparencyGradient
/// [`ColorGradient`]: super::ColorGradient
#[derive(Debug, Clone, PartialEq)]
pub enum StopValue {
    Number(f64),
    Text(String),
}

impl StopValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StopValue::Number(_) => "numeric",
            StopValue::Text(_) => "text",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StopValue::Number(n) => Some(*n),
            StopValue::Text(_) => None,
        }
    }
}

impl From<f64> for StopValue {
    fn from(n: f64) -> Self {
        StopValue::Number(n)
    }
}

impl From<UnitFraction> for StopValue {
    fn from(f: UnitFraction) -> Self {
        StopValue::Number(f.get())
    }
}

impl From<&str> for StopValue {
    fn from(s: &str) -> Self {
        StopValue::Text(s.to_owned())
    }
}

impl From<String> for StopValue {
    fn from(s: String) -> Self {
        StopValue::Text(s)
    }
}

impl From<HexColor> for StopValue {
    fn from(c: HexColor) -> Self {
        StopValue::Text(c.into())
    }
}

/// A `(position, value)` pair anchoring a gradient at a point of `[0, 1]`.
///
/// Gradients take `GradientStop<StopValue>` as input and keep their stops as
/// `GradientStop<f64>` or `GradientStop<String>` once the kind is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop<V = StopValue> {
    position: f64,
    value: V,
}

impl GradientStop {
    /// Fails with [`ValueError::Range`] unless `0 <= position <= 1`.
    pub fn new(position: f64, value: impl Into<StopValue>) -> Result<Self, ValueError> {
        let position = check_unit("stop position", position)?;
        Ok(Self { position, value: value.into() })
    }
}

impl<V> GradientStop<V> {
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Rebinds the value; `None` from `f` rejects the stop.
    pub(crate) fn try_map<U>(self, f: impl FnOnce(V) -> Option<U>) -> Option<GradientStop<U>> {
        let position = self.position;
        f(self.value).map(|value| GradientStop { position, value })
    }
}
