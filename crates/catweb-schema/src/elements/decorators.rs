//! Styling and layout modifiers attached to a parent element.

use catweb_core::coords::{SizeVector, Vec2};
use catweb_core::paint::{ColorGradient, TransparencyGradient};
use catweb_core::{HexColor, Rotation, UnitFraction, ValueError};

use crate::domains::{HorizontalAlignment, ListDirection, MaxSize, OutlineMode, OutlineType, VerticalAlignment};

/// Outline drawn around the parent or its text.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub name: String,
    pub mode: OutlineMode,
    /// Join geometry (`type` in documents).
    pub kind: OutlineType,
    pub outline_color: HexColor,
    pub outline_thickness: u32,
    pub outline_transparency: UnitFraction,
}

/// Rounded corners on the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub name: String,
    pub radius: Vec2,
}

/// Lays siblings out in a row or column.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub name: String,
    pub direction: ListDirection,
    /// Gap between consecutive items.
    pub padding: Vec2,
    pub vertical_alignment: VerticalAlignment,
    pub horizontal_alignment: HorizontalAlignment,
    pub wrap: bool,
}

/// Lays siblings out in uniform cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub name: String,
    /// Gap between cells.
    pub padding: Vec2,
    pub cell_size: SizeVector,
    pub vertical_alignment: VerticalAlignment,
    pub horizontal_alignment: HorizontalAlignment,
}

/// Locks the parent to a width-to-height ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatio {
    pub name: String,
    pub ratio: u32,
}

/// Minimum and maximum pixel size of the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub minimum_size: Vec2,
    pub maximum_size: MaxSize,
}

impl Constraint {
    /// Clamps `size` into `[minimum_size, maximum_size]`, per axis.
    ///
    /// The minimum wins when the bounds cross.
    #[must_use]
    pub fn constrain(&self, size: Vec2) -> Vec2 {
        let max = self.maximum_size.limit();
        Vec2::new(
            size.x.min(max.x).max(self.minimum_size.x),
            size.y.min(max.y).max(self.minimum_size.y),
        )
    }
}

/// Color and transparency gradient painted over the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDecorator {
    pub name: String,
    pub rotation: Rotation,
    pub offset: Vec2,
    pub transparency: TransparencyGradient,
    pub color: ColorGradient,
}

impl GradientDecorator {
    /// Color (stepped) and transparency (interpolated) at `position`.
    ///
    /// Fails with [`ValueError::Range`] outside `[0, 1]` and with
    /// [`ValueError::EmptyGradient`] if either gradient has no stops.
    pub fn sample_at(&self, position: f64) -> Result<(&str, f64), ValueError> {
        let color = self.color.value_at(position)?;
        let transparency = self.transparency.value_at(position)?;
        Ok((color, transparency))
    }
}

/// Inner spacing on each side of the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Padding {
    pub name: String,
    pub top: Vec2,
    pub right: Vec2,
    pub bottom: Vec2,
    pub left: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use catweb_core::paint::GradientStop;

    fn constraint(min: (f64, f64), max: MaxSize) -> Constraint {
        Constraint { name: "limits".into(), minimum_size: min.into(), maximum_size: max }
    }

    // ── Constraint::constrain ─────────────────────────────────────────────

    #[test]
    fn constrain_clamps_below_min() {
        let c = constraint((10.0, 10.0), MaxSize::Bounded(Vec2::new(100.0, 100.0)));
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = constraint((0.0, 0.0), MaxSize::Bounded(Vec2::new(50.0, 50.0)));
        assert_eq!(c.constrain(Vec2::new(200.0, 20.0)), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn constrain_infinite_max_only_floors() {
        let c = constraint((16.0, 16.0), MaxSize::Infinite);
        assert_eq!(c.constrain(Vec2::new(1e6, 4.0)), Vec2::new(1e6, 16.0));
    }

    #[test]
    fn constrain_min_wins_when_bounds_cross() {
        let c = constraint((80.0, 80.0), MaxSize::Bounded(Vec2::new(40.0, 40.0)));
        assert_eq!(c.constrain(Vec2::new(60.0, 60.0)), Vec2::new(80.0, 80.0));
    }

    // ── GradientDecorator::sample_at ──────────────────────────────────────

    fn fade() -> GradientDecorator {
        GradientDecorator {
            name: "fade".into(),
            rotation: Rotation::new(90.0),
            offset: Vec2::zero(),
            transparency: TransparencyGradient::linear(0.0, 1.0).unwrap(),
            color: ColorGradient::new(vec![
                GradientStop::new(0.0, "#000000").unwrap(),
                GradientStop::new(0.5, "#FFFFFF").unwrap(),
            ])
            .unwrap(),
        }
    }

    #[test]
    fn sample_steps_color_and_blends_transparency() {
        let g = fade();
        assert_eq!(g.sample_at(0.25), Ok(("#000000", 0.25)));
        assert_eq!(g.sample_at(0.75), Ok(("#FFFFFF", 0.75)));
    }

    #[test]
    fn sample_rejects_out_of_range() {
        assert!(matches!(fade().sample_at(1.5), Err(ValueError::Range { .. })));
    }
}
