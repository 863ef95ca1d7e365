use catweb_core::coords::{PositionVector, Rect, SizeVector, Vec2};
use catweb_core::{HexColor, Rotation, UnitFraction};

use crate::domains::{FontStyle, FontWeight, HorizontalAlignment, TextSize, Truncate, VerticalAlignment};

// ── GuiBase ───────────────────────────────────────────────────────────────

/// Placement and background shared by every visual element.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiBase {
    pub background_transparency: UnitFraction,
    pub background_color: HexColor,
    pub position: PositionVector,
    pub size: SizeVector,
    pub rotation: Rotation,
    /// Point of the element, as a fraction of its own size, that `position`
    /// refers to. `(0, 0)` is the top-left corner, `(0.5, 0.5)` the center.
    pub anchor_point: Vec2,
    /// Render order; higher layers draw on top.
    pub layer: i32,
    pub tooltip: String,
    pub clip_descendants: bool,
    pub visible: bool,
}

impl GuiBase {
    /// Unrotated pixel rectangle of the element inside a parent of the given size.
    ///
    /// The projected position is shifted back by `anchor_point * size`, so an
    /// anchor of `(0.5, 0.5)` centers the element on its position.
    pub fn pixel_rect(&self, parent_width: f64, parent_height: f64) -> Rect {
        let size = self.size.to_pixels(parent_width, parent_height);
        let position = self.position.to_pixels(parent_width, parent_height);
        Rect::from_origin_size(position - self.anchor_point.scale_by(size), size)
    }

    /// Opacity of the background, `1 - background_transparency`.
    #[inline]
    pub fn background_opacity(&self) -> f64 {
        1.0 - self.background_transparency.get()
    }
}

// ── TextStyle ─────────────────────────────────────────────────────────────

/// Font and text settings shared by every element that shows text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub text_size: TextSize,
    pub text_color: HexColor,
    pub text_transparency: UnitFraction,
    /// Enables rich-text markup.
    pub rich: bool,
    pub wrap: bool,
    pub truncate: Truncate,
}
