//! Visual elements: containers, text-bearing widgets, images and scripts.

use catweb_core::{HexColor, UnitFraction};

use super::{GuiBase, TextStyle};
use crate::domains::{CanvasSize, ProductType, ResampleMode, ScaleType};

/// Plain container used to group and position children.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub base: GuiBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub name: String,
    pub text: String,
    pub style: TextStyle,
    pub base: GuiBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub name: String,
    /// Decal id of the displayed image.
    pub image_id: u64,
    pub image_transparency: UnitFraction,
    pub scale_type: ScaleType,
    pub tint: HexColor,
    pub resample_mode: ResampleMode,
    pub base: GuiBase,
}

/// Clickable hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub name: String,
    /// URL or in-site page reference.
    pub reference: String,
    pub open_in_new_tab: bool,
    pub text: String,
    pub style: TextStyle,
    /// Let the host pick a theme-appropriate text color.
    pub automatic_color: bool,
    pub base: GuiBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub name: String,
    pub text: String,
    pub style: TextStyle,
    pub automatic_color: bool,
    pub base: GuiBase,
}

/// Button that opens a purchase prompt for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub name: String,
    pub item_id: u64,
    pub reference: String,
    pub product_type: ProductType,
    pub text: String,
    pub style: TextStyle,
    pub automatic_color: bool,
    pub base: GuiBase,
}

/// Text field accepting user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: String,
    pub placeholder: String,
    pub text: String,
    pub style: TextStyle,
    pub placeholder_color: HexColor,
    pub automatic_color: bool,
    pub editable: bool,
    pub multi_line: bool,
    pub base: GuiBase,
}

/// Container whose content scrolls inside a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollableFrame {
    pub name: String,
    pub scrollbar_color: HexColor,
    pub scrollbar_transparency: UnitFraction,
    /// Scrollbar thickness in pixels.
    pub scrollbar_thickness: u32,
    pub canvas_size: CanvasSize,
    pub base: GuiBase,
}

/// Script attached to the page. The content is opaque to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub name: String,
    pub enabled: bool,
    pub content: String,
}
