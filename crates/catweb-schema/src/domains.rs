//! Closed token domains used by element records.
//!
//! Each domain parses from and prints to the exact lowercase token the
//! document format uses (`"semibold"`, `"auto_x"`, `"inf"`, ...).

use std::fmt;
use std::str::FromStr;

use catweb_core::coords::{SizeVector, Vec2};

use crate::error::{unknown, DomainError};

macro_rules! token_domain {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err(unknown($label, s)),
                }
            }
        }
    };
}

token_domain! {
    FontStyle, "font style" {
        Normal => "normal",
        Italic => "italic",
    }
}

token_domain! {
    /// Nine weight steps, thinnest first.
    FontWeight, "font weight" {
        Thin => "thin",
        ExtraLight => "extralight",
        Light => "light",
        Regular => "regular",
        Medium => "medium",
        SemiBold => "semibold",
        Bold => "bold",
        ExtraBold => "extrabold",
        Heavy => "heavy",
    }
}

impl FontWeight {
    /// CSS-style numeric weight, 100 (thin) through 900 (heavy).
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Heavy => 900,
        }
    }
}

token_domain! {
    HorizontalAlignment, "horizontal alignment" {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

token_domain! {
    VerticalAlignment, "vertical alignment" {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

token_domain! {
    /// What happens to text that does not fit its box.
    Truncate, "truncation mode" {
        None => "none",
        AtEnd => "atend",
        SplitWord => "splitword",
    }
}

token_domain! {
    ScaleType, "image scale mode" {
        Stretch => "stretch",
        Tile => "tile",
        Slice => "slice",
        Fit => "fit",
        Crop => "crop",
    }
}

token_domain! {
    ResampleMode, "image resample mode" {
        Default => "default",
        Pixelated => "pixelated",
    }
}

token_domain! {
    ProductType, "product type" {
        Asset => "asset",
        Gamepass => "gamepass",
        Product => "product",
    }
}

token_domain! {
    OutlineMode, "outline mode" {
        Border => "border",
        /// Only honored when rich text is disabled.
        Contextual => "contextual",
    }
}

token_domain! {
    /// Join geometry of a text outline.
    OutlineType, "outline type" {
        Miter => "miter",
        Bevel => "bevel",
        Round => "round",
    }
}

token_domain! {
    ListDirection, "list direction" {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

// ── TextSize ──────────────────────────────────────────────────────────────

/// Font size: a pixel value, or `"scaled"` to fit the element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextSize {
    Pixels(f64),
    Scaled,
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSize::Pixels(px) => write!(f, "{px}"),
            TextSize::Scaled => f.write_str("scaled"),
        }
    }
}

impl FromStr for TextSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "scaled" {
            return Ok(TextSize::Scaled);
        }
        match s.parse::<f64>() {
            Ok(px) if px.is_finite() => Ok(TextSize::Pixels(px)),
            _ => Err(unknown("text size", s)),
        }
    }
}

impl From<f64> for TextSize {
    fn from(px: f64) -> Self {
        TextSize::Pixels(px)
    }
}

// ── CanvasSize ────────────────────────────────────────────────────────────

/// Scrollable canvas extent: explicit, or grown to fit content on one or
/// both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasSize {
    Explicit(SizeVector),
    Auto,
    AutoX,
    AutoY,
}

impl CanvasSize {
    /// Pixel size of an explicit canvas; `None` when it follows its content.
    pub fn to_pixels(self, parent_width: f64, parent_height: f64) -> Option<Vec2> {
        match self {
            CanvasSize::Explicit(size) => Some(size.to_pixels(parent_width, parent_height)),
            CanvasSize::Auto | CanvasSize::AutoX | CanvasSize::AutoY => None,
        }
    }
}

impl From<SizeVector> for CanvasSize {
    fn from(size: SizeVector) -> Self {
        CanvasSize::Explicit(size)
    }
}

/// Parses the automatic tokens only; explicit sizes come from [`SizeVector`].
impl FromStr for CanvasSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(CanvasSize::Auto),
            "auto_x" => Ok(CanvasSize::AutoX),
            "auto_y" => Ok(CanvasSize::AutoY),
            _ => Err(unknown("canvas size", s)),
        }
    }
}

// ── MaxSize ───────────────────────────────────────────────────────────────

/// Upper size bound: a pixel pair, or `"inf"` for none.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MaxSize {
    Bounded(Vec2),
    Infinite,
}

impl MaxSize {
    /// The bound as a pixel pair, infinite on both axes for [`MaxSize::Infinite`].
    pub fn limit(self) -> Vec2 {
        match self {
            MaxSize::Bounded(v) => v,
            MaxSize::Infinite => Vec2::new(f64::INFINITY, f64::INFINITY),
        }
    }
}

impl From<Vec2> for MaxSize {
    fn from(v: Vec2) -> Self {
        MaxSize::Bounded(v)
    }
}

/// Parses the `"inf"` token only; bounded sizes come from a [`Vec2`].
impl FromStr for MaxSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inf" => Ok(MaxSize::Infinite),
            _ => Err(unknown("maximum size", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catweb_core::coords::ScaleOffset;

    // ── token domains ─────────────────────────────────────────────────────

    fn round_trips<T>(all: &[T])
    where
        T: Copy + PartialEq + fmt::Debug + fmt::Display + FromStr<Err = DomainError>,
    {
        for &v in all {
            assert_eq!(v.to_string().parse::<T>(), Ok(v));
        }
    }

    #[test]
    fn every_token_round_trips() {
        round_trips(FontStyle::ALL);
        round_trips(FontWeight::ALL);
        round_trips(HorizontalAlignment::ALL);
        round_trips(VerticalAlignment::ALL);
        round_trips(Truncate::ALL);
        round_trips(ScaleType::ALL);
        round_trips(ResampleMode::ALL);
        round_trips(ProductType::ALL);
        round_trips(OutlineMode::ALL);
        round_trips(OutlineType::ALL);
        round_trips(ListDirection::ALL);
    }

    #[test]
    fn domain_sizes() {
        assert_eq!(FontStyle::ALL.len(), 2);
        assert_eq!(FontWeight::ALL.len(), 9);
        assert_eq!(ScaleType::ALL.len(), 5);
        assert_eq!(Truncate::ALL.len(), 3);
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(
            "Bold".parse::<FontWeight>(),
            Err(DomainError::UnknownToken { domain: "font weight", token: "Bold".into() })
        );
        assert!("CENTER".parse::<HorizontalAlignment>().is_err());
    }

    #[test]
    fn font_weight_numeric_is_monotonic() {
        let weights: Vec<u16> = FontWeight::ALL.iter().map(|w| w.numeric()).collect();
        assert!(weights.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(FontWeight::Regular.numeric(), 400);
    }

    // ── TextSize ──────────────────────────────────────────────────────────

    #[test]
    fn text_size_parses_number_or_scaled() {
        assert_eq!("scaled".parse::<TextSize>(), Ok(TextSize::Scaled));
        assert_eq!("14".parse::<TextSize>(), Ok(TextSize::Pixels(14.0)));
        assert_eq!("12.5".parse::<TextSize>(), Ok(TextSize::Pixels(12.5)));
        assert!("big".parse::<TextSize>().is_err());
        assert!("inf".parse::<TextSize>().is_err());
    }

    #[test]
    fn text_size_display() {
        assert_eq!(TextSize::Scaled.to_string(), "scaled");
        assert_eq!(TextSize::Pixels(18.0).to_string(), "18");
    }

    // ── CanvasSize / MaxSize ──────────────────────────────────────────────

    #[test]
    fn canvas_size_tokens() {
        assert_eq!("auto".parse::<CanvasSize>(), Ok(CanvasSize::Auto));
        assert_eq!("auto_x".parse::<CanvasSize>(), Ok(CanvasSize::AutoX));
        assert_eq!("auto_y".parse::<CanvasSize>(), Ok(CanvasSize::AutoY));
        assert!("autox".parse::<CanvasSize>().is_err());
    }

    #[test]
    fn explicit_canvas_projects_to_pixels() {
        let size = SizeVector::new(ScaleOffset::full(), ScaleOffset::new(0.5, 100.0).unwrap());
        let canvas = CanvasSize::from(size);
        assert_eq!(canvas.to_pixels(300.0, 400.0), Some(Vec2::new(300.0, 300.0)));
        assert_eq!(CanvasSize::AutoY.to_pixels(300.0, 400.0), None);
    }

    #[test]
    fn max_size_limit() {
        assert_eq!("inf".parse::<MaxSize>(), Ok(MaxSize::Infinite));
        assert!(MaxSize::Infinite.limit().x.is_infinite());
        assert_eq!(MaxSize::from(Vec2::new(10.0, 20.0)).limit(), Vec2::new(10.0, 20.0));
        assert!("infinity".parse::<MaxSize>().is_err());
    }
}
