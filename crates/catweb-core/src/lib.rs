//! CatWeb layout values.
//!
//! The validated building blocks a CatWeb page document is typed with:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scalar`] | `UnitFraction`, `HexColor` |
//! | [`coords`] | `ScaleOffset`, `PositionVector`, `SizeVector`, `Vec2`, `Rect` |
//! | [`rotation`] | `Rotation` |
//! | [`paint`] | `GradientStop`, `TransparencyGradient`, `ColorGradient` |
//! | [`error`] | `ValueError` |
//!
//! Every type is built through a validating constructor, so a value that
//! exists is a valid one.
//!
//! ```rust
//! use catweb_core::coords::{PositionVector, ScaleOffset};
//!
//! let pos = PositionVector::new(ScaleOffset::new(0.5, 10.0)?, ScaleOffset::new(0.5, 10.0)?);
//! let px = pos.to_pixels(200.0, 100.0);
//! assert_eq!((px.x, px.y), (110.0, 60.0));
//! # Ok::<(), catweb_core::ValueError>(())
//! ```

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod rotation;
pub mod scalar;

pub use error::ValueError;
pub use rotation::Rotation;
pub use scalar::{HexColor, UnitFraction};
