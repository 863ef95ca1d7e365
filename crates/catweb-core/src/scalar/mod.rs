//! Validated scalar wrappers.
//!
//! Both types check their invariant once, in the constructor, and are
//! immutable afterwards. A value of either type is always valid.

mod hex_color;
mod unit_fraction;

pub use hex_color::HexColor;
pub use unit_fraction::UnitFraction;
