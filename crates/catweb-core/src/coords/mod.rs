//! Layout geometry.
//!
//! Canonical pixel space:
//! - Logical pixels, origin top-left
//! - +X right, +Y down
//!
//! Document-side values are scale+offset pairs ([`ScaleOffset`]): a fraction
//! of the parent's dimension plus a fixed pixel nudge. [`PositionVector`] and
//! [`SizeVector`] combine two of them and project to pixels once the parent
//! size is known.

mod rect;
mod scale_offset;
mod vec2;
mod vector;

pub use rect::Rect;
pub use scale_offset::ScaleOffset;
pub use vec2::Vec2;
pub use vector::{PositionVector, SizeVector};
