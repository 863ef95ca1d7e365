//! Gradient model.
//!
//! Scope:
//! - gradient stops and their value kinds
//! - transparency gradients (interpolated)
//! - color gradients (stepped; blending colors is left to the renderer)

pub mod gradient;
pub mod stop;

pub use gradient::{ColorGradient, TransparencyGradient};
pub use stop::{GradientStop, StopValue};
