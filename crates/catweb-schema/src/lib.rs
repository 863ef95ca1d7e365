//! CatWeb element catalog.
//!
//! Records describing the widgets and decorators of a CatWeb page, typed
//! with the validated values of [`catweb_core`], plus the closed token
//! domains (font weight, alignment, scale mode, ...) those records use.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domains`] | `FontWeight`, `TextSize`, `CanvasSize`, `MaxSize`, ... |
//! | [`elements`] | `Page`, `Frame`, `Text`, ..., `Element` |
//! | [`error`] | `DomainError` |
//!
//! Encoding records to or from any file format is not handled here.

pub mod domains;
pub mod elements;
pub mod error;

pub use elements::{Element, GuiBase, Page, TextStyle};
pub use error::DomainError;
