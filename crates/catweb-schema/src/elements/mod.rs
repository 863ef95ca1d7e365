//! Element records of a CatWeb page.
//!
//! Records are plain structs: every field is mandatory and typed with a
//! validated `catweb-core` value, so a record that exists is complete and
//! valid. Field groups repeated across widgets live in [`GuiBase`] and
//! [`TextStyle`].

mod common;
mod decorators;
mod page;
mod widgets;

pub use common::{GuiBase, TextStyle};
pub use decorators::{AspectRatio, Constraint, Corner, GradientDecorator, Grid, List, Outline, Padding};
pub use page::Page;
pub use widgets::{Button, Donation, Frame, Image, Input, Link, ScrollableFrame, Script, Text};

/// Any record that can sit in a page's element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Frame(Frame),
    Text(Text),
    Image(Image),
    Link(Link),
    Button(Button),
    Donation(Donation),
    Input(Input),
    ScrollableFrame(ScrollableFrame),
    Script(Script),
    Outline(Outline),
    Corner(Corner),
    List(List),
    Grid(Grid),
    AspectRatio(AspectRatio),
    Constraint(Constraint),
    Gradient(GradientDecorator),
    Padding(Padding),
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Frame(e) => &e.name,
            Element::Text(e) => &e.name,
            Element::Image(e) => &e.name,
            Element::Link(e) => &e.name,
            Element::Button(e) => &e.name,
            Element::Donation(e) => &e.name,
            Element::Input(e) => &e.name,
            Element::ScrollableFrame(e) => &e.name,
            Element::Script(e) => &e.name,
            Element::Outline(e) => &e.name,
            Element::Corner(e) => &e.name,
            Element::List(e) => &e.name,
            Element::Grid(e) => &e.name,
            Element::AspectRatio(e) => &e.name,
            Element::Constraint(e) => &e.name,
            Element::Gradient(e) => &e.name,
            Element::Padding(e) => &e.name,
        }
    }

    /// Lowercase record kind, e.g. `"scrollableframe"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Frame(_) => "frame",
            Element::Text(_) => "text",
            Element::Image(_) => "image",
            Element::Link(_) => "link",
            Element::Button(_) => "button",
            Element::Donation(_) => "donation",
            Element::Input(_) => "input",
            Element::ScrollableFrame(_) => "scrollableframe",
            Element::Script(_) => "script",
            Element::Outline(_) => "outline",
            Element::Corner(_) => "corner",
            Element::List(_) => "list",
            Element::Grid(_) => "grid",
            Element::AspectRatio(_) => "aspectratio",
            Element::Constraint(_) => "constraint",
            Element::Gradient(_) => "gradient",
            Element::Padding(_) => "padding",
        }
    }

    /// Shared placement fields; `None` for scripts and decorators.
    pub fn base(&self) -> Option<&GuiBase> {
        match self {
            Element::Frame(e) => Some(&e.base),
            Element::Text(e) => Some(&e.base),
            Element::Image(e) => Some(&e.base),
            Element::Link(e) => Some(&e.base),
            Element::Button(e) => Some(&e.base),
            Element::Donation(e) => Some(&e.base),
            Element::Input(e) => Some(&e.base),
            Element::ScrollableFrame(e) => Some(&e.base),
            Element::Script(_)
            | Element::Outline(_)
            | Element::Corner(_)
            | Element::List(_)
            | Element::Grid(_)
            | Element::AspectRatio(_)
            | Element::Constraint(_)
            | Element::Gradient(_)
            | Element::Padding(_) => None,
        }
    }

    pub fn base_mut(&mut self) -> Option<&mut GuiBase> {
        match self {
            Element::Frame(e) => Some(&mut e.base),
            Element::Text(e) => Some(&mut e.base),
            Element::Image(e) => Some(&mut e.base),
            Element::Link(e) => Some(&mut e.base),
            Element::Button(e) => Some(&mut e.base),
            Element::Donation(e) => Some(&mut e.base),
            Element::Input(e) => Some(&mut e.base),
            Element::ScrollableFrame(e) => Some(&mut e.base),
            Element::Script(_)
            | Element::Outline(_)
            | Element::Corner(_)
            | Element::List(_)
            | Element::Grid(_)
            | Element::AspectRatio(_)
            | Element::Constraint(_)
            | Element::Gradient(_)
            | Element::Padding(_) => None,
        }
    }

    /// Text styling of text-bearing widgets.
    pub fn text_style(&self) -> Option<&TextStyle> {
        match self {
            Element::Text(e) => Some(&e.style),
            Element::Link(e) => Some(&e.style),
            Element::Button(e) => Some(&e.style),
            Element::Donation(e) => Some(&e.style),
            Element::Input(e) => Some(&e.style),
            Element::Frame(_)
            | Element::Image(_)
            | Element::ScrollableFrame(_)
            | Element::Script(_)
            | Element::Outline(_)
            | Element::Corner(_)
            | Element::List(_)
            | Element::Grid(_)
            | Element::AspectRatio(_)
            | Element::Constraint(_)
            | Element::Gradient(_)
            | Element::Padding(_) => None,
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$record> for Element {
                fn from(record: $record) -> Self {
                    Element::$variant(record)
                }
            }
        )+
    };
}

impl_from_record! {
    Frame => Frame,
    Text => Text,
    Image => Image,
    Link => Link,
    Button => Button,
    Donation => Donation,
    Input => Input,
    ScrollableFrame => ScrollableFrame,
    Script => Script,
    Outline => Outline,
    Corner => Corner,
    List => List,
    Grid => Grid,
    AspectRatio => AspectRatio,
    Constraint => Constraint,
    GradientDecorator => Gradient,
    Padding => Padding,
}
