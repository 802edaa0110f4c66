//! Writer for PresentationML (`.pptx`) packages.
//!
//! The model is write-only and deliberately small: a [`Presentation`] holds
//! [`Slide`]s, each slide holds [`Shape`]s positioned in EMUs, and a shape
//! optionally carries a [`TextBody`]. Serialization assembles an OPC package
//! through [`crate::opc`] in a single pass.

pub mod format;
pub mod pres;
pub mod shape;
pub mod slide;
mod template;

pub use format::{Align, Anchor, Paragraph, Run, TextBody, TextFormat};
pub use pres::Presentation;
pub use shape::{LineStyle, Shape, ShapeKind, SolidFill};
pub use slide::Slide;
