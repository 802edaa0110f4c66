//! Themed deck composition on top of the raw presentation writer.
//!
//! [`Theme`] holds every color, typeface and canvas position; [`Composer`]
//! turns [`SlideContent`] values into styled slides, routing all visible
//! text through the directionality adapter.

pub mod composer;
pub mod content;
pub mod theme;

pub use composer::{compose_text_run, Composer};
pub use content::{Column, SlideContent};
pub use theme::{Fonts, Layout, Palette, Rect, TextStyle, Theme};
