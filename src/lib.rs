//! Longan - a Rust library for generating themed PowerPoint presentations
//!
//! This library builds `.pptx` decks from content lists, with first-class
//! support for Arabic and other right-to-left text: every visible string is
//! shaped into presentation forms and reordered for visual display before it
//! is written into a text run.
//!
//! # Features
//!
//! - **Directionality adapter**: Arabic glyph shaping (contextual joining
//!   forms, lam-alef ligatures) plus bidirectional reordering of mixed-script
//!   text into visual order
//! - **PPTX writer**: Builds a complete OPC package (slides, master, layout,
//!   theme, document properties) from scratch, no template file needed
//! - **Theme-driven composition**: All colors, typefaces and positions live
//!   in one [`deck::Theme`] value; a new look is a new value, not new code
//! - **Slide archetypes**: Title, section divider, bulleted content,
//!   two-column and architecture-diagram slides
//! - **Degraded mode**: Built without the `shaping` feature, text passes
//!   through unmodified and a single warning is logged
//!
//! # Example - Composing a deck
//!
//! ```no_run
//! use longan::deck::{Composer, SlideContent, Theme};
//! use longan::pptx::Presentation;
//!
//! # fn main() -> longan::Result<()> {
//! let theme = Theme::default();
//! let mut pres = Presentation::new();
//!
//! let mut composer = Composer::new(&theme, &mut pres);
//! composer.compose(&[
//!     SlideContent::SectionHeader {
//!         title: "نظرة عامة على المشروع".to_string(),
//!     },
//!     SlideContent::Content {
//!         title: "المقدمة والأهداف".to_string(),
//!         bullets: vec!["دعم المحتوى باللغة العربية".to_string()],
//!     },
//! ]);
//!
//! pres.save("deck.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Adapting text directly
//!
//! ```
//! use longan::text;
//!
//! // Logical (reading-order) Arabic in, visually-ordered presentation
//! // forms out. Latin text is untouched.
//! let display = text::display("مرحبا LMS");
//! assert!(display.contains("LMS"));
//! ```

pub mod common;
pub mod deck;
pub mod error;
pub mod opc;
pub mod pptx;
pub mod text;

pub use error::{Error, Result};
