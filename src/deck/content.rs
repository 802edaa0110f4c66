//! Slide content descriptions.
//!
//! Content is captured in logical reading order and free of any styling or
//! geometry; the composer decides where everything goes and how it looks.

/// One column of a two-column slide.
#[derive(Debug, Clone)]
pub struct Column {
    pub heading: String,
    pub bullets: Vec<String>,
}

impl Column {
    pub fn new(heading: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets,
        }
    }
}

/// The content of one slide.
#[derive(Debug, Clone)]
pub enum SlideContent {
    /// Opening slide: deck title, subtitle and a date stamp
    Title {
        title: String,
        subtitle: String,
        date_stamp: String,
    },
    /// Dark divider slide with a single large heading
    SectionHeader { title: String },
    /// Light slide with a header bar and stacked bullet rows
    Content {
        title: String,
        bullets: Vec<String>,
    },
    /// Header bar plus two side-by-side bullet columns
    TwoColumn {
        title: String,
        left: Column,
        right: Column,
    },
    /// The fixed client/server technology diagram
    Architecture,
}
