//! Text formatting primitives shared by the slide writers.

use crate::common::RGBColor;

/// Character-level formatting applied to a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family, emitted as both the latin and the complex-script typeface
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold flag
    pub bold: Option<bool>,
    /// Font color
    pub color: Option<RGBColor>,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// The value of the `algn` attribute.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
            Align::Right => "r",
        }
    }
}

/// Vertical anchoring of a text body inside its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Middle,
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub format: TextFormat,
}

impl Run {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

/// One paragraph of a text body.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub align: Option<Align>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a paragraph holding a single run.
    pub fn with_run(align: Option<Align>, run: Run) -> Self {
        Self {
            align,
            runs: vec![run],
        }
    }
}

/// The text content of a shape.
#[derive(Debug, Clone, Default)]
pub struct TextBody {
    pub anchor: Option<Anchor>,
    pub paragraphs: Vec<Paragraph>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_attribute_values() {
        assert_eq!(Align::Left.as_str(), "l");
        assert_eq!(Align::Center.as_str(), "ctr");
        assert_eq!(Align::Right.as_str(), "r");
    }

    #[test]
    fn test_paragraph_with_run() {
        let p = Paragraph::with_run(Some(Align::Right), Run::new("x", TextFormat::default()));
        assert_eq!(p.align, Some(Align::Right));
        assert_eq!(p.runs.len(), 1);
        assert_eq!(p.runs[0].text, "x");
    }
}
