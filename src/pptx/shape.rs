//! Shapes placed on a slide and their XML serialization.
//!
//! Shapes are positioned in EMUs and serialized as `<p:sp>` elements inside
//! the slide's shape tree. Only the shape kinds the deck composer needs are
//! modeled; each maps to a DrawingML preset geometry.

use std::fmt::Write;

use crate::common::{escape_xml, RGBColor};
use crate::common::unit::pt_to_centipoints;
use crate::error::{Error, Result};
use crate::pptx::format::{Anchor, Paragraph, Run, TextBody};

/// The kind of a shape, mapping to a DrawingML preset geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A plain text box (rect geometry with `txBox="1"`)
    TextBox,
    Rectangle,
    RoundedRectangle,
    Ellipse,
    RightArrow,
}

impl ShapeKind {
    /// The `prst` attribute of the shape's preset geometry.
    fn preset(self) -> &'static str {
        match self {
            ShapeKind::TextBox | ShapeKind::Rectangle => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::RightArrow => "rightArrow",
        }
    }

    /// The prefix used to build the shape's `name` attribute.
    fn name_prefix(self) -> &'static str {
        match self {
            ShapeKind::TextBox => "Text Box",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::RightArrow => "Right Arrow",
        }
    }
}

/// A solid fill, optionally translucent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidFill {
    pub color: RGBColor,
    /// Opacity in thousandths of a percent (`20000` is 20% opaque).
    /// `None` means fully opaque.
    pub alpha: Option<u32>,
}

/// Outline styling for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// No `<a:ln>` element is written; the theme outline applies
    Inherit,
    /// Explicit `<a:noFill/>` outline
    NoLine,
    /// Solid outline in the given color
    Solid(RGBColor),
}

/// One shape on a slide.
#[derive(Debug)]
pub struct Shape {
    shape_id: usize,
    kind: ShapeKind,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    fill: Option<SolidFill>,
    line: LineStyle,
    text: Option<TextBody>,
}

impl Shape {
    pub(crate) fn new(
        shape_id: usize,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        // A text box always carries a text body, even before any paragraph
        // is added; auto shapes get one lazily on the first paragraph.
        let text = match kind {
            ShapeKind::TextBox => Some(TextBody::default()),
            _ => None,
        };
        Self {
            shape_id,
            kind,
            x,
            y,
            width,
            height,
            fill: None,
            line: LineStyle::Inherit,
            text,
        }
    }

    /// Give the shape an opaque solid fill.
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(SolidFill { color, alpha: None });
        self
    }

    /// Give the shape a translucent solid fill.
    ///
    /// `alpha` is the opacity in thousandths of a percent.
    pub fn fill_alpha(&mut self, color: RGBColor, alpha: u32) -> &mut Self {
        self.fill = Some(SolidFill {
            color,
            alpha: Some(alpha),
        });
        self
    }

    /// Remove the shape's outline.
    pub fn no_line(&mut self) -> &mut Self {
        self.line = LineStyle::NoLine;
        self
    }

    /// Give the shape a solid outline in the given color.
    pub fn outline(&mut self, color: RGBColor) -> &mut Self {
        self.line = LineStyle::Solid(color);
        self
    }

    /// Set the vertical anchoring of the shape's text body.
    pub fn anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.text.get_or_insert_with(TextBody::default).anchor = Some(anchor);
        self
    }

    /// Append a paragraph to the shape's text body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.text
            .get_or_insert_with(TextBody::default)
            .paragraphs
            .push(paragraph);
        self
    }

    pub fn id(&self) -> usize {
        self.shape_id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn solid_fill(&self) -> Option<&SolidFill> {
        self.fill.as_ref()
    }

    pub fn line_style(&self) -> LineStyle {
        self.line
    }

    pub fn text_body(&self) -> Option<&TextBody> {
        self.text.as_ref()
    }

    /// Serialize this shape as a `<p:sp>` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            self.shape_id,
            self.kind.name_prefix(),
            self.shape_id
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        if self.kind == ShapeKind::TextBox {
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        } else {
            xml.push_str("<p:cNvSpPr/>");
        }
        xml.push_str("<p:nvPr/></p:nvSpPr><p:spPr>");

        write!(
            xml,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.width, self.height
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        write!(
            xml,
            r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
            self.kind.preset()
        )
        .map_err(|e| Error::Xml(e.to_string()))?;

        if let Some(fill) = &self.fill {
            match fill.alpha {
                Some(alpha) => write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr></a:solidFill>"#,
                    fill.color.to_hex(),
                    alpha
                ),
                None => write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    fill.color.to_hex()
                ),
            }
            .map_err(|e| Error::Xml(e.to_string()))?;
        }
        match self.line {
            LineStyle::Inherit => {}
            LineStyle::NoLine => xml.push_str("<a:ln><a:noFill/></a:ln>"),
            LineStyle::Solid(color) => {
                write!(
                    xml,
                    r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    color.to_hex()
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
            }
        }
        xml.push_str("</p:spPr>");

        if let Some(text) = &self.text {
            write_text_body(xml, text)?;
        }
        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// Serialize a text body as a `<p:txBody>` element.
fn write_text_body(xml: &mut String, body: &TextBody) -> Result<()> {
    match body.anchor {
        Some(Anchor::Middle) => xml.push_str(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#),
        _ => xml.push_str(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0"/>"#),
    }
    xml.push_str("<a:lstStyle/>");
    if body.paragraphs.is_empty() {
        // CT_TextBody requires at least one paragraph
        xml.push_str("<a:p/>");
    }
    for paragraph in &body.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    if paragraph.align.is_none() && paragraph.runs.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }
    xml.push_str("<a:p>");
    if let Some(align) = paragraph.align {
        write!(xml, r#"<a:pPr algn="{}"/>"#, align.as_str())
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    for run in &paragraph.runs {
        write_run(xml, run)?;
    }
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run(xml: &mut String, run: &Run) -> Result<()> {
    xml.push_str(r#"<a:r><a:rPr lang="en-US" dirty="0""#);
    if let Some(size) = run.format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    if run.format.bold == Some(true) {
        xml.push_str(r#" b="1""#);
    }
    if run.format.color.is_none() && run.format.font.is_none() {
        xml.push_str("/>");
    } else {
        xml.push('>');
        // Fill comes before the typeface elements in CT_TextCharacterProperties.
        if let Some(color) = run.format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }
        if let Some(font) = &run.format.font {
            let typeface = escape_xml(font);
            write!(
                xml,
                r#"<a:latin typeface="{0}"/><a:cs typeface="{0}"/>"#,
                typeface
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }
        xml.push_str("</a:rPr>");
    }
    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text)).map_err(|e| Error::Xml(e.to_string()))?;
    xml.push_str("</a:r>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::{Align, TextFormat};

    fn render(shape: &Shape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape = Shape::new(2, ShapeKind::TextBox, 914400, 1828800, 457200, 228600);
        shape.add_paragraph(Paragraph::with_run(
            Some(Align::Center),
            Run::new(
                "Hello",
                TextFormat {
                    font: Some("Cairo".into()),
                    size: Some(60.0),
                    bold: Some(true),
                    color: Some(RGBColor::new(0xFF, 0xFF, 0xFF)),
                },
            ),
        ));
        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Text Box 2"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="457200" cy="228600"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect">"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="6000""#));
        assert!(xml.contains(r#"b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Cairo"/>"#));
        assert!(xml.contains(r#"<a:cs typeface="Cairo"/>"#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
    }

    #[test]
    fn test_fill_precedes_typeface_in_run_properties() {
        let mut shape = Shape::new(3, ShapeKind::TextBox, 0, 0, 1, 1);
        shape.add_paragraph(Paragraph::with_run(
            None,
            Run::new(
                "x",
                TextFormat {
                    font: Some("Cairo".into()),
                    size: None,
                    bold: None,
                    color: Some(RGBColor::new(0x01, 0xD4, 0x93)),
                },
            ),
        ));
        let xml = render(&shape);
        let fill = xml.find("<a:solidFill>").unwrap();
        let latin = xml.find("<a:latin").unwrap();
        assert!(fill < latin);
    }

    #[test]
    fn test_auto_shape_fill_and_outline() {
        let mut shape = Shape::new(4, ShapeKind::RoundedRectangle, 0, 0, 100, 100);
        shape
            .fill(RGBColor::new(0xFF, 0xFF, 0xFF))
            .outline(RGBColor::new(0x01, 0xD4, 0x93));
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:ln><a:solidFill><a:srgbClr val="01D493"/></a:solidFill></a:ln>"#));
        // No text was added, so the shape carries no text body at all.
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_translucent_fill() {
        let mut shape = Shape::new(5, ShapeKind::Ellipse, 0, 0, 100, 100);
        shape.fill_alpha(RGBColor::new(0x01, 0xD4, 0x93), 20000).no_line();
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:srgbClr val="01D493"><a:alpha val="20000"/></a:srgbClr>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_empty_text_box_keeps_one_paragraph() {
        let shape = Shape::new(6, ShapeKind::TextBox, 0, 0, 100, 100);
        let xml = render(&shape);
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
    }

    #[test]
    fn test_middle_anchor() {
        let mut shape = Shape::new(7, ShapeKind::TextBox, 0, 0, 100, 100);
        shape.anchor(Anchor::Middle);
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut shape = Shape::new(8, ShapeKind::TextBox, 0, 0, 100, 100);
        shape.add_paragraph(Paragraph::with_run(
            None,
            Run::new("a < b & c", TextFormat::default()),
        ));
        let xml = render(&shape);
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
    }
}
