//! A single slide and its serialization as a PresentationML slide part.

use crate::error::Result;
use crate::pptx::shape::{Shape, ShapeKind};

/// One slide of a presentation.
///
/// Shapes are kept in insertion order, which is also their z-order: later
/// shapes render on top of earlier ones.
#[derive(Debug)]
pub struct Slide {
    slide_id: usize,
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: usize) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> usize {
        self.slide_id
    }

    /// Add a text box at the given position (EMUs).
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut Shape {
        self.add_shape(ShapeKind::TextBox, x, y, width, height)
    }

    /// Add an auto shape of the given kind at the given position (EMUs).
    pub fn add_auto_shape(
        &mut self,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut Shape {
        self.add_shape(kind, x, y, width, height)
    }

    fn add_shape(&mut self, kind: ShapeKind, x: i64, y: i64, width: i64, height: i64) -> &mut Shape {
        // Shape id 1 is taken by the shape tree's group header.
        let shape_id = self.shapes.len() + 2;
        self.shapes.push(Shape::new(shape_id, kind, x, y, width, height));
        self.shapes.last_mut().unwrap()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize this slide as a complete slide part.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ids_start_after_group_header() {
        let mut slide = Slide::new(256);
        let first = slide.add_text_box(0, 0, 100, 100).id();
        let second = slide.add_auto_shape(ShapeKind::Rectangle, 0, 0, 100, 100).id();
        assert_eq!(first, 2);
        assert_eq!(second, 3);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_slide_xml_skeleton() {
        let slide = Slide::new(256);
        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains(r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#));
        assert!(xml.contains(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/>"#));
        assert!(xml.ends_with("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"));
    }

    #[test]
    fn test_slide_xml_contains_all_shapes() {
        let mut slide = Slide::new(257);
        slide.add_text_box(0, 0, 100, 100);
        slide.add_auto_shape(ShapeKind::Ellipse, 0, 0, 50, 50);
        slide.add_auto_shape(ShapeKind::RightArrow, 0, 0, 50, 50);
        let xml = slide.to_xml().unwrap();
        assert_eq!(xml.matches("<p:sp>").count(), 3);
        assert!(xml.contains(r#"prst="ellipse""#));
        assert!(xml.contains(r#"prst="rightArrow""#));
    }
}
