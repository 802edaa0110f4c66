//! The presentation object and its assembly into an OPC package.

use std::fmt::Write;
use std::path::Path;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::opc::constants::{content_type, relationship_type};
use crate::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::pptx::slide::Slide;
use crate::pptx::template;

/// Default slide size, 4:3 at 10 by 7.5 inches.
const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;
const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// Notes page size, fixed portrait letter.
const NOTES_WIDTH: i64 = 6_858_000;
const NOTES_HEIGHT: i64 = 9_144_000;

/// Slide ids in `sldIdLst` start at 256 per the PML schema.
const FIRST_SLIDE_ID: usize = 256;

/// A presentation under construction.
///
/// Slides are built in memory and the whole package is serialized in a
/// single pass by [`save`](Presentation::save) or
/// [`to_bytes`](Presentation::to_bytes).
pub struct Presentation {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
    title: Option<String>,
    author: Option<String>,
    theme_font: String,
}

impl Presentation {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: None,
            author: None,
            theme_font: "Calibri".to_string(),
        }
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    pub fn slide_size(&self) -> (i64, i64) {
        (self.slide_width, self.slide_height)
    }

    /// Set the document title written to the core properties part.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the document author written to the core properties part.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    /// Set the typeface of the theme's major and minor font schemes.
    pub fn set_theme_font(&mut self, font: impl Into<String>) {
        self.theme_font = font.into();
    }

    /// Append a new empty slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len();
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().unwrap()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Serialize the presentation to a `.pptx` file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pkg = self.build_package()?;
        PackageWriter::write(path, &pkg)?;
        Ok(())
    }

    /// Serialize the presentation to an in-memory `.pptx` archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.build_package()?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Assemble the full OPC package: the presentation part, one part per
    /// slide, the master/layout/theme boilerplate and the document
    /// properties, all wired together with relationships.
    fn build_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();
        pkg.relate_to("ppt/presentation.xml", relationship_type::OFFICE_DOCUMENT);
        pkg.relate_to("docProps/core.xml", relationship_type::CORE_PROPERTIES);
        pkg.relate_to("docProps/app.xml", relationship_type::EXTENDED_PROPERTIES);

        // The presentation part's blob references the rIds of its own
        // relationships, so those are assigned first.
        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let mut pres_part = Part::new(pres_uri, content_type::PML_PRESENTATION_MAIN, Vec::new());
        let master_r_id =
            pres_part.relate_to("slideMasters/slideMaster1.xml", relationship_type::SLIDE_MASTER);
        let mut slide_r_ids = Vec::with_capacity(self.slides.len());
        for index in 0..self.slides.len() {
            let target = format!("slides/slide{}.xml", index + 1);
            slide_r_ids.push(pres_part.relate_to(&target, relationship_type::SLIDE));
        }
        pres_part.relate_to("presProps.xml", relationship_type::PRES_PROPS);
        pres_part.relate_to("viewProps.xml", relationship_type::VIEW_PROPS);
        pres_part.relate_to("theme/theme1.xml", relationship_type::THEME);
        pres_part.relate_to("tableStyles.xml", relationship_type::TABLE_STYLES);
        pres_part.set_blob(self.presentation_xml(&master_r_id, &slide_r_ids)?.into_bytes());
        pkg.add_part(pres_part);

        for (index, slide) in self.slides.iter().enumerate() {
            let uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            let mut part = Part::new(uri, content_type::PML_SLIDE, slide.to_xml()?.into_bytes());
            part.relate_to("../slideLayouts/slideLayout1.xml", relationship_type::SLIDE_LAYOUT);
            pkg.add_part(part);
        }

        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let mut layout_part = Part::new(
            layout_uri,
            content_type::PML_SLIDE_LAYOUT,
            template::SLIDE_LAYOUT_XML.as_bytes().to_vec(),
        );
        layout_part.relate_to("../slideMasters/slideMaster1.xml", relationship_type::SLIDE_MASTER);
        pkg.add_part(layout_part);

        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let mut master_part = Part::new(
            master_uri,
            content_type::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML.as_bytes().to_vec(),
        );
        master_part.relate_to("../slideLayouts/slideLayout1.xml", relationship_type::SLIDE_LAYOUT);
        master_part.relate_to("../theme/theme1.xml", relationship_type::THEME);
        pkg.add_part(master_part);

        pkg.add_part(Part::new(
            PackURI::new("/ppt/theme/theme1.xml")?,
            content_type::OFC_THEME,
            template::theme_xml(&self.theme_font).into_bytes(),
        ));
        pkg.add_part(Part::new(
            PackURI::new("/ppt/presProps.xml")?,
            content_type::PML_PRES_PROPS,
            template::PRES_PROPS_XML.as_bytes().to_vec(),
        ));
        pkg.add_part(Part::new(
            PackURI::new("/ppt/viewProps.xml")?,
            content_type::PML_VIEW_PROPS,
            template::VIEW_PROPS_XML.as_bytes().to_vec(),
        ));
        pkg.add_part(Part::new(
            PackURI::new("/ppt/tableStyles.xml")?,
            content_type::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML.as_bytes().to_vec(),
        ));

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let title = self.title.as_deref().unwrap_or("");
        let author = self.author.as_deref().unwrap_or("longan");
        pkg.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            content_type::OPC_CORE_PROPERTIES,
            template::core_properties_xml(title, author, &timestamp).into_bytes(),
        ));
        pkg.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            content_type::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.slides.len()).into_bytes(),
        ));

        Ok(pkg)
    }

    fn presentation_xml(&self, master_r_id: &str, slide_r_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(512 + slide_r_ids.len() * 48);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
            master_r_id
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        if slide_r_ids.is_empty() {
            xml.push_str("<p:sldIdLst/>");
        } else {
            xml.push_str("<p:sldIdLst>");
            for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)
                    .map_err(|e| Error::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/><p:notesSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height, NOTES_WIDTH, NOTES_HEIGHT
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
        xml.push_str("</p:presentation>");
        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
