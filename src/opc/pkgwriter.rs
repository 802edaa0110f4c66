//! Serialization of an [`OpcPackage`] to the physical ZIP format.
//!
//! The writer emits `[Content_Types].xml` first, then the package
//! relationships, then each part followed by its own `.rels` part when it
//! has relationships.

use crate::common::escape_xml;
use crate::opc::constants::{content_type, namespace};
use crate::opc::error::Result;
use crate::opc::package::OpcPackage;
use crate::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes an [`OpcPackage`] out as a ZIP archive.
pub struct PackageWriter;

impl PackageWriter {
    /// Serialize `pkg` and write it to a file at `path`.
    pub fn write<P: AsRef<Path>>(path: P, pkg: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(pkg)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize `pkg` into an arbitrary writer.
    pub fn write_to_stream<W: Write>(writer: &mut W, pkg: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(pkg)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Serialize `pkg` to the bytes of a ZIP archive.
    pub fn to_bytes(pkg: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys = PhysPkgWriter::new();
        Self::write_content_types(&mut phys, pkg)?;
        Self::write_pkg_rels(&mut phys, pkg)?;
        Self::write_parts(&mut phys, pkg)?;
        phys.finish()
    }

    fn write_content_types(phys: &mut PhysPkgWriter, pkg: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(pkg);
        let uri = PackURI::new(CONTENT_TYPES_URI)?;
        phys.write(uri.membername(), cti.to_xml().as_bytes())
    }

    fn write_pkg_rels(phys: &mut PhysPkgWriter, pkg: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri();
        phys.write(rels_uri.membername(), pkg.rels().to_xml().as_bytes())
    }

    fn write_parts(phys: &mut PhysPkgWriter, pkg: &OpcPackage) -> Result<()> {
        for part in pkg.iter_parts() {
            phys.write(part.partname().membername(), part.blob())?;
            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri();
                phys.write(rels_uri.membername(), part.rels().to_xml().as_bytes())?;
            }
        }
        Ok(())
    }
}

/// The `[Content_Types].xml` item: extension defaults plus per-part overrides.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    /// Start with the two defaults every package carries.
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), content_type::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), content_type::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Collect an override entry for every part in the package.
    fn from_package(pkg: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in pkg.iter_parts() {
            cti.add_override(part.partname().as_str(), part.content_type());
        }
        cti
    }

    fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    /// Serialize to the `[Content_Types].xml` body, Defaults before
    /// Overrides, each group in sorted order.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));
        xml.push('\n');

        for (extension, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(extension),
                escape_xml(ct)
            ));
            xml.push('\n');
        }
        for (partname, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(ct)
            ));
            xml.push('\n');
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::relationship_type;
    use crate::opc::part::Part;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(
            partname,
            content_type::PML_PRESENTATION_MAIN,
            b"<p:presentation/>".to_vec(),
        );
        part.relate_to("slides/slide1.xml", relationship_type::SLIDE);
        pkg.add_part(part);
        pkg.add_part(Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            content_type::PML_SLIDE,
            b"<p:sld/>".to_vec(),
        ));
        pkg.relate_to("ppt/presentation.xml", relationship_type::OFFICE_DOCUMENT);
        pkg
    }

    #[test]
    fn test_to_bytes_layout() {
        let pkg = sample_package();
        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "ppt/presentation.xml",
                "ppt/_rels/presentation.xml.rels",
                "ppt/slides/slide1.xml",
            ]
        );
    }

    #[test]
    fn test_content_types_body() {
        let pkg = sample_package();
        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut body = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();

        assert!(body.contains(r#"<Default Extension="rels""#));
        assert!(body.contains(r#"<Default Extension="xml""#));
        assert!(body.contains(&format!(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="{}"/>"#,
            content_type::PML_PRESENTATION_MAIN
        )));
        assert!(body.contains(&format!(
            r#"<Override PartName="/ppt/slides/slide1.xml" ContentType="{}"/>"#,
            content_type::PML_SLIDE
        )));
    }

    #[test]
    fn test_pkg_rels_body() {
        let pkg = sample_package();
        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut body = String::new();
        archive
            .by_name("_rels/.rels")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert!(body.contains(&format!(
            r#"<Relationship Id="rId1" Type="{}" Target="ppt/presentation.xml"/>"#,
            relationship_type::OFFICE_DOCUMENT
        )));
    }

    #[test]
    fn test_write_to_stream_matches_to_bytes() {
        let pkg = sample_package();
        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut streamed = Vec::new();
        PackageWriter::write_to_stream(&mut streamed, &pkg).unwrap();
        assert_eq!(bytes, streamed);
    }
}
