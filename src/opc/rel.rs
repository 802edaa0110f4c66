/// Relationship objects connecting package parts.
///
/// Every relationship carries an `rId` scoped to its source (the package or
/// one part), a relationship type URI, and a target reference relative to the
/// source's base URI.
use crate::common::escape_xml;
use crate::opc::constants::namespace;

/// A single relationship from a source (package or part) to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID (e.g., "rId1").
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type URI.
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference (relative to the source's base URI).
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Numeric portion of the rId, used for ordering on serialization.
    fn index(&self) -> usize {
        self.r_id
            .strip_prefix("rId")
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

/// Collection of the relationships owned by the package or by one part.
///
/// Relationship IDs are handed out densely from `rId1` upward in insertion
/// order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationship collection.
    pub fn new() -> Self {
        Self { rels: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Iterate the relationships in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    fn next_r_id(&self) -> String {
        format!("rId{}", self.rels.len() + 1)
    }

    /// Add a new relationship and return its rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = self.next_r_id();
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    /// Return the rId of an existing relationship of `reltype` to
    /// `target_ref`, adding one if absent.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }
        self.add(reltype, target_ref)
    }

    /// Serialize to the body of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));
        xml.push('\n');

        // Sort numerically so rId10 sorts after rId9
        let mut rels: Vec<&Relationship> = self.rels.iter().collect();
        rels.sort_by_key(|rel| rel.index());

        for rel in rels {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref)
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("http://reltype/a", "a.xml"), "rId1");
        assert_eq!(rels.add("http://reltype/b", "b.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_get_or_add_dedups() {
        let mut rels = Relationships::new();
        let first = rels.get_or_add("http://reltype/a", "a.xml");
        let again = rels.get_or_add("http://reltype/a", "a.xml");
        assert_eq!(first, again);
        assert_eq!(rels.len(), 1);

        // Same target under a different type is a distinct relationship
        let other = rels.get_or_add("http://reltype/b", "a.xml");
        assert_ne!(first, other);
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add("http://reltype/a", "slides/slide1.xml");
        let xml = rels.to_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains(
            r#"<Relationship Id="rId1" Type="http://reltype/a" Target="slides/slide1.xml"/>"#
        ));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[test]
    fn test_to_xml_numeric_order() {
        let mut rels = Relationships::new();
        for i in 0..11 {
            rels.add("http://reltype/slide", &format!("slides/slide{}.xml", i + 1));
        }
        let xml = rels.to_xml();
        let pos9 = xml.find(r#"Id="rId9""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos9 < pos10);
    }
}
