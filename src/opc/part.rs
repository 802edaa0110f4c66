//! Package parts, the fundamental units of content in an OPC package.
//!
//! Each part has a unique partname (PackURI), a content type, a serialized
//! body, and the relationships it owns towards other parts.

use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// One part of an OPC package.
#[derive(Debug)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The serialized content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    ///
    /// # Arguments
    /// * `partname` - The partname (URI) of this part
    /// * `content_type` - The content type of this part
    /// * `blob` - The serialized content of this part
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the partname of this part.
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the serialized content of this part.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the serialized content of this part.
    ///
    /// Used when a part's content depends on relationship ids that are only
    /// known after the part has been related to its targets.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Get the relationships for this part.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns its rId. Otherwise, creates a new relationship and returns
    /// the new rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }
}
