//! Objects that implement assembling OPC packages.
//!
//! [`OpcPackage`] is the in-memory object graph a document is built into
//! before serialization: package-level relationships plus an ordered list of
//! parts, each carrying its own relationships.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackURI;
use crate::opc::part::Part;
use crate::opc::rel::Relationships;

/// An Open Packaging Conventions package under construction.
///
/// Parts are kept in insertion order, so repeated serializations of the same
/// object graph produce the same archive member order.
pub struct OpcPackage {
    /// Package-level relationships, serialized as "/_rels/.rels"
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(),
            parts: Vec::new(),
        }
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a package-level relationship, returning its rId.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Add a part to the package.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Get mutable access to a previously added part.
    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut Part> {
        self.parts
            .iter_mut()
            .find(|part| part.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Iterate the parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
