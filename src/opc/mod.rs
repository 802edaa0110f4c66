//! Open Packaging Conventions (OPC) implementation.
//!
//! This module implements the write side of the OPC specification, which
//! defines the structure and packaging format for Office Open XML documents.
//! It includes support for:
//!
//! - Package structure (parts, relationships)
//! - Content type management
//! - ZIP-based physical packaging
//!
//! Parts and relationships are kept in insertion order throughout, so a
//! given object graph always serializes to the same archive.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
