//! Shared types and utilities used by every layer of the crate.

// Submodule declarations
pub mod color;
pub mod escape;
pub mod unit;

// Re-exports for convenience
pub use color::RGBColor;
pub use escape::escape_xml;
