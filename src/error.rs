//! Crate-level error and result types.

use thiserror::Error;

/// Errors produced while composing or serializing a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the OPC packaging layer
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::OpcError),

    /// Error while generating XML markup
    #[error("XML generation error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
