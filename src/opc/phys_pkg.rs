//! Physical package I/O, the ZIP archive beneath the OPC abstraction.

use crate::opc::error::Result;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes package members into an in-memory ZIP archive.
///
/// Members are written in call order, which the OPC layer relies on to keep
/// serialized packages deterministic.
pub struct PhysPkgWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a writer backed by an in-memory buffer.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated),
        }
    }

    /// Write one member with the given membername (no leading slash).
    pub fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        self.zip.start_file(membername, self.options)?;
        self.zip.write_all(blob)?;
        Ok(())
    }

    /// Finalize the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
