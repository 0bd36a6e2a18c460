//! Whole-file reading.

use std::path::Path;

use crate::error::Result;

/// Read a file's entire content into memory.
pub fn file_to_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
