//! Writing bytes under their content-addressed name.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::fs::reader::file_to_bytes;
use crate::naming::ContentHasher;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `bytes` to `{dir}/{digest}.{extension}` and return that path.
///
/// The directory is created if needed. Content goes to a temporary file in
/// `dir` first and is renamed into place, so a digest path only ever holds a
/// complete file. An existing file is kept when its digest matches and
/// replaced otherwise.
pub fn write_content_addressed<H>(
    bytes: &[u8],
    dir: &Path,
    extension: &str,
    hasher: &H,
) -> Result<PathBuf>
where
    H: ContentHasher + ?Sized,
{
    let digest = hasher.digest(bytes)?;
    let path = dir.join(format!("{}.{}", digest, extension));

    ensure_dir(dir)?;

    if path.exists() {
        if !path.is_file() {
            return Err(Error::NotAFile(path));
        }

        let existing = file_to_bytes(&path)?;
        if hasher.digest(&existing)? == digest {
            tracing::debug!("Skipping existing file: {}", path.display());
            return Ok(path);
        }

        tracing::warn!(
            "Existing file does not match its digest, replacing: {}",
            path.display()
        );
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(path)
}
