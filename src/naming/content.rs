//! Destination paths derived from file content.

use crate::error::Result;
use crate::naming::hasher::{ContentHasher, Md5Hasher};

/// Derive the destination path for `bytes`: `{dir}/{digest}.{extension}`.
///
/// Nothing is written and no collision check is made. Identical bytes always
/// map to the same path for a given `dir` and `extension`. Hasher failures
/// are returned unchanged.
pub fn derive_name<H>(bytes: &[u8], dir: &str, extension: &str, hasher: &H) -> Result<String>
where
    H: ContentHasher + ?Sized,
{
    let digest = hasher.digest(bytes)?;
    Ok(format!("{}/{}.{}", dir, digest, extension))
}

/// A hasher bound to an output directory and extension.
#[derive(Debug, Clone)]
pub struct ContentNamer<H = Md5Hasher> {
    hasher: H,
    dir: String,
    extension: String,
}

impl ContentNamer<Md5Hasher> {
    /// Create a namer using MD5 digests.
    pub fn md5(dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::new(Md5Hasher::new(), dir, extension)
    }
}

impl<H: ContentHasher> ContentNamer<H> {
    /// Create a namer with a custom hasher.
    pub fn new(hasher: H, dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            hasher,
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Derive the destination path for `bytes`.
    pub fn name_for(&self, bytes: &[u8]) -> Result<String> {
        derive_name(bytes, &self.dir, &self.extension, &self.hasher)
    }

    /// Get the output directory.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Get the extension appended to every digest.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the underlying hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
