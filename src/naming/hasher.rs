//! Content hashing.

use std::io::Read;

use md5::{Digest, Md5};

use crate::error::Result;

/// Turns raw bytes into a digest string usable as a base filename.
///
/// Implementations must be deterministic: the same bytes always produce the
/// same digest. Any closure `Fn(&[u8]) -> Result<String>` is a hasher, which
/// keeps tests free of real cryptography.
pub trait ContentHasher {
    /// Compute the digest of `bytes`.
    fn digest(&self, bytes: &[u8]) -> Result<String>;
}

impl<F> ContentHasher for F
where
    F: Fn(&[u8]) -> Result<String>,
{
    fn digest(&self, bytes: &[u8]) -> Result<String> {
        self(bytes)
    }
}

/// MD5 hasher producing lowercase hex digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl Md5Hasher {
    /// Create a new MD5 hasher.
    pub fn new() -> Self {
        Self
    }

    /// Compute the MD5 digest of everything readable from `reader`.
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut hasher = Md5::new();
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        let result = hasher.finalize();
        Ok(format!("{:x}", result))
    }
}

impl ContentHasher for Md5Hasher {
    fn digest(&self, bytes: &[u8]) -> Result<String> {
        let result = Md5::digest(bytes);
        Ok(format!("{:x}", result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_md5_known_digest() {
        let hasher = Md5Hasher::new();
        assert_eq!(
            hasher.digest(b"hello").unwrap(),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert_eq!(
            hasher.digest(b"").unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_md5_reader_matches_bytes() {
        let hasher = Md5Hasher::new();
        let data = vec![7u8; 20_000];
        assert_eq!(
            hasher.digest_reader(data.as_slice()).unwrap(),
            hasher.digest(&data).unwrap()
        );
    }

    #[test]
    fn test_closure_hasher() {
        let stub = |bytes: &[u8]| -> Result<String> { Ok(format!("len{}", bytes.len())) };
        assert_eq!(stub.digest(b"abc").unwrap(), "len3");

        let failing = |_: &[u8]| -> Result<String> { Err(Error::Hash("unavailable".to_string())) };
        assert!(matches!(failing.digest(b"abc"), Err(Error::Hash(_))));
    }
}
