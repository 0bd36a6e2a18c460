//! Extension validation for derived filenames.

use crate::error::{Error, Result};

/// Validate an extension used to build filenames.
///
/// Extensions are appended after a `.`, so they must not contain another
/// `.`, path separators or NUL bytes, and must not be blank.
pub fn sanitize_extension(extension: &str) -> Result<String> {
    if extension.contains('/') || extension.contains('\\') {
        return Err(Error::InvalidExtension(format!(
            "Path separators not allowed in extension: '{}'",
            extension
        )));
    }

    if extension.contains('\0') {
        return Err(Error::InvalidExtension(format!(
            "Null bytes not allowed in extension: '{}'",
            extension
        )));
    }

    // A second dot would shift the first-dot extension of derived names
    if extension.contains('.') {
        return Err(Error::InvalidExtension(format!(
            "Extension must not contain '.': '{}'",
            extension
        )));
    }

    let trimmed = extension.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidExtension(
            "Extension cannot be empty or whitespace-only".to_string(),
        ));
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidExtension(format!(
            "Control characters not allowed in extension: '{}'",
            extension
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_extension_valid() {
        assert_eq!(sanitize_extension("pdf").unwrap(), "pdf");
        assert_eq!(sanitize_extension(" bin ").unwrap(), "bin");
    }

    #[test]
    fn test_sanitize_extension_separators() {
        assert!(sanitize_extension("../pdf").is_err());
        assert!(sanitize_extension("a/b").is_err());
        assert!(sanitize_extension("a\\b").is_err());
    }

    #[test]
    fn test_sanitize_extension_dots() {
        assert!(sanitize_extension("tar.gz").is_err());
        assert!(sanitize_extension(".pdf").is_err());
    }

    #[test]
    fn test_sanitize_extension_empty() {
        assert!(sanitize_extension("").is_err());
        assert!(sanitize_extension("   ").is_err());
        assert!(sanitize_extension("p\0f").is_err());
        assert!(sanitize_extension("p\tf").is_err());
    }
}
