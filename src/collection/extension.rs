//! Extension parsing for collection filenames.
//!
//! The "extension" of a filename here is the segment between its first and
//! second `.`, so `"data.v2.pdf"` has extension `"v2"` rather than `"pdf"`.
//! Collections built from version-like names depend on this reading, so it
//! is kept as is even though it differs from [`std::path::Path::extension`].

/// Get the extension of a filename: the second `.`-delimited segment.
///
/// Returns `None` when the filename contains no `.`.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.split('.').nth(1)
}

/// Get the base name of a filename: everything before the first `.`.
pub fn base_name(filename: &str) -> &str {
    match filename.find('.') {
        Some(dot_pos) => &filename[..dot_pos],
        None => filename,
    }
}

/// Count the `.`-delimited segments of a filename.
pub(crate) fn segment_count(filename: &str) -> usize {
    filename.split('.').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("data1.pdf"), Some("pdf"));
        assert_eq!(extension_of("data.v2.pdf"), Some("v2"));
        assert_eq!(extension_of("trailing."), Some(""));
        assert_eq!(extension_of("no_extension"), None);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("data1.pdf"), "data1");
        assert_eq!(base_name("data.v2.pdf"), "data");
        assert_eq!(base_name("no_extension"), "no_extension");
        assert_eq!(base_name(".hidden"), "");
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count("a"), 1);
        assert_eq!(segment_count("a.pdf"), 2);
        assert_eq!(segment_count("a.tar.gz"), 3);
    }
}
