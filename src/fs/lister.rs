//! Directory listing for collection construction.

use std::path::Path;

use crate::collection::Collection;
use crate::error::{Error, Result};

/// List the regular files in `dir` whose names contain any of `sub_strings`.
///
/// Only the top level of `dir` is read and hidden files are skipped. An
/// empty `sub_strings` keeps every file. Names are returned sorted so the
/// listing order does not depend on the platform.
pub fn list_filenames<S: AsRef<str>>(dir: &Path, sub_strings: &[S]) -> Result<Vec<String>> {
    let mut filenames = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                tracing::warn!("Skipping non UTF-8 filename: {}", path.display());
                continue;
            }
        };

        if filename.starts_with('.') {
            continue;
        }

        if sub_strings.is_empty() || sub_strings.iter().any(|s| filename.contains(s.as_ref())) {
            filenames.push(filename.to_string());
        }
    }

    filenames.sort();
    tracing::debug!("Found {} matching files in {}", filenames.len(), dir.display());

    Ok(filenames)
}

/// List `dir` and build a collection named `name` from the matching files.
///
/// Collections record their directory as a string, so `dir` must be valid
/// UTF-8.
pub fn collect(name: &str, dir: &Path, sub_strings: &[String]) -> Result<Collection> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::NonUtf8Path(dir.to_path_buf()))?;
    let filenames = list_filenames(dir, sub_strings)?;

    tracing::info!(
        "Collecting {} files for '{}' from {}",
        filenames.len(),
        name,
        dir.display()
    );

    Collection::new(
        name,
        filenames,
        dir_str,
        sub_strings.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn populate(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), name.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_list_filenames_filters() {
        let dir = tempfile::tempdir().unwrap();
        populate(
            dir.path(),
            &["data2.pdf", "data1.pdf", "image1.png", ".hidden.pdf"],
        );
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let pdfs = list_filenames(dir.path(), &[".pdf"]).unwrap();
        assert_eq!(pdfs, vec!["data1.pdf", "data2.pdf"]);

        let all = list_filenames::<&str>(dir.path(), &[]).unwrap();
        assert_eq!(all, vec!["data1.pdf", "data2.pdf", "image1.png"]);

        let either = list_filenames(dir.path(), &["image", "data2"]).unwrap();
        assert_eq!(either, vec!["data2.pdf", "image1.png"]);
    }

    #[test]
    fn test_list_filenames_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_filenames(&dir.path().join("absent"), &["pdf"]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_collect() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), &["data1.pdf", "data2.pdf", "image1.png"]);

        let subs = vec![".pdf".to_string()];
        let collection = collect("pdf", dir.path(), &subs).unwrap();
        assert_eq!(collection.name(), "pdf");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.sub_strings(), [".pdf"]);
        assert_eq!(Some(collection.dir()), dir.path().to_str());
    }

    #[test]
    fn test_collect_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), &["image1.png"]);

        let err = collect("pdf", dir.path(), &[".pdf".to_string()]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { ref name } if name == "pdf"));
    }

    #[test]
    fn test_collect_mixed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path(), &["data1.pdf", "data1.png"]);

        let err = collect("data", dir.path(), &["data".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InconsistentExtension { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join(OsStr::from_bytes(b"docs\xff"));
        fs::create_dir(&dir).unwrap();
        populate(&dir, &["data1.pdf"]);

        let err = collect("pdf", &dir, &[]).unwrap_err();
        assert!(matches!(err, Error::NonUtf8Path(ref p) if *p == dir));
    }
}
