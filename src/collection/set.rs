//! Same-extension filename collections.

use crate::collection::extension::{base_name, extension_of, segment_count};
use crate::error::{Error, Result};

/// A set of base filenames sharing one extension, collected from a directory.
///
/// Name a collection after its extension, e.g. a collection of
/// `["data1.pdf", "data2.pdf"]` is usually called `"pdf"`. The first filename
/// fixes the extension every other filename must carry.
///
/// Collections are values: they are never modified after construction, and
/// [`Collection::change_extension`] returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Name of the collection, used as its key in a [`CollectionIndex`].
    ///
    /// [`CollectionIndex`]: crate::collection::CollectionIndex
    pub(crate) name: String,

    /// Filenames collected from `dir`, in listing order.
    pub(crate) filenames: Vec<String>,

    /// Directory the filenames were collected from.
    pub(crate) dir: String,

    /// Substrings used to search for the filenames in `dir`.
    pub(crate) sub_strings: Vec<String>,
}

impl Collection {
    /// Build a collection, checking that every filename shares the extension
    /// of the first one.
    pub fn new(
        name: impl Into<String>,
        files: Vec<String>,
        dir: impl Into<String>,
        sub_strings: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        let dir = dir.into();

        if files.is_empty() {
            return Err(Error::EmptyInput { name });
        }

        if dir.is_empty() {
            return Err(Error::EmptyDir { name });
        }

        let extension = extension_of(&files[0]).ok_or_else(|| Error::MalformedFilename {
            filename: files[0].clone(),
        })?;

        for filename in &files {
            if segment_count(filename) < 2 {
                return Err(Error::MissingExtension {
                    filename: filename.clone(),
                    files: files.clone(),
                });
            }

            if extension_of(filename) != Some(extension) {
                return Err(Error::InconsistentExtension {
                    expected: extension.to_string(),
                    filename: filename.clone(),
                    files: files.clone(),
                });
            }
        }

        Ok(Self {
            name,
            filenames: files,
            dir,
            sub_strings,
        })
    }

    /// Create a copy of this collection with every filename's extension
    /// replaced by `extension`.
    ///
    /// Each filename keeps only what precedes its first `.`, so
    /// `"data.v2.pdf"` becomes `"data.txt"`. The new collection is named
    /// after `extension`.
    pub fn change_extension(&self, extension: &str) -> Result<Self> {
        let filenames = self
            .filenames
            .iter()
            .map(|filename| format!("{}.{}", base_name(filename), extension))
            .collect();

        Self::new(
            extension,
            filenames,
            self.dir.clone(),
            self.sub_strings.clone(),
        )
        .map_err(|e| Error::ChangeExtension {
            extension: extension.to_string(),
            source: Box::new(e),
        })
    }

    /// Get the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the filenames in collection order.
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Number of filenames in the collection.
    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    /// Check whether the collection holds no filenames.
    ///
    /// Only a default-constructed collection can be empty.
    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }

    /// Get the source directory.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Get the substrings used to find the filenames.
    pub fn sub_strings(&self) -> &[String] {
        &self.sub_strings
    }

    /// Get the shared extension, taken from the first filename.
    pub fn extension(&self) -> Option<&str> {
        self.filenames.first().and_then(|f| extension_of(f))
    }
}
