//! Filename Collections - validated filename groups and content-addressed naming
//!
//! This library keeps track of filenames collected from directories and
//! derives content-addressed paths for artifacts written to disk.
//!
//! # Features
//!
//! - Same-extension filename collections with validation
//! - Extension changes producing new collections
//! - Name-keyed collection index (last write wins on duplicate names)
//! - Content-addressed path derivation with a pluggable hasher
//! - Directory listing, file reading and content-addressed writing
//! - TOML configuration of sources and output naming
//!
//! The "extension" of a filename is the segment after its first `.`, so
//! `"data.v2.pdf"` belongs with other `"v2"` files. See
//! [`collection::extension`].
//!
//! # Example
//!
//! ```
//! use filename_collections::{Collection, CollectionIndex, ContentNamer};
//!
//! let pdfs = Collection::new(
//!     "pdf",
//!     vec!["a.pdf".to_string(), "b.pdf".to_string()],
//!     "/tmp",
//!     vec![],
//! )?;
//! let txts = pdfs.change_extension("txt")?;
//! assert_eq!(txts.filenames(), ["a.txt", "b.txt"]);
//!
//! let index = CollectionIndex::new([pdfs, txts])?;
//! assert!(index.contains("txt"));
//!
//! let namer = ContentNamer::md5("/out", "bin");
//! assert_eq!(
//!     namer.name_for(b"hello")?,
//!     "/out/5d41402abc4b2a76b9719d911017c592.bin"
//! );
//! # Ok::<(), filename_collections::Error>(())
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod naming;

// Re-exports for convenience
pub use collection::{Collection, CollectionIndex};
pub use config::{validate_config, Config};
pub use error::{Error, Result};
pub use naming::{derive_name, ContentHasher, ContentNamer, Md5Hasher};
