//! Filesystem module.
//!
//! Provides:
//! - Directory listing that feeds collection construction
//! - Whole-file reading
//! - Writing bytes under their content-addressed name
//! - Extension validation

pub mod lister;
pub mod naming;
pub mod reader;
pub mod store;

pub use lister::{collect, list_filenames};
pub use naming::sanitize_extension;
pub use reader::file_to_bytes;
pub use store::{ensure_dir, write_content_addressed};
