//! Content-addressed naming module.
//!
//! Provides:
//! - Pluggable content hashing (MD5 by default)
//! - Destination path derivation from file content

pub mod content;
pub mod hasher;

pub use content::{derive_name, ContentNamer};
pub use hasher::{ContentHasher, Md5Hasher};
