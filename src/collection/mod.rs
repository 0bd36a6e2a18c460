//! Collection module.
//!
//! Provides:
//! - Same-extension filename collections tied to a source directory
//! - Extension parsing on the first `.` of a filename
//! - A name-keyed index over several collections

pub mod extension;
pub mod index;
pub mod set;

pub use extension::{base_name, extension_of};
pub use index::CollectionIndex;
pub use set::Collection;
