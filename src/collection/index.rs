//! Name-keyed index over several collections.

use std::collections::HashMap;

use crate::collection::set::Collection;
use crate::error::{Error, Result};

/// A set of collections keyed by collection name, each possibly holding a
/// different extension.
///
/// Enumeration follows the order in which each name first appeared in the
/// input. When a name appears more than once the later collection replaces
/// the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    /// Collections in first-appearance order of their names.
    entries: Vec<Collection>,

    /// Collection name -> position in `entries`.
    positions: HashMap<String, usize>,
}

impl CollectionIndex {
    /// Build an index from collections, last write wins on duplicate names.
    ///
    /// Fails if any collection left after deduplication has no filenames.
    /// A collection overwritten by a later one with the same name is not
    /// checked.
    pub fn new<I>(collections: I) -> Result<Self>
    where
        I: IntoIterator<Item = Collection>,
    {
        let mut entries: Vec<Collection> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for collection in collections {
            match positions.get(collection.name()).copied() {
                Some(pos) => entries[pos] = collection,
                None => {
                    positions.insert(collection.name().to_string(), entries.len());
                    entries.push(collection);
                }
            }
        }

        if let Some(empty) = entries.iter().find(|c| c.is_empty()) {
            return Err(Error::EmptyCollection {
                name: empty.name().to_string(),
            });
        }

        Ok(Self { entries, positions })
    }

    /// Look up a collection by name.
    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.positions.get(name).map(|&pos| &self.entries[pos])
    }

    /// Check whether a collection with this name is indexed.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Collection names, in index order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name())
    }

    /// Collections, in index order.
    pub fn values(&self) -> impl Iterator<Item = &Collection> {
        self.entries.iter()
    }

    /// `(name, collection)` pairs, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Collection)> {
        self.entries.iter().map(|c| (c.name(), c))
    }

    /// Number of indexed collections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index holds no collections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CollectionIndex {
    type Item = &'a Collection;
    type IntoIter = std::slice::Iter<'a, Collection>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
