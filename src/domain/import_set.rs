//! Result mapping produced by one resolution run.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::domain::{ImportError, RealmImport};

/// Mapping from source identifier (file name or terminal URL segment) to its
/// decoded, checksummed realm document.
///
/// Keys are unique; inserting a duplicate is an error naming the key. With a
/// plain directory scan that cannot happen, but the guard protects merged or
/// virtual sources. Iteration order is sorted by key regardless of the order
/// sources were processed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSet {
    imports: BTreeMap<String, RealmImport>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one document under `name`, rejecting duplicate keys.
    pub fn insert(&mut self, name: String, import: RealmImport) -> Result<(), ImportError> {
        match self.imports.entry(name) {
            btree_map::Entry::Occupied(entry) => {
                Err(ImportError::DuplicateKey(entry.key().clone()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(import);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RealmImport> {
        self.imports.get(name)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RealmImport)> {
        self.imports.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.imports.keys()
    }
}

impl IntoIterator for ImportSet {
    type Item = (String, RealmImport);
    type IntoIter = btree_map::IntoIter<String, RealmImport>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.into_iter()
    }
}
