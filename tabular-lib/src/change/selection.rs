//! Selection set of item keys.
//!
//! Selection uses string keys so that it stays stable when the items are
//! filtered, sorted, paged or replaced. Keys of items that no longer exist
//! are kept.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

/// Set of selected item keys.
///
/// Every operation returns a new set and leaves `self` untouched, so a set
/// held by a [`crate::Parameters`] value is never changed in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the selected keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns a copy with `id` added if absent, or removed if present.
    pub fn toggled(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self { ids }
    }

    /// Returns a copy with all of `keys` added.
    pub fn with_all(&self, keys: impl IntoIterator<Item = String>) -> Self {
        let mut ids = self.ids.clone();
        ids.extend(keys);
        Self { ids }
    }

    /// Returns a copy with all of `keys` removed.
    pub fn without_all(&self, keys: impl IntoIterator<Item = String>) -> Self {
        let mut ids = self.ids.clone();
        for key in keys {
            ids.remove(&key);
        }
        Self { ids }
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
