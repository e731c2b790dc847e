//! Bookmark Store for Tabshell.
//!
//! An append-only, in-memory ordered list of (title, url) snapshots.
//! Duplicates are allowed and there is no delete operation; neither the list
//! nor anything else in the shell outlives the process.

use tracing::debug;

use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    fn add(&mut self, title: &str, url: &str);
    fn list(&self) -> &[Bookmark];
    fn resolve(&self, index: usize) -> Result<&str, BookmarkError>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory bookmark store preserving insertion order.
#[derive(Default)]
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Append a snapshot of the given title and url. Never fails.
    fn add(&mut self, title: &str, url: &str) {
        debug!(title = %title, url = %url, "bookmark added");
        self.entries.push(Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        });
    }

    /// Entries in insertion order.
    fn list(&self) -> &[Bookmark] {
        &self.entries
    }

    /// URL behind a picker selection.
    ///
    /// Selections are validated against the current list, so a stale index
    /// surfaces as `NotFound` rather than a wrong entry or a panic.
    fn resolve(&self, index: usize) -> Result<&str, BookmarkError> {
        self.entries
            .get(index)
            .map(|b| b.url.as_str())
            .ok_or(BookmarkError::NotFound(index))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
