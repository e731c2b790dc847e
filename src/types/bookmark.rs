use serde::{Deserialize, Serialize};

/// A saved (title, url) pair.
///
/// Captured as a snapshot at the moment of bookmarking. Navigating the tab
/// afterwards does not retroactively change the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}
