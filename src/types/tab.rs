use serde::{Deserialize, Serialize};

/// Last-known state of one browsing session.
///
/// `url` and `title` are written only by the engine callbacks routed through
/// the tab manager; UI code never mutates them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Stable opaque id — never a positional index.
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}
