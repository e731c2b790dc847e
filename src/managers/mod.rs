// Tabshell state managers
// Managers handle stateful operations: tabs, downloads, bookmarks.

pub mod bookmark_store;
pub mod download_manager;
pub mod tab_manager;
