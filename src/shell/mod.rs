// Tabshell coordination layer
// The controller wires user actions and engine callbacks to the managers and
// publishes typed events for the presentation layer to render.

pub mod controller;

use crate::types::download::DownloadState;

/// State-change notifications published to presentation subscribers.
///
/// Events carry structured data (ids, final states, concrete paths) rather
/// than display strings, so the UI never has to re-parse what it rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    TabOpened {
        tab_id: String,
    },
    TabClosed {
        tab_id: String,
    },
    ActiveTabChanged {
        tab_id: String,
    },
    /// The address bar must now display `text`. Fired whenever the active
    /// tab's URL changes or the active selection itself changes.
    AddressChanged {
        text: String,
    },
    TabTitleChanged {
        tab_id: String,
        title: String,
    },
    /// A download awaits the user's save-location decision.
    DownloadPending {
        download_id: String,
        suggested_path: String,
    },
    /// The user confirmed a path; progress UI should open.
    DownloadStarted {
        download_id: String,
    },
    DownloadProgress {
        download_id: String,
        percent: u8,
    },
    /// The download reached a terminal state. One event covers both closing
    /// the progress UI and reporting the outcome, so no stale progress
    /// dialog can linger between the two.
    DownloadFinished {
        download_id: String,
        state: DownloadState,
        path: Option<String>,
    },
}
