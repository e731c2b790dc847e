use serde::{Deserialize, Serialize};

/// Lifecycle state of a file download.
///
/// `Pending` downloads are waiting for the user's save-location decision.
/// `Declined`, `Completed`, `Cancelled` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadState {
    Pending,
    Declined,
    InProgress,
    Completed,
    Cancelled,
    Failed(String),
}

impl DownloadState {
    /// True once the session can no longer change state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DownloadState::Pending | DownloadState::InProgress)
    }
}

/// One tracked file transfer, from engine request to a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadSession {
    pub id: String,
    /// Path/filename proposed by the engine, shown in the save prompt.
    pub suggested_path: String,
    /// Destination chosen by the user; set only on confirmation.
    pub path: Option<String>,
    /// Bytes received so far. Non-decreasing while `InProgress`.
    pub received: u64,
    /// Total byte count, `None` when the engine cannot determine it.
    pub total: Option<u64>,
    pub state: DownloadState,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}
