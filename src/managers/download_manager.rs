//! Download Manager for Tabshell.
//!
//! Tracks each file transfer's lifecycle from the engine's request to a
//! terminal state. The shell only orchestrates: the engine performs the
//! actual transfer and is allowed to write to disk solely after an explicit
//! accept.
//!
//! State machine per session:
//! `Pending -> Declined` (user dismissed the save prompt), or
//! `Pending -> InProgress -> Completed | Cancelled | Failed`.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use uuid::Uuid;

use crate::engine::DownloadHandle;
use crate::types::download::{DownloadSession, DownloadState};
use crate::types::errors::DownloadError;

/// Trait defining download session operations.
pub trait DownloadManagerTrait {
    fn request(&mut self, handle: Box<dyn DownloadHandle>) -> String;
    fn confirm(&mut self, id: &str, path: &str) -> Result<(), DownloadError>;
    fn decline(&mut self, id: &str) -> Result<(), DownloadError>;
    fn record_progress(&mut self, id: &str, received: u64, total: Option<u64>);
    fn mark_completed(&mut self, id: &str);
    fn mark_cancelled(&mut self, id: &str);
    fn mark_failed(&mut self, id: &str, reason: &str);
    fn progress_percent(&self, id: &str) -> Option<u8>;
    fn get(&self, id: &str) -> Option<&DownloadSession>;
    fn list(&self) -> Vec<&DownloadSession>;
}

/// In-memory download manager.
///
/// Engine handles are held only while a session is `Pending`; both decisions
/// release the handle after telling the engine, so nothing keeps the engine
/// side alive past the user's choice.
pub struct DownloadManager {
    sessions: Vec<DownloadSession>,
    handles: HashMap<String, Box<dyn DownloadHandle>>,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            handles: HashMap::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Result<usize, DownloadError> {
        self.sessions
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))
    }

    fn finish(&mut self, id: &str, state: DownloadState) {
        let Some(session) = self.sessions.iter_mut().find(|d| d.id == id) else {
            return;
        };
        // Terminal transitions only leave InProgress; a stale engine event
        // after termination must not revive the session.
        if session.state != DownloadState::InProgress {
            return;
        }
        debug!(download_id = %id, state = ?state, "download finished");
        session.state = state;
        session.completed_at = Some(Self::now());
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadManagerTrait for DownloadManager {
    /// Register an engine-requested download as a new `Pending` session.
    /// Returns the session ID.
    fn request(&mut self, handle: Box<dyn DownloadHandle>) -> String {
        let id = Uuid::new_v4().to_string();
        let session = DownloadSession {
            id: id.clone(),
            suggested_path: handle.suggested_path(),
            path: None,
            received: 0,
            total: None,
            state: DownloadState::Pending,
            started_at: Self::now(),
            completed_at: None,
        };
        debug!(download_id = %id, suggested = %session.suggested_path, "download requested");
        self.sessions.push(session);
        self.handles.insert(id.clone(), handle);
        id
    }

    /// User confirmed a save location: `Pending -> InProgress`.
    ///
    /// Records the destination, then tells the engine the path and accepts.
    fn confirm(&mut self, id: &str, path: &str) -> Result<(), DownloadError> {
        let idx = self.find_index(id)?;
        if self.sessions[idx].state != DownloadState::Pending {
            return Err(DownloadError::NotPending(id.to_string()));
        }

        self.sessions[idx].path = Some(path.to_string());
        self.sessions[idx].state = DownloadState::InProgress;

        // The handle is guaranteed present while Pending.
        if let Some(mut handle) = self.handles.remove(id) {
            handle.set_path(path);
            handle.accept();
        }
        debug!(download_id = %id, path = %path, "download accepted");
        Ok(())
    }

    /// User dismissed the save prompt: `Pending -> Declined`.
    ///
    /// The engine is told explicitly via `reject()`; it must never be left
    /// waiting on an undecided download.
    fn decline(&mut self, id: &str) -> Result<(), DownloadError> {
        let idx = self.find_index(id)?;
        if self.sessions[idx].state != DownloadState::Pending {
            return Err(DownloadError::NotPending(id.to_string()));
        }

        self.sessions[idx].state = DownloadState::Declined;
        self.sessions[idx].completed_at = Some(Self::now());

        if let Some(mut handle) = self.handles.remove(id) {
            handle.reject();
        }
        debug!(download_id = %id, "download declined");
        Ok(())
    }

    /// Engine progress event.
    ///
    /// Applied only while `InProgress`; events for unknown, pending or
    /// terminated sessions are dropped. A received count lower than the
    /// current one is ignored so the byte count stays monotonic.
    fn record_progress(&mut self, id: &str, received: u64, total: Option<u64>) {
        let Some(session) = self.sessions.iter_mut().find(|d| d.id == id) else {
            return;
        };
        if session.state != DownloadState::InProgress {
            return;
        }
        if received >= session.received {
            session.received = received;
        }
        if total.is_some() {
            session.total = total;
        }
    }

    /// Engine signaled completion: `InProgress -> Completed`.
    fn mark_completed(&mut self, id: &str) {
        self.finish(id, DownloadState::Completed);
    }

    /// Engine cancelled the transfer: `InProgress -> Cancelled`.
    fn mark_cancelled(&mut self, id: &str) {
        self.finish(id, DownloadState::Cancelled);
    }

    /// Engine reported a transfer failure: `InProgress -> Failed`.
    fn mark_failed(&mut self, id: &str, reason: &str) {
        self.finish(id, DownloadState::Failed(reason.to_string()));
    }

    /// Progress as a whole percentage, capped at 100.
    ///
    /// An unknown or zero total reports 0 — never a division by an unknown
    /// quantity. `None` only for unknown ids.
    fn progress_percent(&self, id: &str) -> Option<u8> {
        let session = self.sessions.iter().find(|d| d.id == id)?;
        let percent = match session.total {
            Some(total) if total > 0 => {
                ((session.received.saturating_mul(100)) / total).min(100) as u8
            }
            _ => 0,
        };
        Some(percent)
    }

    fn get(&self, id: &str) -> Option<&DownloadSession> {
        self.sessions.iter().find(|d| d.id == id)
    }

    fn list(&self) -> Vec<&DownloadSession> {
        self.sessions.iter().collect()
    }
}
