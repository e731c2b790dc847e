use tabshell::engine::scripted::ScriptedDownload;
use tabshell::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use tabshell::types::download::DownloadState;

fn request(mgr: &mut DownloadManager, suggested: &str) -> (String, ScriptedDownload) {
    let handle = ScriptedDownload::new(suggested);
    let id = mgr.request(Box::new(handle.clone()));
    (id, handle)
}

// === Request ===

#[test]
fn test_request_creates_pending_session() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");

    let session = mgr.get(&id).unwrap();
    assert_eq!(session.state, DownloadState::Pending);
    assert_eq!(session.suggested_path, "file.zip");
    assert_eq!(session.path, None);
    assert_eq!(session.received, 0);
    assert_eq!(session.total, None);
}

#[test]
fn test_request_returns_unique_ids() {
    let mut mgr = DownloadManager::new();
    let (id1, _h1) = request(&mut mgr, "a.zip");
    let (id2, _h2) = request(&mut mgr, "b.zip");
    assert_ne!(id1, id2);
    assert_eq!(mgr.list().len(), 2);
}

// === Confirm ===

#[test]
fn test_confirm_transitions_to_in_progress_and_accepts() {
    let mut mgr = DownloadManager::new();
    let (id, handle) = request(&mut mgr, "file.zip");

    mgr.confirm(&id, "/out/file.zip").unwrap();

    let session = mgr.get(&id).unwrap();
    assert_eq!(session.state, DownloadState::InProgress);
    assert_eq!(session.path.as_deref(), Some("/out/file.zip"));

    let engine_side = handle.state();
    assert_eq!(engine_side.borrow().path.as_deref(), Some("/out/file.zip"));
    assert!(engine_side.borrow().accepted);
    assert!(!engine_side.borrow().rejected);
}

#[test]
fn test_confirm_unknown_id_returns_not_found() {
    let mut mgr = DownloadManager::new();
    assert!(mgr.confirm("nonexistent", "/out/x").is_err());
}

#[test]
fn test_confirm_twice_returns_not_pending() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    assert!(mgr.confirm(&id, "/out/other.zip").is_err());
    // The original destination stands.
    assert_eq!(mgr.get(&id).unwrap().path.as_deref(), Some("/out/file.zip"));
}

// === Decline ===

#[test]
fn test_decline_rejects_to_engine() {
    let mut mgr = DownloadManager::new();
    let (id, handle) = request(&mut mgr, "file.zip");

    mgr.decline(&id).unwrap();

    assert_eq!(mgr.get(&id).unwrap().state, DownloadState::Declined);
    assert!(handle.state().borrow().rejected);
    assert!(!handle.state().borrow().accepted);
}

#[test]
fn test_decline_after_confirm_returns_not_pending() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    assert!(mgr.decline(&id).is_err());
}

// === Progress ===

#[test]
fn test_progress_updates_received_and_total() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();

    mgr.record_progress(&id, 200, Some(1000));
    let session = mgr.get(&id).unwrap();
    assert_eq!(session.received, 200);
    assert_eq!(session.total, Some(1000));
    assert_eq!(mgr.progress_percent(&id), Some(20));
}

#[test]
fn test_progress_with_unknown_total_reports_zero_percent() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();

    mgr.record_progress(&id, 5000, None);
    assert_eq!(mgr.progress_percent(&id), Some(0));
}

#[test]
fn test_progress_with_zero_total_reports_zero_percent() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();

    mgr.record_progress(&id, 300, Some(0));
    assert_eq!(mgr.progress_percent(&id), Some(0));
}

#[test]
fn test_progress_ignores_regressions() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();

    mgr.record_progress(&id, 800, Some(1000));
    mgr.record_progress(&id, 300, Some(1000));
    assert_eq!(mgr.get(&id).unwrap().received, 800);
}

#[test]
fn test_progress_before_confirm_is_ignored() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.record_progress(&id, 100, Some(1000));
    assert_eq!(mgr.get(&id).unwrap().received, 0);
}

#[test]
fn test_progress_percent_caps_at_100() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();

    mgr.record_progress(&id, 1500, Some(1000));
    assert_eq!(mgr.progress_percent(&id), Some(100));
}

// === Terminal transitions ===

#[test]
fn test_complete_happy_path() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    mgr.record_progress(&id, 200, Some(1000));
    mgr.record_progress(&id, 1000, Some(1000));
    mgr.mark_completed(&id);

    let session = mgr.get(&id).unwrap();
    assert_eq!(session.state, DownloadState::Completed);
    assert!(session.state.is_terminal());
    assert_eq!(session.path.as_deref(), Some("/out/file.zip"));
    assert!(session.completed_at.is_some());
}

#[test]
fn test_cancel_terminates_without_completion() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    mgr.mark_cancelled(&id);
    assert_eq!(mgr.get(&id).unwrap().state, DownloadState::Cancelled);
}

#[test]
fn test_fail_records_reason() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    mgr.mark_failed(&id, "connection reset");
    assert_eq!(
        mgr.get(&id).unwrap().state,
        DownloadState::Failed("connection reset".to_string())
    );
}

#[test]
fn test_stale_progress_after_cancel_is_ignored() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    mgr.record_progress(&id, 100, Some(1000));
    mgr.mark_cancelled(&id);

    // Delivery order is preserved, so a progress event can still arrive
    // after cancellation; it must not revive the session.
    mgr.record_progress(&id, 900, Some(1000));
    let session = mgr.get(&id).unwrap();
    assert_eq!(session.state, DownloadState::Cancelled);
    assert_eq!(session.received, 100);
}

#[test]
fn test_complete_after_cancel_is_ignored() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.confirm(&id, "/out/file.zip").unwrap();
    mgr.mark_cancelled(&id);
    mgr.mark_completed(&id);
    assert_eq!(mgr.get(&id).unwrap().state, DownloadState::Cancelled);
}

#[test]
fn test_terminal_events_for_pending_session_are_ignored() {
    let mut mgr = DownloadManager::new();
    let (id, _handle) = request(&mut mgr, "file.zip");
    mgr.mark_completed(&id);
    mgr.mark_cancelled(&id);
    assert_eq!(mgr.get(&id).unwrap().state, DownloadState::Pending);
}

#[test]
fn test_events_for_unknown_download_are_noops() {
    let mut mgr = DownloadManager::new();
    mgr.record_progress("nonexistent", 10, Some(100));
    mgr.mark_completed("nonexistent");
    mgr.mark_cancelled("nonexistent");
    mgr.mark_failed("nonexistent", "x");
    assert_eq!(mgr.progress_percent("nonexistent"), None);
    assert!(mgr.list().is_empty());
}
