//! Property-based tests for Download Session progress handling.
//!
//! For any stream of engine progress events, the received byte count never
//! decreases while in progress, and the reported percentage never divides by
//! an unknown or zero total.

use proptest::prelude::*;

use tabshell::engine::scripted::ScriptedDownload;
use tabshell::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use tabshell::types::download::DownloadState;

fn arb_progress_events() -> impl Strategy<Value = Vec<(u64, Option<u64>)>> {
    prop::collection::vec(
        (any::<u64>(), prop::option::of(0u64..2_000_000)),
        1..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn received_is_monotonic_and_percent_is_bounded(events in arb_progress_events()) {
        let mut mgr = DownloadManager::new();
        let id = mgr.request(Box::new(ScriptedDownload::new("file.bin")));
        mgr.confirm(&id, "/out/file.bin").unwrap();

        let mut last_received = 0u64;
        for (received, total) in events {
            mgr.record_progress(&id, received, total);

            let session = mgr.get(&id).unwrap();
            prop_assert!(session.received >= last_received,
                "received went backwards: {} -> {}", last_received, session.received);
            last_received = session.received;
            prop_assert_eq!(session.state.clone(), DownloadState::InProgress);

            let percent = mgr.progress_percent(&id).unwrap();
            prop_assert!(percent <= 100);
            // Indeterminate or zero totals always report 0%.
            if session.total.unwrap_or(0) == 0 {
                prop_assert_eq!(percent, 0);
            }
        }
    }

    // Progress delivered to a terminated session is dropped entirely.
    #[test]
    fn progress_after_termination_is_ignored(events in arb_progress_events()) {
        let mut mgr = DownloadManager::new();
        let id = mgr.request(Box::new(ScriptedDownload::new("file.bin")));
        mgr.confirm(&id, "/out/file.bin").unwrap();
        mgr.mark_cancelled(&id);

        for (received, total) in events {
            mgr.record_progress(&id, received, total);
        }

        let session = mgr.get(&id).unwrap();
        prop_assert_eq!(session.state.clone(), DownloadState::Cancelled);
        prop_assert_eq!(session.received, 0);
        prop_assert_eq!(session.total, None);
    }
}
