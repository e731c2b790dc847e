//! Shell Controller for Tabshell.
//!
//! Top-level coordinator: toolbar and address-bar actions come in as method
//! calls, engine callbacks come in through the `on_*` entry points, and every
//! observable state change goes back out as a `ShellEvent`. All of it runs on
//! one logical thread; no operation blocks or awaits the engine.
//!
//! Subscribers receive `&ShellEvent` without access to the controller, so a
//! callback can never re-enter and mutate the tab sequence mid-iteration.

use tracing::{debug, info};

use crate::app::App;
use crate::engine::DownloadHandle;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::managers::download_manager::DownloadManagerTrait;
use crate::managers::tab_manager::TabManagerTrait;
use crate::platform;
use crate::shell::ShellEvent;
use crate::types::bookmark::Bookmark;
use crate::types::download::DownloadState;
use crate::types::errors::{BookmarkError, DownloadError, TabError};

/// Coordinates the application context and publishes shell events.
pub struct ShellController {
    app: App,
    subscribers: Vec<Box<dyn FnMut(&ShellEvent)>>,
}

impl ShellController {
    pub fn new(app: App) -> Self {
        Self {
            app,
            subscribers: Vec::new(),
        }
    }

    /// Registers a presentation-layer subscriber for shell events.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ShellEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read access to the application context, for rendering tab labels,
    /// download lists and the bookmark picker.
    pub fn app(&self) -> &App {
        &self.app
    }

    fn emit(&mut self, event: ShellEvent) {
        debug!(?event, "shell event");
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    fn emit_address(&mut self) {
        let text = self.address_text();
        self.emit(ShellEvent::AddressChanged { text });
    }

    /// Opens the initial home tab. Establishes the at-least-one-tab
    /// invariant; the managers themselves start empty.
    pub fn startup(&mut self) {
        info!(home_url = %self.app.settings.home_url, "shell starting");
        if self.app.tab_manager.tab_count() == 0 {
            self.open_tab(None);
        }
    }

    // === Tabs & navigation ===

    /// Text the address bar must display: the active tab's URL, exactly.
    pub fn address_text(&self) -> String {
        self.app
            .tab_manager
            .get_active_tab()
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }

    /// Opens a new tab (home URL when `url` is `None`) and makes it active.
    /// Returns the new tab's ID.
    pub fn open_tab(&mut self, url: Option<&str>) -> String {
        let tab_id = self.app.tab_manager.create_tab(url);
        self.emit(ShellEvent::TabOpened {
            tab_id: tab_id.clone(),
        });
        self.emit(ShellEvent::ActiveTabChanged {
            tab_id: tab_id.clone(),
        });
        self.emit_address();
        tab_id
    }

    /// Closes a tab. Ignored for the last remaining tab and for unknown ids;
    /// see `TabManager::close_tab` for the reselection rule.
    pub fn close_tab(&mut self, tab_id: &str) {
        let before = self.app.tab_manager.tab_count();
        let active_before = self
            .app
            .tab_manager
            .active_tab_id()
            .map(|id| id.to_string());

        self.app.tab_manager.close_tab(tab_id);

        if self.app.tab_manager.tab_count() == before {
            return;
        }
        self.emit(ShellEvent::TabClosed {
            tab_id: tab_id.to_string(),
        });

        let active_after = self
            .app
            .tab_manager
            .active_tab_id()
            .map(|id| id.to_string());
        if active_after != active_before {
            if let Some(active) = active_after {
                self.emit(ShellEvent::ActiveTabChanged { tab_id: active });
            }
            self.emit_address();
        }
    }

    /// Switches the active tab.
    pub fn select_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.app.tab_manager.switch_tab(tab_id)?;
        self.emit(ShellEvent::ActiveTabChanged {
            tab_id: tab_id.to_string(),
        });
        self.emit_address();
        Ok(())
    }

    /// Navigates the active tab to the given raw address-bar input.
    ///
    /// The address bar is not updated here; the new URL arrives back through
    /// `on_url_changed` once the engine commits the navigation.
    pub fn navigate_active(&mut self, raw_input: &str) -> Result<(), TabError> {
        let tab_id = self
            .app
            .tab_manager
            .active_tab_id()
            .map(|id| id.to_string())
            .ok_or_else(|| TabError::NotFound("<no active tab>".to_string()))?;
        self.app.tab_manager.navigate(&tab_id, raw_input)
    }

    // === Bookmarks ===

    /// Snapshots the active tab as a bookmark: the engine-reported URL plus
    /// the last-known title.
    pub fn bookmark_active_page(&mut self) {
        let Some(tab) = self.app.tab_manager.get_active_tab() else {
            return;
        };
        let title = tab.title.clone();
        let tab_id = tab.id.clone();
        let url = self
            .app
            .tab_manager
            .session_url(&tab_id)
            .unwrap_or_else(|| tab.url.clone());
        self.app.bookmark_store.add(&title, &url);
    }

    /// Bookmark entries for the picker, in insertion order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.app.bookmark_store.list()
    }

    /// Opens the selected bookmark in a new tab. Returns the new tab's ID.
    pub fn open_bookmark(&mut self, index: usize) -> Result<String, BookmarkError> {
        let url = self.app.bookmark_store.resolve(index)?.to_string();
        Ok(self.open_tab(Some(&url)))
    }

    // === Downloads ===

    /// User confirmed the save prompt with a destination path.
    pub fn confirm_download(&mut self, download_id: &str, path: &str) -> Result<(), DownloadError> {
        self.app.download_manager.confirm(download_id, path)?;
        self.emit(ShellEvent::DownloadStarted {
            download_id: download_id.to_string(),
        });
        Ok(())
    }

    /// User dismissed the save prompt. The engine receives an explicit
    /// reject and no progress UI is ever shown for this session.
    pub fn decline_download(&mut self, download_id: &str) -> Result<(), DownloadError> {
        self.app.download_manager.decline(download_id)
    }

    // === Engine callbacks ===
    // Delivered in engine order on the shell thread; events referencing
    // closed tabs or settled downloads fall through as no-ops.

    /// A session's URL changed.
    pub fn on_url_changed(&mut self, tab_id: &str, url: &str) {
        self.app.tab_manager.handle_url_changed(tab_id, url);
        if self.app.tab_manager.active_tab_id() == Some(tab_id) {
            self.emit_address();
        }
    }

    /// A session's title changed.
    pub fn on_title_changed(&mut self, tab_id: &str, title: &str) {
        self.app.tab_manager.handle_title_changed(tab_id, title);
        if self.app.tab_manager.get_tab(tab_id).is_some() {
            self.emit(ShellEvent::TabTitleChanged {
                tab_id: tab_id.to_string(),
                title: title.to_string(),
            });
        }
    }

    /// The engine has a download waiting on the user's decision.
    ///
    /// The published prompt path is the engine's suggestion, seeded with the
    /// configured (or platform) download directory when the engine offers
    /// only a bare filename.
    pub fn on_download_requested(&mut self, handle: Box<dyn DownloadHandle>) {
        let download_id = self.app.download_manager.request(handle);
        let suggested_path = self
            .app
            .download_manager
            .get(&download_id)
            .map(|d| self.seed_save_path(&d.suggested_path))
            .unwrap_or_default();
        self.emit(ShellEvent::DownloadPending {
            download_id,
            suggested_path,
        });
    }

    fn seed_save_path(&self, suggested: &str) -> String {
        if suggested.contains('/') || suggested.contains('\\') {
            return suggested.to_string();
        }
        let dir = self.app.settings.download_dir.clone().unwrap_or_else(|| {
            platform::get_download_dir().to_string_lossy().to_string()
        });
        format!("{}/{}", dir.trim_end_matches('/'), suggested)
    }

    /// Engine progress event for an accepted download.
    pub fn on_download_progress(&mut self, download_id: &str, received: u64, total: Option<u64>) {
        self.app
            .download_manager
            .record_progress(download_id, received, total);
        // Only live sessions report progress; a stale event after
        // termination stays invisible to the UI.
        let in_progress = matches!(
            self.app.download_manager.get(download_id).map(|d| &d.state),
            Some(DownloadState::InProgress)
        );
        if in_progress {
            if let Some(percent) = self.app.download_manager.progress_percent(download_id) {
                self.emit(ShellEvent::DownloadProgress {
                    download_id: download_id.to_string(),
                    percent,
                });
            }
        }
    }

    /// Engine signaled completion.
    pub fn on_download_finished(&mut self, download_id: &str) {
        self.settle_download(download_id, |mgr, id| mgr.mark_completed(id));
    }

    /// Engine cancelled the transfer.
    pub fn on_download_cancelled(&mut self, download_id: &str) {
        self.settle_download(download_id, |mgr, id| mgr.mark_cancelled(id));
    }

    /// Engine reported a transfer failure.
    pub fn on_download_failed(&mut self, download_id: &str, reason: &str) {
        self.settle_download(download_id, |mgr, id| mgr.mark_failed(id, reason));
    }

    /// Applies a terminal transition and, when it actually fired, publishes
    /// the single close-and-report event with the concrete destination path.
    fn settle_download(
        &mut self,
        download_id: &str,
        transition: impl FnOnce(&mut dyn DownloadManagerTrait, &str),
    ) {
        let was_in_progress = matches!(
            self.app.download_manager.get(download_id).map(|d| &d.state),
            Some(DownloadState::InProgress)
        );
        transition(&mut self.app.download_manager, download_id);
        if !was_in_progress {
            return;
        }
        if let Some(session) = self.app.download_manager.get(download_id) {
            let event = ShellEvent::DownloadFinished {
                download_id: download_id.to_string(),
                state: session.state.clone(),
                path: session.path.clone(),
            };
            self.emit(event);
        }
    }
}
