//! Application context for Tabshell.
//!
//! One explicitly owned struct holding every manager plus the loaded
//! settings. The shell controller holds it; nothing in the crate reaches for
//! process-global state.

use crate::engine::RenderEngine;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::download_manager::DownloadManager;
use crate::managers::tab_manager::TabManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::settings::ShellSettings;

/// Central application context: settings plus the three core managers.
pub struct App {
    pub settings: ShellSettings,
    pub tab_manager: TabManager,
    pub download_manager: DownloadManager,
    pub bookmark_store: BookmarkStore,
}

impl App {
    /// Creates the context around the given engine and settings.
    pub fn new(engine: Box<dyn RenderEngine>, settings: ShellSettings) -> Self {
        let tab_manager = TabManager::new(engine, &settings.home_url);
        Self {
            settings,
            tab_manager,
            download_manager: DownloadManager::new(),
            bookmark_store: BookmarkStore::new(),
        }
    }

    /// Creates the context with settings loaded from the platform config
    /// path. A missing or unreadable config file falls back to defaults.
    pub fn bootstrap(engine: Box<dyn RenderEngine>) -> Self {
        let mut settings_engine = SettingsEngine::new(None);
        let settings = settings_engine.load().unwrap_or_default();
        Self::new(engine, settings)
    }
}
