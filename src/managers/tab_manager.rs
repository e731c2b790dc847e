use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use uuid::Uuid;

use crate::engine::{EngineSession, RenderEngine};
use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>) -> String;
    fn close_tab(&mut self, tab_id: &str);
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn navigate(&mut self, tab_id: &str, raw_input: &str) -> Result<(), TabError>;
    fn handle_url_changed(&mut self, tab_id: &str, url: &str);
    fn handle_title_changed(&mut self, tab_id: &str, title: &str);
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> Option<&str>;
    fn tab_count(&self) -> usize;
}

/// Turns raw address-bar input into a loadable URL.
///
/// Trimmed-empty input falls back to the home URL. Input without an `http`
/// prefix (covers both http and https) gets `https://` prepended. This is a
/// heuristic, not validation; whatever comes out is handed to the engine
/// unchecked and any load failure is the engine's to render.
pub fn normalize_url(raw_input: &str, home_url: &str) -> String {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return home_url.to_string();
    }
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// In-memory tab manager.
///
/// Holds the ordered tab sequence, the active-tab pointer, and one engine
/// session per tab. Sessions live in a side map keyed by tab id so the `Tab`
/// records stay plain data; removing a tab drops its session and with it the
/// engine resources.
pub struct TabManager {
    engine: Box<dyn RenderEngine>,
    tabs: Vec<Tab>,
    sessions: HashMap<String, Box<dyn EngineSession>>,
    active_tab_id: Option<String>,
    home_url: String,
}

impl TabManager {
    pub fn new(engine: Box<dyn RenderEngine>, home_url: &str) -> Self {
        Self {
            engine,
            tabs: Vec::new(),
            sessions: HashMap::new(),
            active_tab_id: None,
            home_url: home_url.to_string(),
        }
    }

    /// Engine-reported URL for a tab, straight from its session.
    pub fn session_url(&self, tab_id: &str) -> Option<String> {
        self.sessions.get(tab_id).map(|s| s.current_url())
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab and make it active. Returns the new tab's ID.
    ///
    /// Empty or missing input falls back to the home URL; everything else
    /// goes through the same normalization as address-bar navigation.
    fn create_tab(&mut self, url: Option<&str>) -> String {
        let target = normalize_url(url.unwrap_or(""), &self.home_url);
        let id = Uuid::new_v4().to_string();
        let session = self.engine.new_session(&target);
        let tab = Tab {
            id: id.clone(),
            url: target,
            title: "New Tab".to_string(),
            created_at: Self::now(),
        };
        debug!(tab_id = %id, url = %tab.url, "tab created");
        self.tabs.push(tab);
        self.sessions.insert(id.clone(), session);
        self.active_tab_id = Some(id.clone());
        id
    }

    /// Close a tab and drop its engine session.
    ///
    /// The last remaining tab never closes: the call is ignored. Unknown or
    /// already-closed ids are ignored too, so a double close is a no-op both
    /// times. If the active tab closed, the tab that now occupies its index
    /// (the right-hand neighbor) becomes active, or the last tab when the
    /// closed tab was rightmost. Callers never observe a dangling active id.
    fn close_tab(&mut self, tab_id: &str) {
        let Some(tab_idx) = self.find_tab_index(tab_id) else {
            return;
        };
        if self.tabs.len() == 1 {
            debug!(tab_id = %tab_id, "ignoring close of last tab");
            return;
        }

        let need_switch = self.active_tab_id.as_deref() == Some(tab_id);

        self.tabs.remove(tab_idx);
        // Dropping the session releases the engine side; any callback the
        // engine still delivers for this tab hits the unknown-id no-op path.
        self.sessions.remove(tab_id);
        debug!(tab_id = %tab_id, remaining = self.tabs.len(), "tab closed");

        if need_switch {
            let new_idx = tab_idx.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[new_idx].id.clone());
        }
    }

    /// Switch the active tab to the given tab_id.
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    /// Normalize `raw_input` and tell the tab's session to load it.
    ///
    /// Does not touch the tab's stored URL; that changes only when the
    /// engine reports back through `handle_url_changed`.
    fn navigate(&mut self, tab_id: &str, raw_input: &str) -> Result<(), TabError> {
        let target = normalize_url(raw_input, &self.home_url);
        let session = self
            .sessions
            .get_mut(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        debug!(tab_id = %tab_id, url = %target, "navigating");
        session.load(&target);
        Ok(())
    }

    /// Engine callback: the session's URL changed.
    ///
    /// The only write path for `Tab::url`. Unknown ids (tab closed while the
    /// event was in flight) are silently dropped.
    fn handle_url_changed(&mut self, tab_id: &str, url: &str) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) {
            tab.url = url.to_string();
        }
    }

    /// Engine callback: the session's title changed.
    fn handle_title_changed(&mut self, tab_id: &str, title: &str) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) {
            tab.title = title.to_string();
        }
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().collect()
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
