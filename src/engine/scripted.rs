//! Scripted in-memory engine.
//!
//! Stands in for a real rendering engine in the demo binary and the test
//! suite: it records every `load()` and decision call, and lets the driver
//! inspect session state through shared handles. All sharing is `Rc`-based;
//! the shell's concurrency model is single-threaded.

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::{DownloadHandle, EngineSession, RenderEngine};

/// Observable state of one scripted session.
#[derive(Debug, Default)]
pub struct ScriptedSessionState {
    /// URL the session was created with.
    pub initial_url: String,
    /// Every URL passed to `load()`, in call order.
    pub loads: Vec<String>,
    pub url: String,
    pub title: String,
    /// Cleared when the owning tab drops the session.
    pub alive: bool,
}

/// Engine that records the sessions it spawns. Cloning shares the record,
/// so a test can keep a probe while the tab manager owns the engine.
#[derive(Clone, Default)]
pub struct ScriptedEngine {
    sessions: Rc<RefCell<Vec<Rc<RefCell<ScriptedSessionState>>>>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles to every session spawned so far, in creation order.
    pub fn sessions(&self) -> Vec<Rc<RefCell<ScriptedSessionState>>> {
        self.sessions.borrow().clone()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.borrow().len()
    }
}

impl RenderEngine for ScriptedEngine {
    fn new_session(&self, url: &str) -> Box<dyn EngineSession> {
        let state = Rc::new(RefCell::new(ScriptedSessionState {
            initial_url: url.to_string(),
            loads: vec![url.to_string()],
            url: url.to_string(),
            title: "New Tab".to_string(),
            alive: true,
        }));
        self.sessions.borrow_mut().push(state.clone());
        Box::new(ScriptedSession { state })
    }
}

struct ScriptedSession {
    state: Rc<RefCell<ScriptedSessionState>>,
}

impl EngineSession for ScriptedSession {
    fn load(&mut self, url: &str) {
        let mut state = self.state.borrow_mut();
        state.loads.push(url.to_string());
        state.url = url.to_string();
    }

    fn current_url(&self) -> String {
        self.state.borrow().url.clone()
    }

    fn current_title(&self) -> String {
        self.state.borrow().title.clone()
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        self.state.borrow_mut().alive = false;
    }
}

/// Observable state of one scripted download handle.
#[derive(Debug, Default)]
pub struct ScriptedDownloadState {
    pub suggested_path: String,
    pub path: Option<String>,
    pub accepted: bool,
    pub rejected: bool,
}

/// Download handle double. Cloning shares the underlying record so the
/// driver can observe `set_path`/`accept`/`reject` after handing the
/// handle to the shell.
#[derive(Clone, Default)]
pub struct ScriptedDownload {
    state: Rc<RefCell<ScriptedDownloadState>>,
}

impl ScriptedDownload {
    pub fn new(suggested_path: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ScriptedDownloadState {
                suggested_path: suggested_path.to_string(),
                ..Default::default()
            })),
        }
    }

    pub fn state(&self) -> Rc<RefCell<ScriptedDownloadState>> {
        self.state.clone()
    }
}

impl DownloadHandle for ScriptedDownload {
    fn suggested_path(&self) -> String {
        self.state.borrow().suggested_path.clone()
    }

    fn set_path(&mut self, path: &str) {
        self.state.borrow_mut().path = Some(path.to_string());
    }

    fn accept(&mut self) {
        self.state.borrow_mut().accepted = true;
    }

    fn reject(&mut self) {
        self.state.borrow_mut().rejected = true;
    }
}
