//! Rendering engine capability boundary.
//!
//! The shell never implements rendering, networking or script execution; it
//! talks to whatever engine the platform provides through these traits. The
//! engine delivers its callbacks (url/title changes, download events) on the
//! shell's single logical thread, via the entry points on `ShellController`.
//!
//! `scripted` holds an in-memory engine used by the demo binary and tests.

pub mod scripted;

/// Factory for browsing sessions. One implementation per platform engine.
pub trait RenderEngine {
    /// Spawns a new browsing session already pointed at `url`.
    fn new_session(&self, url: &str) -> Box<dyn EngineSession>;
}

/// One live browsing session. Owned exclusively by its tab; dropping the
/// session releases the underlying engine resources.
pub trait EngineSession {
    /// Instructs the engine to load `url`. Returns immediately; the result
    /// arrives later through the url/title callbacks.
    fn load(&mut self, url: &str);
    /// URL the engine currently reports for this session.
    fn current_url(&self) -> String;
    /// Title the engine currently reports for this session.
    fn current_title(&self) -> String;
}

/// Engine-side handle for one pending download.
///
/// The engine only starts writing to disk after an explicit `accept()`;
/// a dismissed save prompt must therefore end in `reject()`, never in
/// silently dropping the handle.
pub trait DownloadHandle {
    /// Path/filename the engine proposes for the save prompt.
    fn suggested_path(&self) -> String;
    /// Sets the destination path. Must be called before `accept()`.
    fn set_path(&mut self, path: &str);
    /// Tells the engine to begin the transfer.
    fn accept(&mut self);
    /// Tells the engine the download was refused.
    fn reject(&mut self);
}
