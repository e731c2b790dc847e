//! Tabshell — a minimal tabbed browser shell around a pluggable rendering
//! engine.
//!
//! Entry point: runs an interactive console demo against the scripted
//! engine, walking every shell component. A real deployment swaps the
//! scripted engine for the platform's rendering engine and drives the same
//! `ShellController` from its window chrome.

use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;

use tabshell::app::App;
use tabshell::engine::scripted::{ScriptedDownload, ScriptedEngine};
use tabshell::managers::download_manager::DownloadManagerTrait;
use tabshell::managers::tab_manager::TabManagerTrait;
use tabshell::shell::controller::ShellController;
use tabshell::shell::ShellEvent;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    println!("Tabshell v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!("Tabbed browser shell driving a scripted rendering engine");
    println!();

    let engine = ScriptedEngine::new();
    let app = App::bootstrap(Box::new(engine.clone()));
    let mut shell = ShellController::new(app);

    let events: Rc<RefCell<Vec<ShellEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    shell.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    shell.startup();

    demo_tabs(&mut shell);
    demo_navigation(&mut shell);
    demo_bookmarks(&mut shell);
    demo_download_accept(&mut shell);
    demo_download_decline(&mut shell);

    println!("Shell published {} events; engine spawned {} sessions", events.borrow().len(), engine.session_count());
    println!("All components demonstrated.");
}

fn section(name: &str) {
    println!("--- {} ---", name);
}

fn demo_tabs(shell: &mut ShellController) {
    section("Tabs");
    let first = shell.app().tab_manager.active_tab_id().unwrap().to_string();
    let second = shell.open_tab(Some("https://example.com"));
    println!("  {} tabs open, active: {}", shell.app().tab_manager.tab_count(), second);

    shell.close_tab(&first);
    println!("  closed first tab, {} remaining", shell.app().tab_manager.tab_count());

    // Closing the last tab is ignored
    let last = shell.app().tab_manager.active_tab_id().unwrap().to_string();
    shell.close_tab(&last);
    println!("  close of last tab ignored, {} remaining", shell.app().tab_manager.tab_count());
    println!();
}

fn demo_navigation(shell: &mut ShellController) {
    section("Navigation & address bar");
    shell.navigate_active("example.org").unwrap();
    let tab_id = shell.app().tab_manager.active_tab_id().unwrap().to_string();
    // The scripted engine commits immediately; echo its callbacks back in.
    shell.on_url_changed(&tab_id, "https://example.org");
    shell.on_title_changed(&tab_id, "Example Domain");
    println!("  address bar: {}", shell.address_text());
    println!("  tab title:   {}", shell.app().tab_manager.get_active_tab().unwrap().title);
    println!();
}

fn demo_bookmarks(shell: &mut ShellController) {
    section("Bookmarks");
    shell.bookmark_active_page();
    for (i, bookmark) in shell.bookmarks().iter().enumerate() {
        println!("  [{}] {} - {}", i, bookmark.title, bookmark.url);
    }
    let opened = shell.open_bookmark(0).unwrap();
    println!("  opened bookmark 0 in new tab {}", opened);
    println!();
}

fn demo_download_accept(shell: &mut ShellController) {
    section("Download (accepted)");
    let handle = ScriptedDownload::new("file.zip");
    shell.on_download_requested(Box::new(handle.clone()));
    let id = shell.app().download_manager.list()[0].id.clone();

    shell.confirm_download(&id, "/tmp/downloads/file.zip").unwrap();
    shell.on_download_progress(&id, 200, Some(1000));
    shell.on_download_progress(&id, 1000, Some(1000));
    shell.on_download_finished(&id);

    let session = shell.app().download_manager.get(&id).unwrap();
    println!("  state: {:?}, saved to {}", session.state, session.path.as_deref().unwrap());
    println!("  engine saw accept={} path={:?}", handle.state().borrow().accepted, handle.state().borrow().path);
    println!();
}

fn demo_download_decline(shell: &mut ShellController) {
    section("Download (declined)");
    let handle = ScriptedDownload::new("other.iso");
    shell.on_download_requested(Box::new(handle.clone()));
    let id = shell.app().download_manager.list().last().unwrap().id.clone();

    shell.decline_download(&id).unwrap();
    let session = shell.app().download_manager.get(&id).unwrap();
    println!("  state: {:?}, engine saw reject={}", session.state, handle.state().borrow().rejected);
    println!();
}
