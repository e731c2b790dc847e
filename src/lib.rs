//! Tabshell — a minimal tabbed browser shell around a pluggable rendering
//! engine.
//!
//! The crate orchestrates tabs, navigation, downloads and bookmarks; page
//! rendering itself lives behind the `engine` traits and is supplied by the
//! platform. This library crate exposes all modules for use by the binary
//! and integration tests.

pub mod app;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod services;
pub mod shell;
pub mod types;
