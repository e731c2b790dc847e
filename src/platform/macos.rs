// Tabshell platform paths for macOS
// Config:    ~/Library/Application Support/Tabshell
// Downloads: ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the configuration directory for Tabshell on macOS.
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Tabshell")
}

/// Returns the default download directory on macOS.
pub fn get_download_dir() -> PathBuf {
    home_dir().join("Downloads")
}
