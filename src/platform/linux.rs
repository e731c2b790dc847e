// Tabshell platform paths for Linux
// Config:    ~/.config/tabshell
// Downloads: ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the configuration directory for Tabshell on Linux.
/// Uses `$XDG_CONFIG_HOME/tabshell` if set, otherwise `~/.config/tabshell`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("tabshell")
    } else {
        home_dir().join(".config").join("tabshell")
    }
}

/// Returns the default download directory on Linux.
/// Uses `$XDG_DOWNLOAD_DIR` if set, otherwise `~/Downloads`.
pub fn get_download_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DOWNLOAD_DIR") {
        PathBuf::from(xdg)
    } else {
        home_dir().join("Downloads")
    }
}
