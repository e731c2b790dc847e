// Tabshell platform paths for Windows
// Config:    %APPDATA%/Tabshell
// Downloads: %USERPROFILE%/Downloads

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Tabshell on Windows.
/// Uses `%APPDATA%/Tabshell`, falling back to the user profile.
pub fn get_config_dir() -> PathBuf {
    if let Ok(appdata) = env::var("APPDATA") {
        PathBuf::from(appdata).join("Tabshell")
    } else {
        let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
        PathBuf::from(profile).join("Tabshell")
    }
}

/// Returns the default download directory on Windows.
pub fn get_download_dir() -> PathBuf {
    let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
    PathBuf::from(profile).join("Downloads")
}
