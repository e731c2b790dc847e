use serde::{Deserialize, Serialize};

fn default_home_url() -> String {
    "https://www.google.com".to_string()
}

/// User-configurable shell settings, persisted as JSON.
///
/// Every field carries a serde default so a partial config file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// URL loaded into new tabs and used as the fallback navigation target.
    #[serde(default = "default_home_url")]
    pub home_url: String,
    /// Directory offered in the save prompt when the engine suggests a bare
    /// filename. `None` means the platform download directory.
    #[serde(default)]
    pub download_dir: Option<String>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            download_dir: None,
        }
    }
}
