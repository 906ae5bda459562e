/// Process configuration for bookmarkd
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BookmarkError, Result};

/// Lowest port the server accepts (privileged ports are refused)
pub const MIN_PORT: u16 = 1025;

/// Highest port the server accepts (ephemeral range starts above this)
pub const MAX_PORT: u16 = 49151;

/// Root shown when a request names none
pub const DEFAULT_ROOT: &str = "bookmark_bar";

/// Label of the breadcrumb's first element, linking back to the root view
pub const DEFAULT_HOME_LABEL: &str = "[BOOKMARKS]";

/// Configuration built once at startup and passed by reference to the store,
/// the resolver and the server. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkdConfig {
    /// Browser bookmark file (Chromium JSON format)
    pub bookmark_file: PathBuf,

    /// Log destination; `None` logs to stderr
    pub log_file: Option<PathBuf>,

    /// Address the HTTP listener binds to
    pub bind_address: String,

    /// HTTP listener port, within [MIN_PORT, MAX_PORT]
    pub port: u16,

    /// Sort each folder level alphabetically by name
    pub use_sort: bool,

    /// Root used when a request does not name one
    pub root_name: String,

    /// Breadcrumb home label
    pub home_label: String,

    /// Periodic reload interval in seconds, 0 disables the timer
    pub reload_interval_secs: u64,

    /// Re-read the bookmark file whenever the root view is requested
    pub reload_on_root: bool,
}

impl Default for BookmarkdConfig {
    fn default() -> Self {
        Self {
            bookmark_file: default_bookmark_file(),
            log_file: Some(PathBuf::from("bookmarkd.log")),
            bind_address: "127.0.0.1".to_string(),
            port: 9898,
            use_sort: false,
            root_name: DEFAULT_ROOT.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
            reload_interval_secs: 0,
            reload_on_root: false,
        }
    }
}

impl BookmarkdConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PORT..=MAX_PORT).contains(&self.port) {
            return Err(BookmarkError::invalid_config(format!(
                "port {} out of range [{}, {}]",
                self.port, MIN_PORT, MAX_PORT
            )));
        }

        if self.bookmark_file.as_os_str().is_empty() {
            return Err(BookmarkError::invalid_config(
                "bookmark_file cannot be empty",
            ));
        }

        if self.root_name.is_empty() {
            return Err(BookmarkError::invalid_config("root_name cannot be empty"));
        }

        if self.bind_address.is_empty() {
            return Err(BookmarkError::invalid_config(
                "bind_address cannot be empty",
            ));
        }

        Ok(())
    }

    /// Socket address string for the listener, e.g. `127.0.0.1:9898`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// The reload timer period, if periodic reloading is enabled
    pub fn reload_interval(&self) -> Option<Duration> {
        (self.reload_interval_secs > 0).then(|| Duration::from_secs(self.reload_interval_secs))
    }
}

/// Default Chromium profile bookmark file under the user's home directory.
///
/// Falls back to a relative `Bookmarks` path when the home directory cannot
/// be determined; startup validation reports it if that file is missing too.
pub fn default_bookmark_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home
            .join(".config")
            .join("chromium")
            .join("Default")
            .join("Bookmarks"),
        None => PathBuf::from("Bookmarks"),
    }
}
