//! Command-line interface
use bookmarkd_core::config::{default_bookmark_file, DEFAULT_HOME_LABEL, DEFAULT_ROOT};
use bookmarkd_core::BookmarkdConfig;
use clap::Parser;
use std::path::PathBuf;

/// Log destination meaning "write to stderr"
pub const STDERR_LOG: &str = "-";

/// Serve a browser bookmark file as a navigable web page
#[derive(Clone, Debug, Parser)]
#[command(name = "bookmarkd", version)]
pub struct Args {
    /// The bookmark file [default: ~/.config/chromium/Default/Bookmarks]
    #[arg(
        long = "bookmarkfile",
        visible_alias = "bookmark-file",
        env = "BOOKMARKD_FILE"
    )]
    pub bookmark_file: Option<PathBuf>,

    /// The log file, "-" for stderr
    #[arg(
        long = "logfile",
        visible_alias = "log-file",
        env = "BOOKMARKD_LOG_FILE",
        default_value = "bookmarkd.log"
    )]
    pub log_file: PathBuf,

    /// The listening port
    #[arg(long, env = "BOOKMARKD_PORT", default_value_t = 9898)]
    pub port: u16,

    /// The listening address
    #[arg(long, env = "BOOKMARKD_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Sort bookmarks alphabetically
    #[arg(long, env = "BOOKMARKD_USE_SORT")]
    pub use_sort: bool,

    /// Root shown when a request names none
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Label of the breadcrumb home link
    #[arg(long, default_value = DEFAULT_HOME_LABEL)]
    pub home_label: String,

    /// Re-read the bookmark file every N seconds (0 disables)
    #[arg(long, env = "BOOKMARKD_RELOAD_INTERVAL", default_value_t = 0)]
    pub reload_interval: u64,

    /// Re-read the bookmark file whenever the root page is requested
    #[arg(long)]
    pub reload_on_root: bool,
}

impl Args {
    /// Build the process configuration; validation happens separately
    pub fn into_config(self) -> BookmarkdConfig {
        let log_file = (self.log_file.as_os_str() != STDERR_LOG).then_some(self.log_file);

        BookmarkdConfig {
            bookmark_file: self.bookmark_file.unwrap_or_else(default_bookmark_file),
            log_file,
            bind_address: self.bind,
            port: self.port,
            use_sort: self.use_sort,
            root_name: self.root,
            home_label: self.home_label,
            reload_interval_secs: self.reload_interval,
            reload_on_root: self.reload_on_root,
        }
    }
}
