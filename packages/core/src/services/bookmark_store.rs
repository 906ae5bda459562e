//! Bookmark Store
//!
//! Holds the current [`BookmarkTree`] and replaces it on reload.
//!
//! # Snapshot Semantics
//!
//! The tree lives behind `RwLock<Arc<BookmarkTree>>`. Readers clone the inner
//! `Arc` and release the lock immediately, so a request keeps resolving
//! against the tree it started with even if a reload swaps in a new one
//! meanwhile. A reload parses the new document completely before taking the
//! write lock, and the swap itself is a single pointer assignment. The
//! matching [`LoadStatus`] counts are written while that lock is still held,
//! so [`BookmarkStore::snapshot_with_status`] never pairs a tree with another
//! tree's counts.
//!
//! # Failure Policy
//!
//! A failed reload leaves the previously installed tree in place and records
//! the error in [`LoadStatus`]. Before the first successful load the store
//! holds an empty tree, so every view degrades to "no bookmarks here".

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{error, info, instrument};

use crate::config::BookmarkdConfig;
use crate::error::{BookmarkError, Result};
use crate::models::{BookmarkNode, BookmarkTree};

/// Load bookkeeping, exposed to the admin and health endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadStatus {
    /// File the store reads on reload
    pub bookmark_file: PathBuf,

    /// Number of successful loads since startup
    pub loads: u64,

    /// Time of the last successful load
    pub last_loaded_at: Option<DateTime<Utc>>,

    /// Message of the most recent failure, cleared by the next success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    /// Folder count of the installed tree
    pub folders: usize,

    /// Link count of the installed tree
    pub links: usize,
}

/// Owner of the in-memory bookmark tree
pub struct BookmarkStore {
    path: PathBuf,
    tree: RwLock<Arc<BookmarkTree>>,
    status: Mutex<LoadStatus>,
    /// Serializes reloads so file reads and swaps land in order
    reload_lock: tokio::sync::Mutex<()>,
}

impl BookmarkStore {
    /// Create a store for the configured bookmark file, holding an empty tree
    pub fn new(config: &BookmarkdConfig) -> Self {
        Self::with_path(&config.bookmark_file)
    }

    /// Create a store reading from `path`, holding an empty tree
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            status: Mutex::new(LoadStatus {
                bookmark_file: path.clone(),
                ..Default::default()
            }),
            path,
            tree: RwLock::new(Arc::new(BookmarkTree::empty())),
            reload_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The bookmark file this store reloads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The currently installed tree
    pub fn snapshot(&self) -> Arc<BookmarkTree> {
        self.tree
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The currently installed tree together with the status describing it
    pub fn snapshot_with_status(&self) -> (Arc<BookmarkTree>, LoadStatus) {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        let status = self
            .status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        (tree.clone(), status)
    }

    /// Root folder of `tree` by name; absent roots are a soft condition
    pub fn root_by_name<'t>(tree: &'t BookmarkTree, name: &str) -> Option<&'t BookmarkNode> {
        tree.root_by_name(name)
    }

    /// Current load bookkeeping
    pub fn status(&self) -> LoadStatus {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-read the bookmark file and install the parsed tree.
    ///
    /// # Errors
    ///
    /// - `BookmarkError::Io` if the file cannot be read
    /// - `BookmarkError::Parse` if its contents are not a bookmark document
    ///
    /// On error the previous tree stays installed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn reload(&self) -> Result<Arc<BookmarkTree>> {
        let _guard = self.reload_lock.lock().await;

        info!("Loading bookmarks from {}", self.path.display());

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let err = BookmarkError::io(&self.path, e);
                self.record_failure(&err);
                return Err(err);
            }
        };

        self.install(&bytes)
    }

    /// Parse `bytes` and install the resulting tree.
    ///
    /// Same failure semantics as [`reload`](Self::reload), without file IO.
    pub async fn load_bytes(&self, bytes: &[u8]) -> Result<Arc<BookmarkTree>> {
        let _guard = self.reload_lock.lock().await;
        self.install(bytes)
    }

    fn install(&self, bytes: &[u8]) -> Result<Arc<BookmarkTree>> {
        let tree = match BookmarkTree::from_slice(bytes) {
            Ok(tree) => Arc::new(tree),
            Err(err) => {
                self.record_failure(&err);
                return Err(err);
            }
        };

        let (folders, links) = (tree.folder_count(), tree.link_count());

        // Lock order is tree, then status.
        let mut current = self.tree.write().unwrap_or_else(PoisonError::into_inner);
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
        *current = tree.clone();
        status.loads += 1;
        status.last_loaded_at = Some(Utc::now());
        status.last_error = None;
        status.folders = folders;
        status.links = links;
        drop(status);
        drop(current);

        info!(folders, links, "Bookmarks loaded");
        Ok(tree)
    }

    fn record_failure(&self, err: &BookmarkError) {
        error!("Bookmark load failed, keeping previous tree: {}", err);
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_error = Some(err.to_string());
    }
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("path", &self.path)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: &[u8] = br#"{"roots": {"bookmark_bar": {"type": "folder", "children": [
        {"name": "Work", "type": "folder", "children": [
            {"name": "Mail", "type": "url", "url": "https://mail.example"}
        ]},
        {"name": "Home", "type": "url", "url": "https://home.example"}
    ]}}}"#;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = BookmarkStore::with_path("/nonexistent/Bookmarks");
        assert!(store.snapshot().is_empty());

        let status = store.status();
        assert_eq!(status.loads, 0);
        assert!(status.last_loaded_at.is_none());
        assert_eq!(status.bookmark_file, PathBuf::from("/nonexistent/Bookmarks"));
    }

    #[tokio::test]
    async fn test_load_bytes_installs_tree() {
        let store = BookmarkStore::with_path("unused");
        let tree = store.load_bytes(BAR).await.unwrap();

        assert!(Arc::ptr_eq(&tree, &store.snapshot()));
        let status = store.status();
        assert_eq!(status.loads, 1);
        assert_eq!(status.folders, 1);
        assert_eq!(status.links, 2);
        assert!(status.last_error.is_none());
        assert!(status.last_loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_parse_failure_keeps_previous_tree() {
        let store = BookmarkStore::with_path("unused");
        let good = store.load_bytes(BAR).await.unwrap();

        let err = store.load_bytes(b"{ truncated").await.unwrap_err();
        assert!(matches!(err, BookmarkError::Parse(_)));

        assert!(Arc::ptr_eq(&good, &store.snapshot()));
        let status = store.status();
        assert_eq!(status.loads, 1);
        assert!(status.last_error.is_some());
    }

    #[tokio::test]
    async fn test_held_snapshot_survives_swap() {
        let store = BookmarkStore::with_path("unused");
        store.load_bytes(BAR).await.unwrap();
        let held = store.snapshot();

        store
            .load_bytes(br#"{"roots": {"bookmark_bar": {"children": []}}}"#)
            .await
            .unwrap();

        assert_eq!(held.root_or_empty("bookmark_bar").children.len(), 2);
        assert!(store
            .snapshot()
            .root_or_empty("bookmark_bar")
            .children
            .is_empty());
    }

    #[tokio::test]
    async fn test_reload_missing_file_is_io_error() {
        let store = BookmarkStore::with_path("/nonexistent/bookmarkd/Bookmarks");
        let err = store.reload().await.unwrap_err();
        assert!(matches!(err, BookmarkError::Io { .. }));
        assert!(store.snapshot().is_empty());
        assert!(store.status().last_error.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_status_counts_match_installed_tree_during_swaps() {
        const ONE_LINK: &[u8] = br#"{"roots": {"bookmark_bar": {"children": [
            {"name": "A", "type": "url", "url": "https://a.example"}
        ]}}}"#;

        let store = Arc::new(BookmarkStore::with_path("unused"));
        store.load_bytes(ONE_LINK).await.unwrap();

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let doc = if i % 2 == 0 { BAR } else { ONE_LINK };
                    store.load_bytes(doc).await.unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let store = store.clone();
                tokio::task::spawn_blocking(move || {
                    for _ in 0..2_000 {
                        let (tree, status) = store.snapshot_with_status();
                        assert_eq!(status.links, tree.link_count());
                        assert_eq!(status.folders, tree.folder_count());
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }

        let (tree, status) = store.snapshot_with_status();
        assert_eq!(status.loads, 201);
        assert_eq!(status.links, tree.link_count());
    }

    #[test]
    fn test_root_by_name_is_soft() {
        let tree = BookmarkTree::from_slice(BAR).unwrap();
        assert!(BookmarkStore::root_by_name(&tree, "bookmark_bar").is_some());
        assert!(BookmarkStore::root_by_name(&tree, "synced").is_none());
    }
}
