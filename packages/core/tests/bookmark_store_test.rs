//! Integration tests for BookmarkStore
//!
//! Tests cover:
//! - Loading a bookmark file from disk
//! - Reload replacing the tree wholesale
//! - Failed reloads retaining the last good tree
//! - Concurrent readers during reloads

use anyhow::Result;
use bookmarkd_core::{BookmarkError, BookmarkStore, BookmarkdConfig, NavigationResolver};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

const WORK_AND_HOME: &str = r#"{
    "roots": {
        "bookmark_bar": {
            "id": "1", "name": "Bookmarks bar", "type": "folder",
            "children": [
                {"id": "2", "name": "Work", "type": "folder", "children": [
                    {"id": "3", "name": "Mail", "type": "url", "url": "https://mail.example"}
                ]},
                {"id": "4", "name": "Home", "type": "url", "url": "https://home.example"}
            ]
        },
        "other": {"id": "5", "name": "Other bookmarks", "type": "folder", "children": []}
    }
}"#;

const ONLY_NEWS: &str = r#"{
    "roots": {
        "bookmark_bar": {"type": "folder", "children": [
            {"name": "News", "type": "url", "url": "https://news.example"}
        ]}
    }
}"#;

/// Test helper: write a bookmark file and build a store reading it
fn create_test_env(contents: &str) -> Result<(BookmarkStore, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Bookmarks");
    std::fs::write(&path, contents)?;

    let config = BookmarkdConfig {
        bookmark_file: path.clone(),
        ..Default::default()
    };
    Ok((BookmarkStore::new(&config), path, temp_dir))
}

// =========================================================================
// Loading
// =========================================================================

#[tokio::test]
async fn test_reload_reads_file() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env(WORK_AND_HOME)?;
    assert_eq!(store.path(), path.as_path());

    let tree = store.reload().await?;
    let names: Vec<&str> = tree.root_names().collect();
    assert_eq!(names, vec!["bookmark_bar", "other"]);

    let resolver = NavigationResolver::new(false, "bookmark_bar");
    let view = resolver.resolve_in(&store.snapshot(), None, &["Work"]);
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].name, "Mail");
    Ok(())
}

#[tokio::test]
async fn test_reload_replaces_tree_wholesale() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env(WORK_AND_HOME)?;
    store.reload().await?;

    std::fs::write(&path, ONLY_NEWS)?;
    let tree = store.reload().await?;

    // "other" came from the old document and must not survive
    assert!(tree.root_by_name("other").is_none());
    let resolver = NavigationResolver::new(false, "bookmark_bar");
    let view = resolver.resolve_in::<&str>(&tree, None, &[]);
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].name, "News");

    assert_eq!(store.status().loads, 2);
    Ok(())
}

// =========================================================================
// Failure retention
// =========================================================================

#[tokio::test]
async fn test_malformed_file_keeps_last_good_tree() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env(WORK_AND_HOME)?;
    let good = store.reload().await?;

    std::fs::write(&path, "{\"roots\": {\"bookmark_bar\": ")?;
    let err = store.reload().await.unwrap_err();
    assert!(matches!(err, BookmarkError::Parse(_)));

    assert!(Arc::ptr_eq(&good, &store.snapshot()));
    let status = store.status();
    assert_eq!(status.loads, 1);
    assert!(status.last_error.is_some());
    Ok(())
}

#[tokio::test]
async fn test_deleted_file_keeps_last_good_tree() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env(WORK_AND_HOME)?;
    store.reload().await?;

    std::fs::remove_file(&path)?;
    let err = store.reload().await.unwrap_err();
    assert!(matches!(err, BookmarkError::Io { .. }));
    assert_eq!(err.code(), "IO_ERROR");

    let tree = store.snapshot();
    assert!(tree.root_by_name("bookmark_bar").is_some());
    Ok(())
}

#[tokio::test]
async fn test_success_after_failure_clears_error() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env("garbage")?;
    assert!(store.reload().await.is_err());
    assert!(store.snapshot().is_empty());

    std::fs::write(&path, ONLY_NEWS)?;
    store.reload().await?;

    let status = store.status();
    assert_eq!(status.loads, 1);
    assert!(status.last_error.is_none());
    assert_eq!(status.links, 1);
    Ok(())
}

// =========================================================================
// Concurrent access
// =========================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_trees_during_reloads() -> Result<()> {
    let (store, path, _temp_dir) = create_test_env(WORK_AND_HOME)?;
    let store = Arc::new(store);
    store.reload().await?;

    let mut readers = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        readers.push(tokio::spawn(async move {
            let resolver = NavigationResolver::new(true, "bookmark_bar");
            for _ in 0..200 {
                let view = resolver.resolve_in::<&str>(&store.snapshot(), None, &[]);
                let names: Vec<String> = view.entries.into_iter().map(|e| e.name).collect();
                // Either the old tree or the new one, never a mix
                assert!(
                    names == vec!["Home", "Work"] || names == vec!["News"],
                    "unexpected entries: {:?}",
                    names
                );
                tokio::task::yield_now().await;
            }
        }));
    }

    for i in 0..20 {
        let contents = if i % 2 == 0 { ONLY_NEWS } else { WORK_AND_HOME };
        std::fs::write(&path, contents)?;
        store.reload().await?;
    }

    for reader in readers {
        reader.await?;
    }
    Ok(())
}
