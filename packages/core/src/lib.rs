//! bookmarkd Core
//!
//! In-memory model of a browser bookmark file and the navigation logic that
//! turns a folder-name path into one displayable folder level.
//!
//! # Modules
//!
//! - [`models`] - Bookmark tree (folders, links, named roots)
//! - [`services`] - `BookmarkStore` (load / reload / snapshot) and
//!   `NavigationResolver` (selector path to breadcrumb and entries)
//! - [`config`] - Process configuration shared by store, resolver and server
//! - [`error`] - `BookmarkError`
//!
//! # Example
//!
//! ```rust
//! use bookmarkd_core::{BookmarkTree, NavigationResolver};
//!
//! let tree = BookmarkTree::from_slice(br#"{"roots": {"bookmark_bar": {
//!     "type": "folder",
//!     "children": [
//!         {"type": "folder", "name": "Work", "children": [
//!             {"type": "url", "name": "Mail", "url": "https://mail.example"}
//!         ]},
//!         {"type": "url", "name": "Home", "url": "https://home.example"}
//!     ]
//! }}}"#).unwrap();
//!
//! let resolver = NavigationResolver::new(false, "bookmark_bar");
//! let view = resolver.resolve_in(&tree, None, &["Work"]);
//!
//! assert_eq!(view.breadcrumb_text("[home]"), "[home] > Work");
//! assert_eq!(view.entries[0].name, "Mail");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::BookmarkdConfig;
pub use error::{BookmarkError, Result};
pub use models::*;
pub use services::*;
