//! Data Models
//!
//! - [`bookmark`] - Bookmark tree (nodes, kinds, named roots)

pub mod bookmark;

pub use bookmark::{BookmarkKind, BookmarkNode, BookmarkTree};
