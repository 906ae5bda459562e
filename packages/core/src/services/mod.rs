//! Services
//!
//! - `BookmarkStore` - Owns the current bookmark tree; load and reload
//! - `NavigationResolver` - Selector path to breadcrumb and entry list
//!
//! The store is shared between request handlers; the resolver is a plain
//! value and every resolution is a pure function of a tree snapshot.

pub mod bookmark_store;
pub mod navigation;


pub use bookmark_store::{BookmarkStore, LoadStatus};
pub use navigation::{
    resolve, EntryTarget, NavigationEntry, NavigationResolver, NavigationView,
    BREADCRUMB_SEPARATOR,
};
