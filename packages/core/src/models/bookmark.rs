//! Bookmark Tree Data Structures
//!
//! Chromium-family browsers persist bookmarks as a single JSON document:
//!
//! ```json
//! {
//!   "roots": {
//!     "bookmark_bar": { "type": "folder", "name": "Bookmarks bar", "children": [ ... ] },
//!     "other":        { "type": "folder", "name": "Other bookmarks", "children": [] },
//!     "synced":       { "type": "folder", "name": "Mobile bookmarks", "children": [] }
//!   }
//! }
//! ```
//!
//! Parsing is permissive: missing or `null` fields become empty strings or
//! empty lists, unknown fields are ignored, and any `type` other than `"url"`
//! is treated as a folder. The only hard failure is a document that is not
//! JSON or whose shape does not match (e.g. `children` that is not a list).
//!
//! A tree is immutable once built. Reloading produces a new tree.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{BookmarkError, Result};

/// Shared empty folder handed out for roots that do not exist
static EMPTY_FOLDER: BookmarkNode = BookmarkNode {
    id: String::new(),
    name: String::new(),
    kind: BookmarkKind::Folder,
    url: String::new(),
    date_added: String::new(),
    date_modified: String::new(),
    children: Vec::new(),
};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Classification of a bookmark node, stored as the `type` tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookmarkKind {
    #[default]
    Folder,
    Link,
}

impl BookmarkKind {
    /// The tag used in the bookmark file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Link => "url",
        }
    }
}

impl From<String> for BookmarkKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "url" => Self::Link,
            _ => Self::Folder,
        }
    }
}

impl From<BookmarkKind> for String {
    fn from(kind: BookmarkKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One element of the bookmark tree: either a folder or a link.
///
/// # Fields
///
/// - `id`: Source-assigned identifier (unique per file, not enforced)
/// - `name`: Display label, also the selector used to descend into folders
/// - `kind`: Folder or Link, from the `type` tag
/// - `url`: Target of a link; ignored for folders
/// - `date_added` / `date_modified`: Opaque browser timestamps, passed through
/// - `children`: Ordered child nodes; always empty for links after loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: BookmarkKind,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub date_added: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub date_modified: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    /// Create an empty folder with the given name
    pub fn folder(name: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind: BookmarkKind::Folder,
            url: String::new(),
            date_added: String::new(),
            date_modified: String::new(),
            children,
        }
    }

    /// Create a link with the given name and target URL
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind: BookmarkKind::Link,
            url: url.into(),
            date_added: String::new(),
            date_modified: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style id setter
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == BookmarkKind::Folder
    }

    pub fn is_link(&self) -> bool {
        self.kind == BookmarkKind::Link
    }

    /// First child whose name equals `name` exactly, in stored order.
    ///
    /// Links have no children, so this is always `None` for a link.
    pub fn child_named(&self, name: &str) -> Option<&BookmarkNode> {
        if self.is_link() {
            return None;
        }
        self.children.iter().find(|child| child.name == name)
    }

    /// Drop children that links may carry in the source document
    fn normalize(&mut self) {
        if self.is_link() {
            self.children.clear();
            return;
        }
        for child in &mut self.children {
            child.normalize();
        }
    }

    /// Count (folders, links) in this subtree, excluding `self`
    fn count(&self) -> (usize, usize) {
        self.children
            .iter()
            .fold((0, 0), |(folders, links), child| {
                let (f, l) = child.count();
                if child.is_link() {
                    (folders + f, links + l + 1)
                } else {
                    (folders + f + 1, links + l)
                }
            })
    }
}

/// A parsed bookmark file: named roots, each a folder subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkTree {
    #[serde(default, deserialize_with = "null_as_default")]
    roots: BTreeMap<String, BookmarkNode>,
}

impl BookmarkTree {
    /// A tree with no roots; every lookup degrades to an empty folder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tree directly from named roots
    pub fn from_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = (S, BookmarkNode)>,
        S: Into<String>,
    {
        let mut tree = Self {
            roots: roots
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        };
        tree.normalize();
        tree
    }

    /// Parse a bookmark document from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut tree: BookmarkTree = serde_json::from_slice(bytes).map_err(BookmarkError::Parse)?;
        tree.normalize();
        Ok(tree)
    }

    fn normalize(&mut self) {
        for root in self.roots.values_mut() {
            root.normalize();
        }
    }

    /// Root folder by name, `None` when absent
    pub fn root_by_name(&self, name: &str) -> Option<&BookmarkNode> {
        self.roots.get(name)
    }

    /// Root folder by name, failing with `RootNotFound` when absent
    pub fn root(&self, name: &str) -> Result<&BookmarkNode> {
        self.root_by_name(name)
            .ok_or_else(|| BookmarkError::root_not_found(name))
    }

    /// Root folder by name, or a shared empty folder when absent
    pub fn root_or_empty(&self, name: &str) -> &BookmarkNode {
        self.root_by_name(name).unwrap_or(&EMPTY_FOLDER)
    }

    /// Root names in sorted order
    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of folders below the roots (roots themselves excluded)
    pub fn folder_count(&self) -> usize {
        self.roots.values().map(|root| root.count().0).sum()
    }

    /// Number of links across all roots
    pub fn link_count(&self) -> usize {
        self.roots.values().map(|root| root.count().1).sum()
    }
}
