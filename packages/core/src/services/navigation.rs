//! Navigation Resolver
//!
//! Maps a root folder plus an ordered list of folder-name selectors to a
//! render-ready [`NavigationView`].
//!
//! # Descent
//!
//! Each selector is matched against the current folder's children in stored
//! order; the first child whose name is exactly equal wins. A selector that
//! matches nothing, or any selector after a link has been reached, ends the
//! walk. The view then shows the deepest node reached, and the breadcrumb
//! lists only the selectors that were consumed. A stale or hand-edited path
//! therefore never errors, it clamps.
//!
//! # Ordering
//!
//! Entries keep the stored order unless sorting is enabled, in which case
//! they are stably sorted by byte-wise name comparison: entries with equal
//! names stay in their stored relative order.

use serde::Serialize;
use tracing::trace;

use crate::config::BookmarkdConfig;
use crate::models::{BookmarkKind, BookmarkNode, BookmarkTree};

/// Separator placed before every breadcrumb label
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Where an entry leads when activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryTarget {
    /// Selector path that displays this folder: consumed selectors plus its name
    Path(Vec<String>),
    /// Stored URL of a link
    Url(String),
}

/// One displayable child of the reached folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub name: String,
    pub kind: BookmarkKind,
    pub target: EntryTarget,
}

impl NavigationEntry {
    fn from_node(node: &BookmarkNode, breadcrumb: &[String]) -> Self {
        let target = match node.kind {
            BookmarkKind::Folder => {
                let mut path = Vec::with_capacity(breadcrumb.len() + 1);
                path.extend_from_slice(breadcrumb);
                path.push(node.name.clone());
                EntryTarget::Path(path)
            }
            BookmarkKind::Link => EntryTarget::Url(node.url.clone()),
        };

        Self {
            name: node.name.clone(),
            kind: node.kind,
            target,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == BookmarkKind::Folder
    }
}

/// Result of resolving a selector path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    /// Selectors consumed by the walk, in order
    pub breadcrumb: Vec<String>,
    /// Children of the reached node
    pub entries: Vec<NavigationEntry>,
}

impl NavigationView {
    /// Breadcrumb as display text: the home label followed by
    /// `" > label"` for every consumed selector
    pub fn breadcrumb_text(&self, home_label: &str) -> String {
        self.breadcrumb
            .iter()
            .fold(home_label.to_string(), |mut text, label| {
                text.push_str(BREADCRUMB_SEPARATOR);
                text.push_str(label);
                text
            })
    }

    /// Number of folder levels below the root
    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }

    pub fn is_root(&self) -> bool {
        self.breadcrumb.is_empty()
    }
}

/// Walk `selectors` down from `root` and collect the reached node's children.
///
/// Pure: reads only `root` and `selectors`, allocates its own output.
pub fn resolve<S: AsRef<str>>(
    root: &BookmarkNode,
    selectors: &[S],
    sort_enabled: bool,
) -> NavigationView {
    let mut current = root;
    let mut breadcrumb = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let selector = selector.as_ref();
        match current.child_named(selector) {
            Some(child) => {
                breadcrumb.push(selector.to_string());
                current = child;
            }
            None => {
                trace!(
                    selector,
                    depth = breadcrumb.len(),
                    "Selector did not resolve, clamping"
                );
                break;
            }
        }
    }

    let mut children: Vec<&BookmarkNode> = if current.is_link() {
        Vec::new()
    } else {
        current.children.iter().collect()
    };

    if sort_enabled {
        sort_by_name(&mut children);
    }

    let entries = children
        .into_iter()
        .map(|child| NavigationEntry::from_node(child, &breadcrumb))
        .collect();

    NavigationView {
        breadcrumb,
        entries,
    }
}

/// Stable ascending sort by name, compared byte-wise (not locale-aware)
fn sort_by_name(nodes: &mut [&BookmarkNode]) {
    nodes.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

/// Resolver configured once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResolver {
    sort_enabled: bool,
    default_root: String,
}

impl NavigationResolver {
    pub fn new(sort_enabled: bool, default_root: impl Into<String>) -> Self {
        Self {
            sort_enabled,
            default_root: default_root.into(),
        }
    }

    pub fn from_config(config: &BookmarkdConfig) -> Self {
        Self::new(config.use_sort, config.root_name.clone())
    }

    pub fn sort_enabled(&self) -> bool {
        self.sort_enabled
    }

    pub fn default_root(&self) -> &str {
        &self.default_root
    }

    /// Resolve `selectors` under an already looked-up root folder
    pub fn resolve<S: AsRef<str>>(&self, root: &BookmarkNode, selectors: &[S]) -> NavigationView {
        resolve(root, selectors, self.sort_enabled)
    }

    /// Look up `root_name` (or the default root) in `tree` and resolve.
    ///
    /// A root missing from the tree resolves as an empty folder.
    pub fn resolve_in<S: AsRef<str>>(
        &self,
        tree: &BookmarkTree,
        root_name: Option<&str>,
        selectors: &[S],
    ) -> NavigationView {
        let root_name = root_name.unwrap_or(&self.default_root);
        self.resolve(tree.root_or_empty(root_name), selectors)
    }
}
