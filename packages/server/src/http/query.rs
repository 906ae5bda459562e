//! Navigation query strings
//!
//! The whole navigation state travels in the URL: a repeatable `fp`
//! parameter carries the selector path and an optional `root` parameter
//! picks the bookmark root. `/?fp=Work&fp=Projects` therefore always shows
//! the same folder, and any page can be bookmarked or shared.

/// Query parameter carrying one selector
pub const SELECTOR_PARAM: &str = "fp";

/// Query parameter naming the bookmark root
pub const ROOT_PARAM: &str = "root";

/// Navigation state decoded from a request's query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavQuery {
    /// Explicitly requested root, if any (last occurrence wins)
    pub root: Option<String>,
    /// Selector path in request order
    pub selectors: Vec<String>,
}

impl NavQuery {
    /// Decode a raw (still percent-encoded) query string.
    ///
    /// Unknown parameters are ignored; repeated `fp` values keep their order.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                SELECTOR_PARAM => query.selectors.push(value.into_owned()),
                ROOT_PARAM => query.root = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// The root to resolve against
    pub fn root_or<'a>(&'a self, default_root: &'a str) -> &'a str {
        self.root.as_deref().unwrap_or(default_root)
    }

    /// Root to carry into generated links: only when it differs from the default
    pub fn link_root<'a>(&'a self, default_root: &str) -> Option<&'a str> {
        self.root.as_deref().filter(|root| *root != default_root)
    }

    /// No selectors: this is a request for the root view
    pub fn is_root_view(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Page URL displaying `path` under `root`, e.g. `/?fp=Work&fp=Mail`
pub fn page_href<S: AsRef<str>>(root: Option<&str>, path: &[S]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(root) = root {
        serializer.append_pair(ROOT_PARAM, root);
    }
    for selector in path {
        serializer.append_pair(SELECTOR_PARAM, selector.as_ref());
    }

    let encoded = serializer.finish();
    if encoded.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_selectors_in_order() {
        let query = NavQuery::parse(Some("fp=Work&fp=Projects+2024&other=1&fp=%C3%84pfel"));
        assert_eq!(query.selectors, vec!["Work", "Projects 2024", "Äpfel"]);
        assert!(query.root.is_none());
        assert!(!query.is_root_view());
    }

    #[test]
    fn test_parse_empty_and_missing() {
        assert!(NavQuery::parse(None).is_root_view());
        assert!(NavQuery::parse(Some("")).is_root_view());
    }

    #[test]
    fn test_root_param() {
        let query = NavQuery::parse(Some("root=other&fp=a"));
        assert_eq!(query.root_or("bookmark_bar"), "other");
        assert_eq!(query.link_root("bookmark_bar"), Some("other"));

        let query = NavQuery::parse(Some("root=bookmark_bar"));
        assert_eq!(query.link_root("bookmark_bar"), None);
        assert_eq!(NavQuery::default().root_or("bookmark_bar"), "bookmark_bar");
    }

    #[test]
    fn test_page_href_encodes_and_round_trips() {
        let path = vec!["Work & Play".to_string(), "a/b?c".to_string()];
        let href = page_href(Some("other"), &path);
        assert_eq!(href, "/?root=other&fp=Work+%26+Play&fp=a%2Fb%3Fc");

        let query = NavQuery::parse(href.strip_prefix("/?"));
        assert_eq!(query.selectors, path);
        assert_eq!(query.root.as_deref(), Some("other"));
    }

    #[test]
    fn test_page_href_root() {
        assert_eq!(page_href::<&str>(None, &[]), "/");
        assert_eq!(page_href::<&str>(Some("synced"), &[]), "/?root=synced");
    }
}
