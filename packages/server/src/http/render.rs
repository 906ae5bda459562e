//! HTML rendering of a navigation view
//!
//! One page per folder level: an optional root switcher, an optional reload
//! warning, the breadcrumb (each level clickable) and the entry list.

use bookmarkd_core::{EntryTarget, NavigationView, BREADCRUMB_SEPARATOR};
use std::fmt::Write;

use super::query::page_href;

/// Icon shown next to folder entries
pub const FOLDER_ICON_PATH: &str = "/folder.svg";

/// Icon shown next to link entries
pub const FILE_ICON_PATH: &str = "/file.svg";

pub const FOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path fill="#e8b84a" d="M1 3h5l2 2h7v8H1z"/></svg>"##;

pub const FILE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path fill="#8aa4c8" d="M3 1h7l3 3v11H3z"/><path fill="#ffffff" d="M5 7h6v1H5zm0 2h6v1H5zm0 2h4v1H5z"/></svg>"##;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
a{text-decoration:none;color:#1a4d8f}\
ul{list-style:none;padding-left:1.5em}\
li{margin:.25em 0}\
img{vertical-align:middle;margin-right:.4em}\
.roots{font-size:.9em;margin-bottom:1em}\
.warning{color:#a33}";

/// Everything the page needs besides the view itself
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Label of the breadcrumb's home link
    pub home_label: &'a str,
    /// Root carried in generated links (`None` for the default root)
    pub link_root: Option<&'a str>,
    /// Root being displayed
    pub current_root: &'a str,
    /// All roots of the loaded tree
    pub root_names: Vec<&'a str>,
    /// Shown above the breadcrumb when the last reload failed
    pub warning: Option<String>,
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a complete HTML document for `view`
pub fn render_page(view: &NavigationView, ctx: &PageContext<'_>) -> String {
    let mut html = String::with_capacity(1024 + view.entries.len() * 128);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>{}</title>",
        escape_html(&view.breadcrumb_text(ctx.home_label))
    );
    let _ = writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE);

    if ctx.root_names.len() > 1 {
        render_root_switcher(&mut html, ctx);
    }

    if let Some(warning) = &ctx.warning {
        let _ = writeln!(html, "<p class=\"warning\">{}</p>", escape_html(warning));
    }

    render_breadcrumb(&mut html, view, ctx);

    html.push_str("<ul class=\"entries\">\n");
    for entry in &view.entries {
        let (href, icon) = match &entry.target {
            EntryTarget::Path(path) => (page_href(ctx.link_root, path), FOLDER_ICON_PATH),
            EntryTarget::Url(url) => (url.clone(), FILE_ICON_PATH),
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\"><img src=\"{}\" alt=\"\">{}</a></li>",
            escape_html(&href),
            icon,
            escape_html(&entry.name)
        );
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

fn render_root_switcher(html: &mut String, ctx: &PageContext<'_>) {
    html.push_str("<div class=\"roots\">");
    for (i, root) in ctx.root_names.iter().enumerate() {
        if i > 0 {
            html.push_str(" | ");
        }
        if *root == ctx.current_root {
            let _ = write!(html, "<strong>{}</strong>", escape_html(root));
        } else {
            let _ = write!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_html(&page_href::<&str>(Some(root), &[])),
                escape_html(root)
            );
        }
    }
    html.push_str("</div>\n");
}

fn render_breadcrumb(html: &mut String, view: &NavigationView, ctx: &PageContext<'_>) {
    let _ = write!(
        html,
        "<div class=\"breadcrumb\"><a href=\"{}\">{}</a>",
        escape_html(&page_href::<&str>(ctx.link_root, &[])),
        escape_html(ctx.home_label)
    );

    let last = view.breadcrumb.len().saturating_sub(1);
    for (i, label) in view.breadcrumb.iter().enumerate() {
        html.push_str(&escape_html(BREADCRUMB_SEPARATOR));
        if i == last {
            html.push_str(&escape_html(label));
        } else {
            let _ = write!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_html(&page_href(ctx.link_root, &view.breadcrumb[..=i])),
                escape_html(label)
            );
        }
    }
    html.push_str("</div>\n");
}
