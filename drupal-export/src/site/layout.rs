// Where every exported file lands, relative to the site root
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use drupal_export_repository::UrlAlias;

pub const DRAFTS_DIR: &str = "_drafts";
pub const LAYOUTS_DIR: &str = "_layouts";
pub const BLOG_DIR: &str = "blog";
pub const NODE_DIR: &str = "node";
pub const REFRESH_LAYOUT_FILE: &str = "refresh.html";
pub const REDIRECT_FILE: &str = "index.md";

/// Layout rendering a redirect stub as an immediate meta refresh.
pub const REFRESH_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="content-type" content="text/html; charset=utf-8" />
<meta http-equiv="refresh" content="0;url={{ page.refresh_to_post_id }}" />
<link rel="canonical" href="{{ page.refresh_to_post_id }}" />
</head>
<body>
<p>This page has moved to <a href="{{ page.refresh_to_post_id }}">{{ page.refresh_to_post_id }}</a>.</p>
</body>
</html>
"#;

/// Directories created before anything else is written.
pub fn bootstrap_dirs() -> [&'static str; 3] {
    [DRAFTS_DIR, LAYOUTS_DIR, BLOG_DIR]
}

pub fn refresh_layout_path() -> PathBuf {
    PathBuf::from(LAYOUTS_DIR).join(REFRESH_LAYOUT_FILE)
}

fn dated_file_name(date: NaiveDate, slug: &str, extension: &str) -> String {
    format!("{}-{slug}.{extension}", date.format("%Y-%m-%d"))
}

/// `blog/<YYYY>/<YYYY-MM-DD>-<slug>.<ext>`
pub fn post_path(date: NaiveDate, slug: &str, extension: &str) -> PathBuf {
    PathBuf::from(BLOG_DIR)
        .join(date.year().to_string())
        .join(dated_file_name(date, slug, extension))
}

/// `/blog/<YYYY>/<MM>/<DD>/<slug>`, the URL Jekyll serves a post under.
pub fn post_permalink(date: NaiveDate, slug: &str) -> String {
    format!("/{BLOG_DIR}/{}/{slug}", date.format("%Y/%m/%d"))
}

pub fn draft_path(date: NaiveDate, slug: &str, extension: &str) -> PathBuf {
    PathBuf::from(DRAFTS_DIR).join(dated_file_name(date, slug, extension))
}

/// Canonical file of a page served under `alias`.
pub fn page_path(alias: &UrlAlias, extension: &str) -> PathBuf {
    PathBuf::from(alias.relative_path()).join(format!("index.{extension}"))
}

pub fn page_permalink(alias: &UrlAlias) -> String {
    format!("/{}", alias.relative_path())
}

/// Redirect stub answering the old alias URL.
pub fn alias_stub_path(alias: &UrlAlias) -> PathBuf {
    PathBuf::from(alias.relative_path()).join(REDIRECT_FILE)
}

/// Redirect stub answering `node/<nid>`.
pub fn node_stub_path(nid: i64) -> PathBuf {
    PathBuf::from(NODE_DIR).join(nid.to_string()).join(REDIRECT_FILE)
}
