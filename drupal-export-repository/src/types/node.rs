use std::fmt;
use std::str::FromStr;

use crate::errors::ContentRepositoryError;

/// `node.status` value of a published node.
pub const STATUS_PUBLISHED: i64 = 1;

/// Content types the export understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Blog,
    Story,
    Page,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Blog => "blog",
            NodeKind::Story => "story",
            NodeKind::Page => "page",
        }
    }

    /// Blog entries and stories are exported as dated posts.
    pub fn is_post(&self) -> bool {
        matches!(self, NodeKind::Blog | NodeKind::Story)
    }
}

impl FromStr for NodeKind {
    type Err = ContentRepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(NodeKind::Blog),
            "story" => Ok(NodeKind::Story),
            "page" => Ok(NodeKind::Page),
            other => Err(ContentRepositoryError::UnknownNodeType(other.to_string())),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input filter a revision body was authored with.
///
/// Matched against `filter_formats.name` ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFormat {
    Markdown,
    FilteredHtml,
    FullHtml,
    Other(String),
}

impl TextFormat {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "markdown" => TextFormat::Markdown,
            "filtered html" => TextFormat::FilteredHtml,
            "full html" => TextFormat::FullHtml,
            _ => TextFormat::Other(name.to_string()),
        }
    }
}

/// A node joined with its current revision, author and format.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub nid: i64,
    pub title: String,
    pub body: String,
    pub created: i64,
    pub status: i64,
    pub kind: NodeKind,
    pub format: TextFormat,
    pub author: String,
}

impl NodeRecord {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_parsing() {
        assert_eq!("blog".parse::<NodeKind>().unwrap(), NodeKind::Blog);
        assert_eq!("story".parse::<NodeKind>().unwrap(), NodeKind::Story);
        assert_eq!("page".parse::<NodeKind>().unwrap(), NodeKind::Page);
        assert!(matches!(
            "forum".parse::<NodeKind>(),
            Err(ContentRepositoryError::UnknownNodeType(t)) if t == "forum"
        ));
    }

    #[test]
    fn test_only_blog_and_story_are_posts() {
        assert!(NodeKind::Blog.is_post());
        assert!(NodeKind::Story.is_post());
        assert!(!NodeKind::Page.is_post());
    }

    #[test]
    fn test_format_names_are_case_insensitive() {
        assert_eq!(TextFormat::from_name("Markdown"), TextFormat::Markdown);
        assert_eq!(TextFormat::from_name("MARKDOWN"), TextFormat::Markdown);
        assert_eq!(TextFormat::from_name("Filtered HTML"), TextFormat::FilteredHtml);
        assert_eq!(TextFormat::from_name("full html"), TextFormat::FullHtml);
        assert_eq!(
            TextFormat::from_name("PHP code"),
            TextFormat::Other("PHP code".to_string())
        );
    }
}
