//! Pure transformations from Drupal rows to Jekyll file contents.
mod body;
mod front_matter;
mod slug;

pub use body::{normalize_line_endings, normalize_post_body, render_body, RenderedBody};
pub use front_matter::{normalize_tags, render_document, render_redirect, PostFrontMatter};
pub use slug::slugify;
