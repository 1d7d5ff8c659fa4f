use drupal_export_repository::TextFormat;
use lazy_static::lazy_static;
use regex::Regex;

const LINE_BREAK: &str = "<br/>";

lazy_static! {
    static ref BARE_BR: Regex = Regex::new(r"(?i)<br\s*>").unwrap();
}

/// A body ready to be written, with the extension Jekyll should render it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub extension: &'static str,
    pub body: String,
}

/// Converts CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(body: &str) -> String {
    body.replace("\r\n", "\n").replace('\r', "\n")
}

/// Line ending normalization plus `<br>` to `<br/>`, for blog posts.
///
/// Jekyll's markdown converter chokes on unclosed break tags.
pub fn normalize_post_body(body: &str) -> String {
    let normalized = normalize_line_endings(body);
    BARE_BR.replace_all(&normalized, LINE_BREAK).into_owned()
}

/// Picks the output extension for `format` and applies its body rewrite.
///
/// Drupal's HTML filters turn newlines into line breaks at render time, so
/// HTML bodies get an explicit `<br/>` after every newline to keep their
/// layout. Markdown and any other format are passed through.
pub fn render_body(format: &TextFormat, body: String) -> RenderedBody {
    match format {
        TextFormat::Markdown => RenderedBody {
            extension: "md",
            body,
        },
        TextFormat::FilteredHtml | TextFormat::FullHtml => RenderedBody {
            extension: "html",
            body: body.replace('\n', "\n<br/>"),
        },
        TextFormat::Other(_) => RenderedBody {
            extension: "html",
            body,
        },
    }
}
