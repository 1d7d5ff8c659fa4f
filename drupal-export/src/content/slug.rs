use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref AMPERSAND: Regex = Regex::new(r"&(amp;)?").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s\-/\\]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\s/\\]+").unwrap();
    static ref DASHES: Regex = Regex::new(r"[-_]{2,}").unwrap();
}

/// Derives the URL-safe file name component of a post from its title.
///
/// `"  Hello, World & Friends.txt "` becomes `hello-world-and-friendstxt`:
/// punctuation, dots included, is dropped rather than turned into `-`.
/// Single underscores are kept; runs mixing `-` and `_` collapse to one `-`.
/// The result is stable under repeated application and may be empty.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let anded = AMPERSAND.replace_all(&lowered, " and ");
    let kept = DISALLOWED.replace_all(&anded, "");
    let dashed = SEPARATORS.replace_all(&kept, "-");
    let collapsed = DASHES.replace_all(&dashed, "-");

    collapsed.trim_matches(|c| c == '-' || c == '_').to_string()
}
