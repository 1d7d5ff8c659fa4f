use serde::Serialize;

pub const DELIMITER: &str = "---";
const REFRESH_LAYOUT: &str = "refresh";

/// Header of a canonical post or page file.
///
/// Keys serialize in declaration order; empty values are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFrontMatter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub layout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub nodeid: i64,
    pub created: i64,
    // An untagged node gets no `tags:` key rather than `tags: []`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
}

#[derive(Debug, Serialize)]
struct RedirectFrontMatter<'a> {
    layout: &'static str,
    refresh_to_post_id: &'a str,
}

/// Trims and lowercases term names, dropping blanks and repeats.
///
/// First occurrence wins, so the term order of the source is kept.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

fn header<T: Serialize>(front_matter: &T) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(front_matter)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
}

/// Front matter block followed by the body.
pub fn render_document(front_matter: &PostFrontMatter, body: &str) -> Result<String, serde_yaml::Error> {
    let mut document = header(front_matter)?;
    document.push_str(body);
    Ok(document)
}

/// A body-less page whose layout sends the browser to `target`.
pub fn render_redirect(target: &str) -> Result<String, serde_yaml::Error> {
    header(&RedirectFrontMatter {
        layout: REFRESH_LAYOUT,
        refresh_to_post_id: target,
    })
}
