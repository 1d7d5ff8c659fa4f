/// A row of the `url_alias` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAlias {
    pub id: i64,
    /// Internal Drupal path, e.g. `node/42`.
    pub source: String,
    /// Public path the site served the node under, with or without a leading `/`.
    pub destination: String,
}

impl UrlAlias {
    /// Destination relative to the site root.
    pub fn relative_path(&self) -> &str {
        self.destination
            .strip_prefix('/')
            .unwrap_or(&self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias(destination: &str) -> UrlAlias {
        UrlAlias {
            id: 1,
            source: "node/1".to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_relative_path_strips_a_single_slash() {
        assert_eq!(alias("/docs").relative_path(), "docs");
        assert_eq!(alias("docs/intro").relative_path(), "docs/intro");
        assert_eq!(alias("//docs").relative_path(), "/docs");
    }
}
