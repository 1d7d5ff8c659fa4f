//! Mapping of Drupal user names onto author ids of the new site.
use std::collections::HashMap;
use std::path::Path;

use crate::errors::ConfigError;

/// Immutable user name to author id lookup.
///
/// Names missing from the map are passed through unchanged.
#[derive(Debug, Clone, Default)]
pub struct AuthorMap {
    authors: HashMap<String, String>,
}

impl AuthorMap {
    pub fn new(authors: HashMap<String, String>) -> Self {
        Self { authors }
    }

    /// Loads a YAML mapping of `drupal name: author id`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadAuthorMap {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let authors = serde_yaml::from_str::<HashMap<String, String>>(&raw).map_err(|source| {
            ConfigError::ParseAuthorMap {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self::new(authors))
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.authors.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_falls_back_to_source_name() {
        let map = AuthorMap::new(HashMap::from([(
            "admin".to_string(),
            "jane".to_string(),
        )]));

        assert_eq!(map.resolve("admin"), "jane");
        assert_eq!(map.resolve("guest"), "guest");
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"admin: jane\n\"old user\": bob\n")
            .expect("Failed to write to temp file");

        let map = AuthorMap::load(file.path()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve("old user"), "bob");
    }

    #[test]
    fn test_load_empty_file_gives_identity_map() {
        let file = NamedTempFile::new().expect("Failed to create temp file");

        let map = AuthorMap::load(file.path()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.resolve("admin"), "admin");
    }

    #[test]
    fn test_load_rejects_non_mapping() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"- admin\n- jane\n").unwrap();

        let result = AuthorMap::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseAuthorMap { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AuthorMap::load(Path::new("/nonexistent/authors.yml"));
        assert!(matches!(result, Err(ConfigError::ReadAuthorMap { .. })));
    }
}
