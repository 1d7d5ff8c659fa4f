/// Fully qualified names of the Drupal tables the export reads.
///
/// Drupal installs sharing a database prefix every table with the same
/// string, so all names are derived from one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub node: String,
    pub node_revisions: String,
    pub users: String,
    pub filter_formats: String,
    pub url_alias: String,
    pub term_node: String,
    pub term_data: String,
}

impl TableNames {
    pub fn with_prefix(prefix: &str) -> Self {
        let name = |table: &str| format!("{prefix}{table}");
        Self {
            node: name("node"),
            node_revisions: name("node_revisions"),
            users: name("users"),
            filter_formats: name("filter_formats"),
            url_alias: name("url_alias"),
            term_node: name("term_node"),
            term_data: name("term_data"),
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_unprefixed() {
        let tables = TableNames::default();
        assert_eq!(tables.node, "node");
        assert_eq!(tables.url_alias, "url_alias");
        assert_eq!(tables.term_data, "term_data");
    }

    #[test]
    fn test_prefix_applies_to_every_table() {
        let tables = TableNames::with_prefix("d6_");
        assert_eq!(tables.node, "d6_node");
        assert_eq!(tables.node_revisions, "d6_node_revisions");
        assert_eq!(tables.users, "d6_users");
        assert_eq!(tables.filter_formats, "d6_filter_formats");
        assert_eq!(tables.url_alias, "d6_url_alias");
        assert_eq!(tables.term_node, "d6_term_node");
        assert_eq!(tables.term_data, "d6_term_data");
    }
}
