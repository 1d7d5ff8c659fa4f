use crate::errors::ContentRepositoryError;
use crate::types::{NodeRecord, UrlAlias};

/// Trait for reading exportable content from the source CMS.
///
/// The exporter only ever reads through this trait, so a run can be driven
/// by the MySQL implementation or by an in-memory fixture in tests.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// All blog, story and page nodes with their current revision, ordered by node id.
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, ContentRepositoryError>;

    /// URL aliases whose source is `node/<nid>`, ordered by alias id.
    async fn aliases_for(&self, nid: i64) -> Result<Vec<UrlAlias>, ContentRepositoryError>;

    /// Raw taxonomy term names attached to the node.
    async fn tags_for(&self, nid: i64) -> Result<Vec<String>, ContentRepositoryError>;
}
