//! Reads nodes, aliases and tags from a Drupal 6 schema.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;

use crate::errors::ContentRepositoryError;
use crate::interfaces::ContentRepository;
use crate::mysql::TableNames;
use crate::types::{NodeKind, NodeRecord, TextFormat, UrlAlias};

/// MySQL-backed content repository.
pub struct MySqlContentRepository {
    pool: MySqlPool,
    nodes_query: String,
    aliases_query: String,
    tags_query: String,
}

impl MySqlContentRepository {
    /// Creates a repository reading the given tables through `pool`.
    pub fn new(pool: MySqlPool, tables: &TableNames) -> Self {
        let nodes_query = format!(
            "SELECT CAST(n.nid AS SIGNED) AS nid, n.title AS title, nr.body AS body, \
                    CAST(n.created AS SIGNED) AS created, CAST(n.status AS SIGNED) AS status, \
                    n.type AS type, u.name AS author, ff.name AS format \
             FROM {node} AS n \
             JOIN {node_revisions} AS nr ON nr.vid = n.vid \
             JOIN {users} AS u ON u.uid = n.uid \
             JOIN {filter_formats} AS ff ON ff.format = nr.format \
             WHERE n.type IN ('blog', 'story', 'page') \
             ORDER BY n.nid ASC",
            node = tables.node,
            node_revisions = tables.node_revisions,
            users = tables.users,
            filter_formats = tables.filter_formats,
        );
        let aliases_query = format!(
            "SELECT CAST(pid AS SIGNED) AS pid, src, dst FROM {url_alias} \
             WHERE src = ? ORDER BY pid ASC",
            url_alias = tables.url_alias,
        );
        let tags_query = format!(
            "SELECT td.name AS name FROM {term_node} AS tn \
             JOIN {term_data} AS td ON td.tid = tn.tid \
             WHERE tn.nid = ?",
            term_node = tables.term_node,
            term_data = tables.term_data,
        );

        Self {
            pool,
            nodes_query,
            aliases_query,
            tags_query,
        }
    }
}

fn node_from_row(row: &MySqlRow) -> Result<NodeRecord, ContentRepositoryError> {
    let kind: String = row.try_get("type")?;
    let format: String = row.try_get("format")?;

    Ok(NodeRecord {
        nid: row.try_get("nid")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        created: row.try_get("created")?,
        status: row.try_get("status")?,
        kind: kind.parse::<NodeKind>()?,
        format: TextFormat::from_name(&format),
        author: row.try_get("author")?,
    })
}

#[async_trait]
impl ContentRepository for MySqlContentRepository {
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, ContentRepositoryError> {
        let rows = sqlx::query(&self.nodes_query)
            .fetch_all(&self.pool)
            .await?;
        debug!(count = rows.len(), "Fetched node rows");

        rows.iter().map(node_from_row).collect()
    }

    async fn aliases_for(&self, nid: i64) -> Result<Vec<UrlAlias>, ContentRepositoryError> {
        let rows = sqlx::query(&self.aliases_query)
            .bind(format!("node/{nid}"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<UrlAlias, ContentRepositoryError> {
                Ok(UrlAlias {
                    id: row.try_get("pid")?,
                    source: row.try_get("src")?,
                    destination: row.try_get("dst")?,
                })
            })
            .collect()
    }

    async fn tags_for(&self, nid: i64) -> Result<Vec<String>, ContentRepositoryError> {
        let rows = sqlx::query(&self.tags_query)
            .bind(nid)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(Into::into))
            .collect()
    }
}
