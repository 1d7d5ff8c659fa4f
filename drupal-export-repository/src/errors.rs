use thiserror::Error;

#[derive(Debug, Error)]
/// Represents errors that can occur within the content repository.
///
/// Database failures are propagated untouched; rows that cannot be mapped
/// onto the domain types are reported with the offending value.
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),
}
