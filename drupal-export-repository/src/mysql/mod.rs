//! MySQL implementation of the content repository.
mod connection;
mod content_repository;
mod tables;

pub use connection::{connect, ConnectionSettings};
pub use content_repository::MySqlContentRepository;
pub use tables::TableNames;
