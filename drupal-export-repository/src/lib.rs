//! # Drupal Export Repository
//! This crate provides the types, traits and MySQL implementation used to
//! read published content out of a Drupal database. Nothing here writes to
//! the source schema.
pub mod errors;
pub mod interfaces;
pub mod mysql;
pub mod types;

pub use errors::ContentRepositoryError;
pub use interfaces::ContentRepository;
pub use mysql::{MySqlContentRepository, TableNames};
pub use types::{NodeKind, NodeRecord, TextFormat, UrlAlias};
