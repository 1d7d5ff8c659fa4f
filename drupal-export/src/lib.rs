//! # Drupal Export
//! Turns the published nodes of a Drupal site into a Jekyll source tree:
//! dated posts under `blog/`, pages under their old aliases, and
//! meta-refresh stubs for every legacy URL.
pub mod authors;
pub mod config;
pub mod content;
pub mod errors;
pub mod exporter;
pub mod site;

pub use authors::AuthorMap;
pub use config::{CliArgs, ExportConfig, ExportOptions};
pub use errors::{ConfigError, ExportError};
pub use exporter::{ExportSummary, SiteExporter};
pub use site::SiteWriter;
