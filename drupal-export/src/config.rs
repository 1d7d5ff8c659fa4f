// Command line arguments and run configuration
use std::path::PathBuf;

use clap::Parser;
use drupal_export_repository::TableNames;
use drupal_export_repository::mysql::ConnectionSettings;

use crate::authors::AuthorMap;
use crate::errors::ConfigError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_POST_LAYOUT: &str = "post";

/// Export published Drupal content into a Jekyll site tree
#[derive(Debug, Parser)]
#[command(name = "drupal-export", version)]
pub struct CliArgs {
    /// Name of the Drupal database
    pub database: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    #[arg(long, env = "DRUPAL_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "DRUPAL_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Prefix shared by every Drupal table
    #[arg(long, env = "DRUPAL_TABLE_PREFIX", default_value = "")]
    pub prefix: String,

    /// Root of the generated site
    #[arg(long, env = "EXPORT_OUTPUT_DIR", default_value = ".")]
    pub output: PathBuf,

    /// YAML file mapping Drupal user names to author ids
    #[arg(long, env = "EXPORT_AUTHOR_MAP")]
    pub authors: Option<PathBuf>,

    /// Layout written into the front matter of posts and pages
    #[arg(long, env = "EXPORT_POST_LAYOUT", default_value = DEFAULT_POST_LAYOUT)]
    pub layout: String,

    /// Also write unpublished posts into _drafts
    #[arg(long)]
    pub drafts: bool,
}

/// Knobs that change what the exporter writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub post_layout: String,
    pub include_drafts: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            post_layout: DEFAULT_POST_LAYOUT.to_string(),
            include_drafts: false,
        }
    }
}

/// Everything a run needs, resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub connection: ConnectionSettings,
    pub tables: TableNames,
    pub output_dir: PathBuf,
    pub authors: AuthorMap,
    pub options: ExportOptions,
}

impl ExportConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let authors = match &args.authors {
            Some(path) => AuthorMap::load(path)?,
            None => AuthorMap::default(),
        };

        Ok(Self {
            connection: ConnectionSettings {
                host: args.host,
                port: args.port,
                user: args.user,
                password: args.password,
                database: args.database,
            },
            tables: TableNames::with_prefix(&args.prefix),
            output_dir: args.output,
            authors,
            options: ExportOptions {
                post_layout: args.layout,
                include_drafts: args.drafts,
            },
        })
    }
}
