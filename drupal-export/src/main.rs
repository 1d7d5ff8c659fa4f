use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use drupal_export::{CliArgs, ExportConfig, SiteExporter, SiteWriter};
use drupal_export_repository::MySqlContentRepository;
use drupal_export_repository::mysql;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drupal_export=info,drupal_export_repository=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before parsing so it can supply option defaults
    dotenv::dotenv().ok();
    init_tracing();

    let config = ExportConfig::from_args(CliArgs::parse())?;
    info!(
        database = %config.connection.database,
        host = %config.connection.host,
        port = config.connection.port,
        output = %config.output_dir.display(),
        authors = config.authors.len(),
        "Starting Drupal to Jekyll export"
    );

    let pool = mysql::connect(&config.connection)
        .await
        .context("Failed to connect to MySQL")?;
    info!("✓ Connected to MySQL");

    let repository = Arc::new(MySqlContentRepository::new(pool, &config.tables));
    let exporter = SiteExporter::new(
        repository,
        SiteWriter::new(config.output_dir),
        config.authors,
        config.options,
    );
    exporter.run().await?;

    Ok(())
}
