// MySQL connection setup
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::errors::ContentRepositoryError;

// Rows are consumed one at a time, a single connection is enough.
const MAX_CONNECTIONS: u32 = 1;

/// Where the source Drupal database lives.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectionSettings {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Connect to MySQL and return a connection pool
pub async fn connect(settings: &ConnectionSettings) -> Result<MySqlPool, ContentRepositoryError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(settings.connect_options())
        .await?;

    Ok(pool)
}
