mod init;
mod migrate;
mod mutate;
mod query;
mod schema;
mod seed;
mod serve;

pub use init::handle_init;
pub use migrate::handle_migrate;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::handle_serve;

use crate::config::{DatabaseSettings, PetshopConfig};
use crate::storage::SqliteStore;
use anyhow::{Context, Result};
use std::path::Path;

/// Common context passed to all command handlers that touch the database
pub struct CommandContext {
    pub environment: String,
    pub settings: DatabaseSettings,
}

impl CommandContext {
    pub fn load(
        config_path: &Path,
        environment: &str,
        database_url: Option<String>,
    ) -> Result<Self> {
        let config = PetshopConfig::load(config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        let mut settings = config.environment(environment)?;
        if let Some(url) = database_url {
            settings.database_url = url;
        }
        Ok(Self {
            environment: environment.to_string(),
            settings,
        })
    }

    pub async fn open_store(&self) -> Result<SqliteStore> {
        tracing::debug!(environment = %self.environment, "Opening store");
        let store = SqliteStore::connect(&self.settings)
            .await
            .with_context(|| format!("Failed to open {}", self.settings.database_url))?;
        Ok(store)
    }
}
