use crate::error::{PetshopError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "petshop.yml";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment-keyed configuration file, e.g.
///
/// ```yaml
/// development:
///   database_url: sqlite://petshop.db?mode=rwc
/// test:
///   database_url: "sqlite::memory:"
///   max_connections: 1
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetshopConfig {
    pub environments: BTreeMap<String, DatabaseSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

fn default_database_url() -> String {
    "sqlite://petshop.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_auto_migrate() -> bool {
    true
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            auto_migrate: default_auto_migrate(),
        }
    }
}

impl DatabaseSettings {
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl PetshopConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads the config file, falling back to an empty config when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Selects the settings block for `environment`.
    ///
    /// An empty config yields defaults for any environment; a populated one must name it.
    pub fn environment(&self, environment: &str) -> Result<DatabaseSettings> {
        if self.environments.is_empty() {
            return Ok(DatabaseSettings::default());
        }
        self.environments.get(environment).cloned().ok_or_else(|| {
            PetshopError::Config(format!(
                "No configuration block for environment '{}' (available: {})",
                environment,
                self.environments
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
