use crate::config::{DatabaseSettings, PetshopConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = PetshopConfig::default();
    config
        .environments
        .insert("development".to_string(), DatabaseSettings::default());
    config.environments.insert(
        "test".to_string(),
        DatabaseSettings {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            auto_migrate: true,
        },
    );
    config.environments.insert(
        "production".to_string(),
        DatabaseSettings {
            database_url: "sqlite://petshop-production.db?mode=rwc".to_string(),
            max_connections: 10,
            auto_migrate: false,
        },
    );

    config.save(config_path)?;

    println!("{} {}", "Wrote".green(), config_path.display());
    for name in config.environments.keys() {
        println!("  Environment: {}", name.cyan());
    }
    Ok(())
}
