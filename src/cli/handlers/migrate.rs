use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_migrate(ctx: CommandContext) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store().await?;
        store.migrate().await?;
        store.close().await;
        anyhow::Ok(())
    })?;

    println!(
        "{} {} ({})",
        "Migrated".green(),
        ctx.settings.database_url,
        ctx.environment.cyan()
    );
    Ok(())
}
