use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_seed(ctx: CommandContext) -> Result<()> {
    let (owner, pets) = tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store().await?;
        let seeded = store.seed().await?;
        store.close().await;
        anyhow::Ok(seeded)
    })?;

    println!(
        "{} owner {} {}",
        "Seeded".green(),
        owner.id.to_string().cyan(),
        owner.name
    );
    for pet in pets {
        println!(
            "  pet {} {} ({})",
            pet.id.to_string().cyan(),
            pet.name,
            pet.animal_type
        );
    }
    Ok(())
}
