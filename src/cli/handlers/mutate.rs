use anyhow::Result;

use super::CommandContext;
use super::query::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    execute_and_print(ctx, document, variables)
}
