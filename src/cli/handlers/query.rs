use crate::graphql::build_schema;
use anyhow::Result;
use std::sync::Arc;

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    document: String,
    variables: Option<String>,
) -> Result<()> {
    execute_and_print(ctx, document, variables)
}

/// Runs one document against a freshly opened store and prints the response.
pub(super) fn execute_and_print(
    ctx: CommandContext,
    document: String,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store().await?;
        let schema = build_schema(Arc::new(store.clone()));
        let request = async_graphql::Request::new(document).variables(vars);
        let response = schema.execute(request).await;
        store.close().await;
        anyhow::Ok(response)
    })?;

    if response.is_err() {
        for error in &response.errors {
            tracing::warn!(message = %error.message, "GraphQL error");
        }
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
