use crate::graphql::{build_schema, run_server};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store().await?;
        let schema = build_schema(Arc::new(store));

        println!("Starting GraphQL server on http://{}/graphql", addr);
        println!("GraphiQL: http://{}/graphql", addr);

        run_server(schema, addr).await?;
        anyhow::Ok(())
    })
}
