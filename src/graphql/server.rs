use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tracing::info;

use crate::error::Result;

use super::schema::PetshopSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// `POST /graphql` executes documents, `GET /graphql` serves GraphiQL.
pub fn router(schema: PetshopSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/health", get(health))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

pub async fn run_server(schema: PetshopSchema, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}
