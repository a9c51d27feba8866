//! GraphQL schema, resolvers and HTTP server for petshop.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! petshop serve --port 4000
//!
//! # Execute a query from CLI
//! petshop query '{ owners { name pets { name } } }'
//!
//! # Execute a mutation from CLI
//! petshop mutate 'addOwner(name: "Ann", age: 30) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries** (`RootQueryType`): `pet`, `pets`, `owner`, `owners`
//! - **Mutations** (`Mutation`): `addOwner`, `deleteOwner`, `addPet`, `deletePet`
//!
//! Relationship fields (`Owner.pets`, `Pet.owner`) issue one store query per
//! parent object. Store failures surface in the response `errors` array with
//! `extensions.code = "STORE_ERROR"`.

mod schema;
mod server;
mod types;

pub use schema::{
    DELETE_FAILURE, DELETE_SUCCESS, MutationRoot, PetshopSchema, QueryRoot, build_schema,
    schema_sdl,
};
pub use server::{router, run_server};
pub use types::*;
