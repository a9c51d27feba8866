//! # Petshop - a GraphQL API for owners and their pets
//!
//! Owners and pets live in two SQLite tables and are exposed through a
//! GraphQL schema with basic queries and create/delete mutations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write petshop.yml with development/test/production blocks
//! petshop init
//!
//! # Create the tables and load demo data
//! petshop migrate
//! petshop seed
//!
//! # Query from the command line
//! petshop query '{ owner(id: 1) { name pets { name } } }'
//!
//! # Or serve GraphQL over HTTP
//! petshop serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Environment-keyed configuration
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Owner and pet records
//! - [`storage`]: Data access trait and SQLite implementation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads `petshop.yml` and selects the block for the active environment.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PetshopError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server exposing it.
pub mod graphql;

/// Data models for owners and pets.
pub mod model;

/// Data access layer.
///
/// Defines the `PetStore` trait and its sqlx SQLite implementation.
pub mod storage;

pub mod logging;
