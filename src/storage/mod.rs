//! Data access layer for petshop.
//!
//! All reads and writes go through the [`PetStore`] trait so the GraphQL layer
//! can be exercised against any backend. [`SqliteStore`] is the shipped
//! implementation; its schema lives in the crate's `migrations/` directory.
//!
//! ## Components
//!
//! - [`PetStore`]: Single-statement operations on owners and pets
//! - [`DynStore`]: Shared handle injected into the GraphQL schema
//! - [`SqliteStore`]: sqlx-backed implementation with migrations and seeding

mod sqlite;
mod store;

pub use sqlite::SqliteStore;
pub use store::{DynStore, PetStore};
