use crate::{
    error::Result,
    model::{NewOwner, NewPet, Owner, Pet},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Data access for owners and pets.
///
/// Every method issues exactly one statement; nothing spans a transaction.
/// Lookups by id return `Ok(None)` for a missing row, deletes return the
/// number of rows removed.
#[async_trait]
pub trait PetStore: Send + Sync {
    async fn find_owner(&self, id: i64) -> Result<Option<Owner>>;

    /// Pets joined to their owner, filtered by owner id.
    async fn find_owners_pets(&self, owner_id: i64) -> Result<Vec<Pet>>;

    async fn find_all_owners(&self) -> Result<Vec<Owner>>;

    async fn add_owner(&self, owner: NewOwner) -> Result<Owner>;

    async fn delete_owner(&self, id: i64) -> Result<u64>;

    async fn find_pet(&self, id: i64) -> Result<Option<Pet>>;

    async fn find_all_pets(&self) -> Result<Vec<Pet>>;

    async fn add_pet(&self, pet: NewPet) -> Result<Pet>;

    async fn delete_pet(&self, id: i64) -> Result<u64>;
}

/// Shared store handle passed into the GraphQL schema.
pub type DynStore = Arc<dyn PetStore>;
