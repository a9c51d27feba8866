use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};
use tracing::warn;

use crate::error::PetshopError;
use crate::model::{NewOwner, NewPet};
use crate::storage::DynStore;

use super::types::*;

pub type PetshopSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Returned by `deleteOwner` / `deletePet` when exactly one row was removed.
pub const DELETE_SUCCESS: &str = "Success";

/// Returned by `deleteOwner` / `deletePet` when zero or several rows were removed.
pub const DELETE_FAILURE: &str = "Something went wrong, please check the id and try again";

pub fn build_schema(store: DynStore) -> PetshopSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL of the schema; needs no store since nothing is executed.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DynStore> {
    ctx.data::<DynStore>()
}

pub(super) fn gql_error(err: PetshopError) -> async_graphql::Error {
    err.extend()
}

pub(super) fn parse_id(id: &ID) -> async_graphql::Result<i64> {
    id.parse::<i64>()
        .map_err(|_| gql_error(PetshopError::InvalidId(id.to_string())))
}

fn delete_outcome(entity: &'static str, id: i64, removed: u64) -> String {
    match removed {
        1 => DELETE_SUCCESS.to_string(),
        0 => {
            warn!(entity, id, "Delete matched no rows");
            DELETE_FAILURE.to_string()
        }
        n => {
            warn!(entity, id, rows = n, "Delete removed more than one row");
            DELETE_FAILURE.to_string()
        }
    }
}

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a single pet by ID
    async fn pet(&self, ctx: &Context<'_>, id: Option<ID>) -> async_graphql::Result<Option<Pet>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let pet = store(ctx)?
            .find_pet(parse_id(&id)?)
            .await
            .map_err(gql_error)?;
        Ok(pet.map(Pet::from))
    }

    /// List all pets in store order
    async fn pets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Pet>> {
        let pets = store(ctx)?.find_all_pets().await.map_err(gql_error)?;
        Ok(pets.into_iter().map(Pet::from).collect())
    }

    /// Get a single owner by ID
    async fn owner(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> async_graphql::Result<Option<Owner>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let owner = store(ctx)?
            .find_owner(parse_id(&id)?)
            .await
            .map_err(gql_error)?;
        Ok(owner.map(Owner::from))
    }

    /// List all owners in store order
    async fn owners(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Owner>> {
        let owners = store(ctx)?.find_all_owners().await.map_err(gql_error)?;
        Ok(owners.into_iter().map(Owner::from).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation", rename_args = "snake_case")]
impl MutationRoot {
    /// Create a new owner
    async fn add_owner(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Owner> {
        let owner = store(ctx)?
            .add_owner(NewOwner { name, age })
            .await
            .map_err(gql_error)?;
        Ok(owner.into())
    }

    /// Delete an owner; their pets are left in place
    async fn delete_owner(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        let id = parse_id(&id)?;
        let removed = store(ctx)?.delete_owner(id).await.map_err(gql_error)?;
        Ok(delete_outcome("owner", id, removed))
    }

    /// Create a new pet
    #[allow(clippy::too_many_arguments)]
    async fn add_pet(
        &self,
        ctx: &Context<'_>,
        name: String,
        animal_type: String,
        breed: String,
        age: i32,
        favorite_treat: String,
        owner_id: ID,
    ) -> async_graphql::Result<Pet> {
        let pet = NewPet {
            name,
            animal_type,
            breed,
            age,
            favorite_treat,
            owner_id: parse_id(&owner_id)?,
        };
        let pet = store(ctx)?.add_pet(pet).await.map_err(gql_error)?;
        Ok(pet.into())
    }

    /// Delete a pet
    async fn delete_pet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        let id = parse_id(&id)?;
        let removed = store(ctx)?.delete_pet(id).await.map_err(gql_error)?;
        Ok(delete_outcome("pet", id, removed))
    }
}
