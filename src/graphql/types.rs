use crate::model;
use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use super::schema::{gql_error, parse_id, store};

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct Owner {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

#[ComplexObject]
impl Owner {
    /// Pets whose `owner_id` is this owner, fetched per owner
    async fn pets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Pet>> {
        let owner_id = parse_id(&self.id)?;
        let pets = store(ctx)?
            .find_owners_pets(owner_id)
            .await
            .map_err(gql_error)?;
        Ok(pets.into_iter().map(Pet::from).collect())
    }
}

impl From<model::Owner> for Owner {
    fn from(o: model::Owner) -> Self {
        Self {
            id: ID::from(o.id.to_string()),
            name: o.name,
            age: o.age,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Pet {
    pub id: ID,
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: i32,
    pub favorite_treat: String,

    #[graphql(skip)]
    pub owner_id: i64,
}

#[ComplexObject]
impl Pet {
    /// The owner referenced by this pet, or null once that owner is deleted
    async fn owner(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Owner>> {
        let owner = store(ctx)?
            .find_owner(self.owner_id)
            .await
            .map_err(gql_error)?;
        Ok(owner.map(Owner::from))
    }
}

impl From<model::Pet> for Pet {
    fn from(p: model::Pet) -> Self {
        Self {
            id: ID::from(p.id.to_string()),
            name: p.name,
            animal_type: p.animal_type,
            breed: p.breed,
            age: p.age,
            favorite_treat: p.favorite_treat,
            owner_id: p.owner_id,
        }
    }
}
