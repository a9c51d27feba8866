use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: i32,
    pub favorite_treat: String,

    /// Not checked against `owners`: a pet outlives a deleted owner.
    pub owner_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: i32,
    pub favorite_treat: String,
    pub owner_id: i64,
}

impl NewPet {
    pub fn new(name: impl Into<String>, animal_type: impl Into<String>, owner_id: i64) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            breed: String::new(),
            age: 0,
            favorite_treat: String::new(),
            owner_id,
        }
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_favorite_treat(mut self, treat: impl Into<String>) -> Self {
        self.favorite_treat = treat.into();
        self
    }
}
