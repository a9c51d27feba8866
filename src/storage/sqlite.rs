use super::store::PetStore;
use crate::{
    config::DatabaseSettings,
    error::Result,
    model::{NewOwner, NewPet, Owner, Pet},
};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const OWNER_COLUMNS: &str = "id, name, age";
const PET_COLUMNS: &str = "id, name, animal_type, breed, age, favorite_treat, owner_id";

/// [`PetStore`] backed by an sqlx SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens a pool for `settings.database_url`.
    ///
    /// Every connection to `sqlite::memory:` is its own database, so in-memory
    /// stores hold exactly one connection that is never closed by the pool.
    #[instrument(skip(settings), fields(url = %settings.database_url))]
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&settings.database_url)?;

        let pool_options = if settings.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(settings.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        info!(
            max_connections = settings.max_connections,
            in_memory = settings.is_in_memory(),
            "Opened SQLite pool"
        );

        let store = Self { pool };
        if settings.auto_migrate {
            store.migrate().await?;
        }
        Ok(store)
    }

    /// Applies the embedded migrations that have not run yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        debug!("Migrations applied");
        Ok(())
    }

    /// Inserts a demo owner with two pets in a single transaction.
    pub async fn seed(&self) -> Result<(Owner, Vec<Pet>)> {
        let mut tx = self.pool.begin().await?;

        let owner: Owner = sqlx::query_as(&format!(
            "INSERT INTO owners (name, age) VALUES (?, ?) RETURNING {OWNER_COLUMNS}"
        ))
        .bind("Ann")
        .bind(30)
        .fetch_one(&mut *tx)
        .await?;

        let fixtures = [
            NewPet::new("Rex", "dog", owner.id)
                .with_breed("lab")
                .with_age(2)
                .with_favorite_treat("bone"),
            NewPet::new("Tom", "cat", owner.id)
                .with_breed("tabby")
                .with_age(5)
                .with_favorite_treat("tuna"),
        ];

        let mut pets = Vec::with_capacity(fixtures.len());
        for pet in fixtures {
            let row: Pet = sqlx::query_as(&insert_pet_sql())
                .bind(pet.name)
                .bind(pet.animal_type)
                .bind(pet.breed)
                .bind(pet.age)
                .bind(pet.favorite_treat)
                .bind(pet.owner_id)
                .fetch_one(&mut *tx)
                .await?;
            pets.push(row);
        }

        tx.commit().await?;
        info!(owner_id = owner.id, pets = pets.len(), "Seeded demo data");
        Ok((owner, pets))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn insert_pet_sql() -> String {
    format!(
        "INSERT INTO pets (name, animal_type, breed, age, favorite_treat, owner_id) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {PET_COLUMNS}"
    )
}

#[async_trait]
impl PetStore for SqliteStore {
    #[instrument(skip(self), level = "debug")]
    async fn find_owner(&self, id: i64) -> Result<Option<Owner>> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners WHERE id = ?");
        let owner: Option<Owner> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(owner)
    }

    #[instrument(skip(self), level = "debug")]
    async fn find_owners_pets(&self, owner_id: i64) -> Result<Vec<Pet>> {
        let pets: Vec<Pet> = sqlx::query_as(
            "SELECT pets.id, pets.name, pets.animal_type, pets.breed, pets.age, \
             pets.favorite_treat, pets.owner_id \
             FROM pets INNER JOIN owners ON owners.id = pets.owner_id \
             WHERE pets.owner_id = ?",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(pets)
    }

    #[instrument(skip(self), level = "debug")]
    async fn find_all_owners(&self) -> Result<Vec<Owner>> {
        let owners: Vec<Owner> = sqlx::query_as(&format!("SELECT {OWNER_COLUMNS} FROM owners"))
            .fetch_all(&self.pool)
            .await?;
        Ok(owners)
    }

    #[instrument(skip(self, owner), level = "debug", fields(name = %owner.name))]
    async fn add_owner(&self, owner: NewOwner) -> Result<Owner> {
        let created: Owner = sqlx::query_as(&format!(
            "INSERT INTO owners (name, age) VALUES (?, ?) RETURNING {OWNER_COLUMNS}"
        ))
        .bind(owner.name)
        .bind(owner.age)
        .fetch_one(&self.pool)
        .await?;
        debug!(id = created.id, "Inserted owner");
        Ok(created)
    }

    #[instrument(skip(self), level = "debug")]
    async fn delete_owner(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM owners WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self), level = "debug")]
    async fn find_pet(&self, id: i64) -> Result<Option<Pet>> {
        let sql = format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?");
        let pet: Option<Pet> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(pet)
    }

    #[instrument(skip(self), level = "debug")]
    async fn find_all_pets(&self) -> Result<Vec<Pet>> {
        let pets: Vec<Pet> = sqlx::query_as(&format!("SELECT {PET_COLUMNS} FROM pets"))
            .fetch_all(&self.pool)
            .await?;
        Ok(pets)
    }

    #[instrument(
        skip(self, pet),
        level = "debug",
        fields(name = %pet.name, owner_id = pet.owner_id)
    )]
    async fn add_pet(&self, pet: NewPet) -> Result<Pet> {
        let created: Pet = sqlx::query_as(&insert_pet_sql())
            .bind(pet.name)
            .bind(pet.animal_type)
            .bind(pet.breed)
            .bind(pet.age)
            .bind(pet.favorite_treat)
            .bind(pet.owner_id)
            .fetch_one(&self.pool)
            .await?;
        debug!(id = created.id, "Inserted pet");
        Ok(created)
    }

    #[instrument(skip(self), level = "debug")]
    async fn delete_pet(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
