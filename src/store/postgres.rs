//! PostgreSQL implementation of `PetStore`.

use super::schema;
use super::PetStore;
use crate::error::StoreError;
use crate::model::{AdoptionRequest, AdoptionRequestWithPet, NewAdoptionRequest, Pet, SEED_PETS};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgPool};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetStore for PgStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(schema::CREATE_PETS).execute(&self.pool).await?;
        sqlx::query(schema::CREATE_ADOPTION_REQUESTS).execute(&self.pool).await?;
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as(schema::COUNT_PETS).fetch_one(&self.pool).await?;
        if count > 0 {
            return Ok(0);
        }
        let mut tx = self.pool.begin().await?;
        for pet in SEED_PETS {
            sqlx::query(schema::INSERT_PET)
                .bind(pet.name)
                .bind(pet.species)
                .bind(pet.breed)
                .bind(pet.age)
                .bind(pet.description)
                .bind(pet.image_url)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(SEED_PETS.len() as u64)
    }

    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        let rows = sqlx::query_as::<_, Pet>(schema::SELECT_PETS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_pet(&self, id: i32) -> Result<Option<Pet>, StoreError> {
        let row = sqlx::query_as::<_, Pet>(schema::SELECT_PET_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_adoption(&self, new: &NewAdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        sqlx::query_as::<_, AdoptionRequest>(schema::INSERT_ADOPTION)
            .bind(new.pet_id)
            .bind(&new.adopter_name)
            .bind(&new.adopter_email)
            .bind(new.message.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_insert)
    }

    async fn list_adoptions(&self) -> Result<Vec<AdoptionRequestWithPet>, StoreError> {
        let rows = sqlx::query_as::<_, AdoptionRequestWithPet>(schema::SELECT_ADOPTIONS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Make sure the target database is reachable, creating it through the server's `postgres`
/// database only when the server reports it missing.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), StoreError> {
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    match options.connect().await {
        Ok(conn) => {
            conn.close().await?;
            return Ok(());
        }
        Err(e) if is_missing_database(&e) => {
            tracing::debug!(database = %db_name, "database missing, creating");
        }
        Err(e) => return Err(e.into()),
    }
    let mut conn = options.clone().database("postgres").connect().await?;
    sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
        .execute(&mut conn)
        .await?;
    conn.close().await?;
    tracing::info!(database = %db_name, "created database");
    Ok(())
}

/// SQLSTATE 3D000 (invalid_catalog_name).
fn is_missing_database(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("3D000"))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
