//! In-memory `PetStore` for router tests. Mirrors what PostgreSQL enforces:
//! serial ids, `created_at DESC` ordering, and the `pet_id` foreign key.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{self, Request};
use axum::Router;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use pawsconnect::model::SEED_PETS;
use pawsconnect::{
    app, AdoptionRequest, AdoptionRequestWithPet, AppState, NewAdoptionRequest, Pet, PetStore, StoreError,
};
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Tables {
    pets: Vec<Pet>,
    adoptions: Vec<AdoptionRequest>,
    ticks: i64,
    schema_created: bool,
}

impl Tables {
    /// Strictly increasing timestamps so insertion order is observable.
    fn now(&mut self) -> NaiveDateTime {
        self.ticks += 1;
        base_time() + Duration::seconds(self.ticks)
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

#[derive(Default)]
pub struct InMemoryPetStore {
    tables: RwLock<Tables>,
}

impl InMemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pet(self, name: &str, species: &str) -> Self {
        {
            let mut t = self.tables.write().unwrap();
            let created_at = t.now();
            let id = t.pets.len() as i32 + 1;
            t.pets.push(Pet {
                id,
                name: name.into(),
                species: species.into(),
                breed: None,
                age: Some(1),
                description: None,
                image_url: None,
                created_at,
            });
        }
        self
    }

    pub fn pet_count(&self) -> usize {
        self.tables.read().unwrap().pets.len()
    }

    pub fn adoptions(&self) -> Vec<AdoptionRequest> {
        self.tables.read().unwrap().adoptions.clone()
    }

    pub fn schema_created(&self) -> bool {
        self.tables.read().unwrap().schema_created
    }
}

#[async_trait]
impl PetStore for InMemoryPetStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.tables.write().unwrap().schema_created = true;
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<u64, StoreError> {
        let mut t = self.tables.write().unwrap();
        if !t.pets.is_empty() {
            return Ok(0);
        }
        for seed in SEED_PETS {
            let created_at = t.now();
            let id = t.pets.len() as i32 + 1;
            t.pets.push(Pet {
                id,
                name: seed.name.into(),
                species: seed.species.into(),
                breed: Some(seed.breed.into()),
                age: Some(seed.age),
                description: Some(seed.description.into()),
                image_url: Some(seed.image_url.into()),
                created_at,
            });
        }
        Ok(SEED_PETS.len() as u64)
    }

    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        let mut pets = self.tables.read().unwrap().pets.clone();
        pets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pets)
    }

    async fn get_pet(&self, id: i32) -> Result<Option<Pet>, StoreError> {
        Ok(self.tables.read().unwrap().pets.iter().find(|p| p.id == id).cloned())
    }

    async fn create_adoption(&self, new: &NewAdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        let mut t = self.tables.write().unwrap();
        if !t.pets.iter().any(|p| p.id == new.pet_id) {
            return Err(StoreError::ForeignKey(format!("pet {} does not exist", new.pet_id)));
        }
        let created_at = t.now();
        let row = AdoptionRequest {
            id: t.adoptions.len() as i32 + 1,
            pet_id: new.pet_id,
            adopter_name: new.adopter_name.clone(),
            adopter_email: new.adopter_email.clone(),
            message: new.message.clone(),
            created_at,
        };
        t.adoptions.push(row.clone());
        Ok(row)
    }

    async fn list_adoptions(&self) -> Result<Vec<AdoptionRequestWithPet>, StoreError> {
        let t = self.tables.read().unwrap();
        let mut rows: Vec<_> = t
            .adoptions
            .iter()
            .filter_map(|a| {
                t.pets.iter().find(|p| p.id == a.pet_id).map(|p| AdoptionRequestWithPet {
                    request: a.clone(),
                    pet_name: p.name.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.request.created_at.cmp(&a.request.created_at));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Every operation fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl PetStore for FailingStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn seed_if_empty(&self) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_pet(&self, _id: i32) -> Result<Option<Pet>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create_adoption(&self, _new: &NewAdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_adoptions(&self) -> Result<Vec<AdoptionRequestWithPet>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn router(store: Arc<dyn PetStore>) -> Router {
    app(AppState::new(store), concat!(env!("CARGO_MANIFEST_DIR"), "/frontend"))
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder().uri(uri).body(axum::body::Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}
