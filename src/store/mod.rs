//! Storage seam: one method per API operation, plus schema setup.

mod postgres;
pub mod schema;

pub use postgres::{ensure_database_exists, PgStore};

use crate::error::StoreError;
use crate::model::{AdoptionRequest, AdoptionRequestWithPet, NewAdoptionRequest, Pet};
use async_trait::async_trait;

#[async_trait]
pub trait PetStore: Send + Sync {
    /// Create `pets` and `adoption_requests` if they do not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Insert the seed pets when `pets` is empty. Returns the number of rows inserted.
    async fn seed_if_empty(&self) -> Result<u64, StoreError>;

    /// All pets, newest first.
    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError>;

    async fn get_pet(&self, id: i32) -> Result<Option<Pet>, StoreError>;

    /// Single insert; a missing pet surfaces as `StoreError::ForeignKey`.
    async fn create_adoption(&self, new: &NewAdoptionRequest) -> Result<AdoptionRequest, StoreError>;

    /// All adoption requests with their pet's name, newest first.
    async fn list_adoptions(&self) -> Result<Vec<AdoptionRequestWithPet>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
