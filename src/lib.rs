//! PawsConnect: pet adoption listing REST backend library.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use bootstrap::initialize;
pub use config::Config;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{AdoptionRequest, AdoptionRequestWithPet, NewAdoptionRequest, Pet};
pub use routes::{api_routes, app};
pub use state::AppState;
pub use store::{ensure_database_exists, PetStore, PgStore};
pub use validation::AdoptionValidator;
