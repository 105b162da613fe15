//! Shared application state for all routes.

use crate::store::PetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Created once at startup; every handler borrows the same pool through it.
    pub store: Arc<dyn PetStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self { store }
    }
}
