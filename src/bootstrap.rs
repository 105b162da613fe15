//! One-time startup: schema creation and seeding, run before the listener accepts traffic.

use crate::error::StoreError;
use crate::store::PetStore;

/// Ensure both tables exist and seed sample pets into an empty `pets` table.
/// Safe to run on every start; callers should treat an error as fatal.
pub async fn initialize(store: &dyn PetStore) -> Result<(), StoreError> {
    store.ensure_schema().await?;
    let seeded = store.seed_if_empty().await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "seeded sample pets");
    } else {
        tracing::debug!("pets already present, skipping seed");
    }
    Ok(())
}
