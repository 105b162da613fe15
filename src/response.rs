//! Response bodies shared by handlers.

use crate::model::AdoptionRequest;
use serde::{Deserialize, Serialize};

/// Every non-2xx response carries only this.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    pub status: &'static str,
    pub database: &'static str,
}

pub const ADOPTION_SUBMITTED: &str = "Adoption request submitted successfully!";

#[derive(Serialize, Deserialize, Debug)]
pub struct AdoptionCreated {
    pub message: String,
    pub request: AdoptionRequest,
}

impl AdoptionCreated {
    pub fn new(request: AdoptionRequest) -> Self {
        Self {
            message: ADOPTION_SUBMITTED.to_string(),
            request,
        }
    }
}
