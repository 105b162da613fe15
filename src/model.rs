//! Row types for `pets` and `adoption_requests`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdoptionRequest {
    pub id: i32,
    pub pet_id: i32,
    pub adopter_name: String,
    pub adopter_email: String,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Adoption request joined with the name of the pet it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdoptionRequestWithPet {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub request: AdoptionRequest,
    pub pet_name: String,
}

/// Validated input for a new adoption request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdoptionRequest {
    pub pet_id: i32,
    pub adopter_name: String,
    pub adopter_email: String,
    pub message: Option<String>,
}

/// A row for the startup seed.
pub struct SeedPet {
    pub name: &'static str,
    pub species: &'static str,
    pub breed: &'static str,
    pub age: i32,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SEED_PETS: &[SeedPet] = &[
    SeedPet {
        name: "Luna",
        species: "Dog",
        breed: "Golden Retriever",
        age: 2,
        description: "Friendly and loves to play fetch!",
        image_url: "https://images.unsplash.com/photo-1633722715463-d30f4f325e24?w=400",
    },
    SeedPet {
        name: "Mittens",
        species: "Cat",
        breed: "Tabby",
        age: 3,
        description: "Calm and loves cuddles",
        image_url: "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400",
    },
    SeedPet {
        name: "Max",
        species: "Dog",
        breed: "Beagle",
        age: 4,
        description: "Energetic and great with kids",
        image_url: "https://images.unsplash.com/photo-1505628346881-b72b27e84530?w=400",
    },
    SeedPet {
        name: "Whiskers",
        species: "Cat",
        breed: "Persian",
        age: 1,
        description: "Playful kitten looking for a home",
        image_url: "https://images.unsplash.com/photo-1495360010541-f48722b34f7d?w=400",
    },
];
