//! Request body validation for adoption submissions.

use crate::error::AppError;
use crate::model::NewAdoptionRequest;
use serde_json::{Map, Value};

pub const MISSING_REQUIRED: &str = "Missing required fields";

pub struct AdoptionValidator;

impl AdoptionValidator {
    /// Turn a raw JSON body into a `NewAdoptionRequest`.
    /// `pet_id`, `adopter_name` and `adopter_email` must be present and non-empty;
    /// null, `0`, `false` and `""` count as absent. Pet existence is left to the database.
    pub fn validate(body: Value) -> Result<NewAdoptionRequest, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::BadRequest("Invalid JSON body".into()));
        };
        let pet_id = required(&map, "pet_id");
        let adopter_name = required(&map, "adopter_name");
        let adopter_email = required(&map, "adopter_email");
        let (Some(pet_id), Some(adopter_name), Some(adopter_email)) = (pet_id, adopter_name, adopter_email) else {
            return Err(AppError::BadRequest(MISSING_REQUIRED.into()));
        };

        Ok(NewAdoptionRequest {
            pet_id: parse_pet_id(pet_id)?,
            adopter_name: text("adopter_name", adopter_name)?,
            adopter_email: text("adopter_email", adopter_email)?,
            message: match map.get("message") {
                None | Some(Value::Null) => None,
                Some(v) => Some(text("message", v)?),
            },
        })
    }
}

fn required<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    map.get(field).filter(|v| !is_blank(v))
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn parse_pet_id(v: &Value) -> Result<i32, AppError> {
    let invalid = || AppError::BadRequest("Invalid pet_id".into());
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0).map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn text(field: &str, v: &Value) -> Result<String, AppError> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}", field)))
}
