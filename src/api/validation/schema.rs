//! Strict schema validation backed by the typed request DTOs.

use serde_json::Value;

use super::{BODY_NOT_OBJECT, DogValidator};
use crate::api::dto::dog::{CreateDogRequest, UpdateDogRequest};
use crate::domain::entities::{DogPatch, NewDog};

/// Validates bodies by deserializing them into
/// [`CreateDogRequest`] / [`UpdateDogRequest`].
///
/// Deserialization stops at the first problem, so at most one message is
/// reported per request (plus one per explicit `null` on update).
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator;

fn deserialize<T: serde::de::DeserializeOwned>(body: &Value) -> Result<T, Vec<String>> {
    if !body.is_object() {
        return Err(vec![BODY_NOT_OBJECT.to_string()]);
    }

    T::deserialize(body).map_err(|e| vec![e.to_string()])
}

fn not_null<T>(field: &str, value: Option<Option<T>>, errors: &mut Vec<String>) -> Option<T> {
    match value {
        Some(None) => {
            errors.push(format!("{field} must not be null"));
            None
        }
        Some(inner) => inner,
        None => None,
    }
}

impl DogValidator for SchemaValidator {
    fn validate_create(&self, body: &Value) -> Result<NewDog, Vec<String>> {
        let request: CreateDogRequest = deserialize(body)?;

        Ok(NewDog {
            name: request.name,
            age: request.age.0,
            breed: Some(request.breed),
            description: request.description,
        })
    }

    fn validate_update(&self, body: &Value) -> Result<DogPatch, Vec<String>> {
        let request: UpdateDogRequest = deserialize(body)?;
        let mut errors = Vec::new();

        let patch = DogPatch {
            name: not_null("name", request.name, &mut errors),
            age: not_null("age", request.age, &mut errors).map(|age| age.0),
            breed: not_null("breed", request.breed, &mut errors),
            description: not_null("description", request.description, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    fn name(&self) -> &'static str {
        "schema"
    }
}
