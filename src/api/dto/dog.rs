//! DTOs for the dog endpoints.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::api::validation::as_age;
use crate::domain::entities::Dog;

/// JSON representation of a dog.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DogResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            id: dog.id,
            name: dog.name,
            age: dog.age,
            breed: dog.breed,
            description: dog.description,
        }
    }
}

/// A dog age read from JSON: any whole number that fits in an `i32`, so
/// `4` and `4.0` are the same age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age(pub i32);

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        as_age(&value).map(Age).map_err(de::Error::custom)
    }
}

/// Strict request body for `POST /dogs` in schema validation mode.
///
/// Every field is required and unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDogRequest {
    pub name: String,
    pub age: Age,
    pub breed: String,
    pub description: String,
}

/// Strict partial request body for `PATCH /dogs/{id}` in schema validation mode.
///
/// # Field semantics
///
/// - **Absent** → leave the stored value unchanged
/// - **`null`** → rejected, the record fields are never nullable
/// - **Value** → must match the field type
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDogRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub age: Option<Option<Age>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub breed: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}
