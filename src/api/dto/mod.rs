//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. The strict
//! request DTOs double as the schema for [`crate::api::validation::SchemaValidator`].

pub mod dog;
pub mod health;
pub mod message;
