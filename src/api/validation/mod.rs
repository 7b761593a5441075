//! Request body validation for dog payloads.
//!
//! Handlers receive the raw JSON body and hand it to a [`DogValidator`], which
//! either produces a typed value ([`NewDog`] / [`DogPatch`]) or the list of
//! violations reported back to the caller.
//!
//! Two strategies are available, selected by [`ValidationMode`]:
//!
//! - [`ManualValidator`] - field-by-field checks, collects every violation
//! - [`SchemaValidator`] - strict typed schema, stops at the first violation

mod manual;
mod schema;

pub use manual::ManualValidator;
pub use schema::SchemaValidator;

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{DogPatch, NewDog};

/// Field names accepted in create and update bodies.
pub const ALLOWED_KEYS: [&str; 4] = ["name", "age", "breed", "description"];

pub(crate) const BODY_NOT_OBJECT: &str = "request body should be a JSON object";

/// Turns an untrusted JSON body into typed dog input.
pub trait DogValidator: Send + Sync {
    /// Validates a full creation body.
    ///
    /// # Errors
    ///
    /// Returns human-readable violation messages, never empty.
    fn validate_create(&self, body: &Value) -> Result<NewDog, Vec<String>>;

    /// Validates a partial update body.
    ///
    /// # Errors
    ///
    /// Returns human-readable violation messages, never empty.
    fn validate_update(&self, body: &Value) -> Result<DogPatch, Vec<String>>;

    /// Strategy name for logs and health output.
    fn name(&self) -> &'static str;
}

/// Selects the validation strategy used by the dog handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Manual,
    Schema,
}

impl ValidationMode {
    /// Builds the validator for this mode.
    pub fn validator(self) -> Arc<dyn DogValidator> {
        match self {
            ValidationMode::Manual => Arc::new(ManualValidator),
            ValidationMode::Schema => Arc::new(SchemaValidator),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "schema" => Ok(Self::Schema),
            other => Err(format!(
                "unknown validation mode '{other}', expected 'manual' or 'schema'"
            )),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Manual => f.write_str("manual"),
            ValidationMode::Schema => f.write_str("schema"),
        }
    }
}

pub(crate) const AGE_NOT_NUMBER: &str = "age should be a number";
pub(crate) const AGE_NOT_INTEGER: &str = "age should be an integer";

/// Reads a JSON number as an `i32` age.
///
/// Integral floats such as `3.0` are accepted. Fractions and values outside
/// the `i32` range are numbers but not ages.
pub(crate) fn as_age(value: &Value) -> Result<i32, &'static str> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).map_err(|_| AGE_NOT_INTEGER);
    }

    let f = value.as_f64().ok_or(AGE_NOT_NUMBER)?;
    if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Ok(f as i32)
    } else {
        Err(AGE_NOT_INTEGER)
    }
}

pub(crate) fn is_allowed_key(key: &str) -> bool {
    ALLOWED_KEYS.contains(&key)
}

pub(crate) fn invalid_key_message(key: &str) -> String {
    format!("'{key}' is not a valid key")
}
