//! Field-by-field validation that reports every violation at once.

use serde_json::{Map, Value};

use super::{
    AGE_NOT_NUMBER, BODY_NOT_OBJECT, DogValidator, as_age, invalid_key_message, is_allowed_key,
};
use crate::domain::entities::{DogPatch, NewDog};

fn string_message(field: &str) -> String {
    format!("{field} should be a string")
}

/// Checks each field by hand and collects all failures.
///
/// On create, `age`, `name` and `description` are type-checked in that order,
/// then every key outside the allow-list is reported. `breed` is not
/// type-checked on create: a missing or non-string breed is forwarded as
/// `None` and the store refuses it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualValidator;

impl ManualValidator {
    fn object(body: &Value) -> Result<&Map<String, Value>, Vec<String>> {
        body.as_object().ok_or_else(|| vec![BODY_NOT_OBJECT.to_string()])
    }

    fn unknown_keys(map: &Map<String, Value>, errors: &mut Vec<String>) {
        errors.extend(
            map.keys()
                .filter(|key| !is_allowed_key(key))
                .map(|key| invalid_key_message(key)),
        );
    }
}

impl DogValidator for ManualValidator {
    fn validate_create(&self, body: &Value) -> Result<NewDog, Vec<String>> {
        let map = Self::object(body)?;
        let mut errors = Vec::new();

        let age = match map.get("age").map_or(Err(AGE_NOT_NUMBER), as_age) {
            Ok(age) => Some(age),
            Err(message) => {
                errors.push(message.to_string());
                None
            }
        };

        let name = map.get("name").and_then(Value::as_str);
        if name.is_none() {
            errors.push(string_message("name"));
        }

        let description = map.get("description").and_then(Value::as_str);
        if description.is_none() {
            errors.push(string_message("description"));
        }

        Self::unknown_keys(map, &mut errors);

        match (name, age, description) {
            (Some(name), Some(age), Some(description)) if errors.is_empty() => Ok(NewDog {
                name: name.to_string(),
                age,
                breed: map
                    .get("breed")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                description: description.to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn validate_update(&self, body: &Value) -> Result<DogPatch, Vec<String>> {
        let map = Self::object(body)?;
        let mut errors = Vec::new();
        let mut patch = DogPatch::default();

        for (key, value) in map {
            match key.as_str() {
                "age" => match as_age(value) {
                    Ok(age) => patch.age = Some(age),
                    Err(message) => errors.push(message.to_string()),
                },
                "name" | "breed" | "description" => match value.as_str() {
                    Some(text) => {
                        let text = Some(text.to_string());
                        match key.as_str() {
                            "name" => patch.name = text,
                            "breed" => patch.breed = text,
                            _ => patch.description = text,
                        }
                    }
                    None => errors.push(string_message(key)),
                },
                _ => errors.push(invalid_key_message(key)),
            }
        }

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}
