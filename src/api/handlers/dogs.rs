//! Handlers for the dog resource (list, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::dog::DogResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Parses a path id, answering 400 on anything that is not an integer.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim().parse().map_err(|_| AppError::InvalidId)
}

/// Lists all dogs.
///
/// # Endpoint
///
/// `GET /dogs`
pub async fn list_dogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogResponse>>, AppError> {
    let dogs = state.dog_service.list().await?;

    Ok(Json(dogs.into_iter().map(DogResponse::from).collect()))
}

/// Fetches a single dog.
///
/// # Endpoint
///
/// `GET /dogs/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a number.
/// Returns 204 No Content if no dog has this id.
pub async fn get_dog_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DogResponse>, AppError> {
    let id = parse_id(&id)?;

    let dog = state
        .dog_service
        .get(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(dog.into()))
}

/// Creates a dog.
///
/// # Endpoint
///
/// `POST /dogs`
///
/// # Request Body
///
/// ```json
/// { "name": "Rex", "age": 3, "breed": "Labrador", "description": "friendly" }
/// ```
///
/// # Errors
///
/// Returns 400 with `{"errors": [...]}` if validation fails.
/// Returns 400 with a generic message if the store rejects the record.
pub async fn create_dog_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    let new_dog = state
        .validator
        .validate_create(&body)
        .map_err(AppError::validation)?;

    let dog = state.dog_service.create(new_dog).await?;

    Ok((StatusCode::CREATED, Json(dog.into())))
}

/// Partially updates a dog.
///
/// # Endpoint
///
/// `PATCH /dogs/{id}`
///
/// All fields are optional. Only provided fields are changed. The record is
/// looked up before the body is validated.
///
/// # Errors
///
/// Returns 400 if `id` is not a number.
/// Returns 204 No Content if no dog has this id.
/// Returns 400 with `{"errors": [...]}` if validation fails.
pub async fn update_dog_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    let id = parse_id(&id)?;

    let current = state
        .dog_service
        .get(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let patch = state
        .validator
        .validate_update(&body)
        .map_err(AppError::validation)?;

    let dog = state
        .dog_service
        .update(current, patch)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok((StatusCode::CREATED, Json(dog.into())))
}

/// Deletes a dog and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /dogs/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a number.
/// Returns 204 No Content if nothing was deleted, including when the store
/// refuses the delete.
pub async fn delete_dog_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DogResponse>, AppError> {
    let id = parse_id(&id)?;

    match state.dog_service.delete(id).await {
        Ok(Some(dog)) => Ok(Json(dog.into())),
        Ok(None) => Err(AppError::NotFound),
        Err(e) => {
            tracing::warn!(error = %e, dog_id = id, "Failed to delete dog");
            Err(AppError::NotFound)
        }
    }
}
