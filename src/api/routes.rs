//! API route configuration.

use crate::api::handlers::{
    create_dog_handler, delete_dog_handler, get_dog_handler, list_dogs_handler,
    update_dog_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Dog resource routes.
///
/// # Endpoints
///
/// - `GET    /dogs`        - List all dogs
/// - `POST   /dogs`        - Create a dog
/// - `GET    /dogs/{id}`   - Fetch a dog
/// - `PATCH  /dogs/{id}`   - Partially update a dog
/// - `DELETE /dogs/{id}`   - Delete a dog
pub fn dog_routes() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_dogs_handler).post(create_dog_handler))
        .route(
            "/dogs/{id}",
            get(get_dog_handler)
                .patch(update_dog_handler)
                .delete(delete_dog_handler),
        )
}
