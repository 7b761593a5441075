//! Handler for the service root.

use axum::Json;

use crate::api::dto::message::MessageResponse;

/// Greets the caller.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World!".to_string(),
    })
}
