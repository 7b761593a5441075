//! DTO for plain message responses.

use serde::Serialize;

/// `{"message": "..."}` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
