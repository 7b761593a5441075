//! Shared state handed to every handler.

use std::sync::Arc;

use crate::api::validation::DogValidator;
use crate::application::services::DogService;
use crate::domain::repositories::DogRepository;

/// Application state injected into handlers via axum's `State` extractor.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub dog_service: Arc<DogService>,
    pub validator: Arc<dyn DogValidator>,
}

impl AppState {
    /// Builds state around a repository and a validation strategy.
    pub fn new(repository: Arc<dyn DogRepository>, validator: Arc<dyn DogValidator>) -> Self {
        Self {
            dog_service: Arc::new(DogService::new(repository)),
            validator,
        }
    }
}
