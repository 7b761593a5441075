//! Dog registry service.

use crate::domain::entities::{Dog, DogPatch, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for reading and mutating dog records.
///
/// Each operation is one store round trip. Callers of [`DogService::update`]
/// fetch the current record first with [`DogService::get`].
pub struct DogService {
    repository: Arc<dyn DogRepository>,
}

impl DogService {
    /// Creates a new dog service.
    pub fn new(repository: Arc<dyn DogRepository>) -> Self {
        Self { repository }
    }

    /// Lists every dog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list(&self) -> Result<Vec<Dog>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a dog by id, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get(&self, id: i32) -> Result<Option<Dog>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Creates a dog from validated input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store rejects the record.
    pub async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        let dog = self.repository.create(new_dog).await?;
        tracing::info!(dog_id = dog.id, "Dog created");
        Ok(dog)
    }

    /// Merges a patch over `current` and writes the result.
    ///
    /// An empty patch returns `current` without touching the store. Returns
    /// `None` if the dog vanished after `current` was read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn update(&self, current: Dog, patch: DogPatch) -> Result<Option<Dog>, AppError> {
        if patch.is_empty() {
            tracing::debug!(dog_id = current.id, "Empty patch, nothing to write");
            return Ok(Some(current));
        }

        let id = current.id;
        let updated = self.repository.update(current.apply(patch)).await?;
        if updated.is_some() {
            tracing::info!(dog_id = id, "Dog updated");
        }
        Ok(updated)
    }

    /// Deletes a dog, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn delete(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(dog_id = id, "Dog deleted");
        }
        Ok(deleted)
    }

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
