//! Repository trait for dog records.

use crate::domain::entities::{Dog, NewDog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the dog store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryDogRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_dog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Returns every stored dog ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_all(&self) -> Result<Vec<Dog>, AppError>;

    /// Finds a dog by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, AppError>;

    /// Inserts a new dog and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the record violates a column constraint
    /// (e.g. a missing breed) or on database errors.
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError>;

    /// Overwrites every field of the dog identified by `dog.id`.
    ///
    /// Returns `None` if no such dog exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn update(&self, dog: Dog) -> Result<Option<Dog>, AppError>;

    /// Deletes a dog and returns the removed record, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete(&self, id: i32) -> Result<Option<Dog>, AppError>;

    /// Checks that the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
