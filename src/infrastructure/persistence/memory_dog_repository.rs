//! In-process dog repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Dog, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;

/// A repository that keeps dogs in a map guarded by an async lock.
///
/// Mirrors the PostgreSQL table semantics: ids come from a monotonically
/// increasing sequence (never reused after delete) and a dog without a breed
/// is rejected like a `NOT NULL` violation.
///
/// # Use Cases
///
/// - Local development without a database
/// - HTTP-level tests
pub struct InMemoryDogRepository {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Dog>,
}

impl InMemoryDogRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using InMemoryDogRepository");
        Self {
            inner: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryDogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>, AppError> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        let breed = new_dog.breed.ok_or_else(|| {
            AppError::store("null value in column \"breed\" violates not-null constraint")
        })?;

        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let dog = Dog::new(id, new_dog.name, new_dog.age, breed, new_dog.description);
        table.rows.insert(id, dog.clone());

        Ok(dog)
    }

    async fn update(&self, dog: Dog) -> Result<Option<Dog>, AppError> {
        let mut table = self.inner.write().await;

        match table.rows.get_mut(&dog.id) {
            Some(row) => {
                *row = dog.clone();
                Ok(Some(dog))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
