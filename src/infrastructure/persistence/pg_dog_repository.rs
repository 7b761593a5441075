//! PostgreSQL implementation of the dog repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Dog, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;

/// PostgreSQL repository for dog records.
///
/// Column constraints (`NOT NULL` on every field) are the last line of
/// enforcement for the record invariants.
pub struct PgDogRepository {
    pool: Arc<PgPool>,
}

impl PgDogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for PgDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>, AppError> {
        let dogs = sqlx::query_as::<_, Dog>(
            r#"
            SELECT id, name, age, breed, description
            FROM dogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(dogs)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let dog = sqlx::query_as::<_, Dog>(
            r#"
            SELECT id, name, age, breed, description
            FROM dogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(dog)
    }

    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        let dog = sqlx::query_as::<_, Dog>(
            r#"
            INSERT INTO dogs (name, age, breed, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(new_dog.name)
        .bind(new_dog.age)
        .bind(new_dog.breed)
        .bind(new_dog.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(dog)
    }

    async fn update(&self, dog: Dog) -> Result<Option<Dog>, AppError> {
        let updated = sqlx::query_as::<_, Dog>(
            r#"
            UPDATE dogs SET
                name        = $2,
                age         = $3,
                breed       = $4,
                description = $5
            WHERE id = $1
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(dog.id)
        .bind(dog.name)
        .bind(dog.age)
        .bind(dog.breed)
        .bind(dog.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let deleted = sqlx::query_as::<_, Dog>(
            r#"
            DELETE FROM dogs
            WHERE id = $1
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(deleted)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
