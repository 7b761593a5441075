//! Dog repository implementations.
//!
//! - [`PgDogRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryDogRepository`] - process-local storage for development and tests

pub mod memory_dog_repository;
pub mod pg_dog_repository;

pub use memory_dog_repository::InMemoryDogRepository;
pub use pg_dog_repository::PgDogRepository;
