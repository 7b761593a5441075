//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod dog_repository;

pub use dog_repository::DogRepository;

#[cfg(test)]
pub use dog_repository::MockDogRepository;
