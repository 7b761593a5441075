//! Business logic services for the application layer.

pub mod dog_service;

pub use dog_service::DogService;
