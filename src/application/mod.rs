//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::dog_service::DogService`] - Dog CRUD and partial-update merging

pub mod services;
