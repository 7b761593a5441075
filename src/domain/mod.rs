//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or infrastructure layers.

pub mod entities;
pub mod repositories;
