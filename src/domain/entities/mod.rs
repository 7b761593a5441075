//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Dog`] - A dog record as stored
//!
//! Creation and partial update use separate structs: [`NewDog`] and [`DogPatch`].

pub mod dog;

pub use dog::{Dog, DogPatch, NewDog};
