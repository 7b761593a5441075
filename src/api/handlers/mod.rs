//! HTTP request handlers for API endpoints.

pub mod dogs;
pub mod health;
pub mod root;

pub use dogs::{
    create_dog_handler, delete_dog_handler, get_dog_handler, list_dogs_handler,
    update_dog_handler,
};
pub use health::health_handler;
pub use root::root_handler;
