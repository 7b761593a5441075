#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use dog_shelter::api::handlers::{health_handler, root_handler};
use dog_shelter::api::routes::dog_routes;
use dog_shelter::domain::repositories::DogRepository;
use dog_shelter::infrastructure::persistence::InMemoryDogRepository;
use dog_shelter::prelude::*;

pub const BOTH_MODES: [ValidationMode; 2] = [ValidationMode::Manual, ValidationMode::Schema];

/// A repository whose every call fails, standing in for an unreachable database.
pub struct FailingDogRepository;

#[async_trait]
impl DogRepository for FailingDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Dog>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn create(&self, _new_dog: NewDog) -> Result<Dog, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn update(&self, _dog: Dog) -> Result<Option<Dog>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn delete(&self, _id: i32) -> Result<Option<Dog>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::store("connection refused"))
    }
}

pub fn create_test_state(repository: Arc<dyn DogRepository>, mode: ValidationMode) -> AppState {
    AppState::new(repository, mode.validator())
}

pub fn make_server_with(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(dog_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn make_server(mode: ValidationMode) -> TestServer {
    make_server_with(create_test_state(
        Arc::new(InMemoryDogRepository::new()),
        mode,
    ))
}

pub fn failing_server(mode: ValidationMode) -> TestServer {
    make_server_with(create_test_state(Arc::new(FailingDogRepository), mode))
}

pub fn rex() -> Value {
    json!({
        "name": "Rex",
        "age": 3,
        "breed": "Lab",
        "description": "friendly"
    })
}

/// Creates a dog through the API and returns its id.
pub async fn create_dog(server: &TestServer, body: &Value) -> i64 {
    let response = server.post("/dogs").json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
