mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{BOTH_MODES, create_dog, failing_server, make_server, rex};
use dog_shelter::api::validation::ValidationMode;

// ─── ROOT ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_greets() {
    let server = make_server(ValidationMode::Manual);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Hello World!" }));
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let server = make_server(ValidationMode::Manual);

    let response = server.get("/dogs").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_returns_created_dogs() {
    let server = make_server(ValidationMode::Manual);

    create_dog(&server, &rex()).await;
    create_dog(
        &server,
        &json!({ "name": "Max", "age": 5, "breed": "Pug", "description": "lazy" }),
    )
    .await;

    let response = server.get("/dogs").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert!(items.iter().any(|d| d["name"] == "Rex"));
    assert!(items.iter().any(|d| d["name"] == "Max"));
}

#[tokio::test]
async fn test_list_store_failure_is_generic() {
    let server = failing_server(ValidationMode::Manual);

    let response = server.get("/dogs").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Server Side Error" }));
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_dog_success() {
    let server = make_server(ValidationMode::Manual);
    let id = create_dog(&server, &rex()).await;

    let response = server.get(&format!("/dogs/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Rex");
    assert_eq!(body["age"], 3);
    assert_eq!(body["breed"], "Lab");
    assert_eq!(body["description"], "friendly");
}

#[tokio::test]
async fn test_get_dog_non_numeric_id() {
    let server = make_server(ValidationMode::Manual);

    for id in ["abc", "1.5", "12abc"] {
        let response = server.get(&format!("/dogs/{id}")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "id should be a number" }));
    }
}

#[tokio::test]
async fn test_get_dog_not_found_is_no_content() {
    let server = make_server(ValidationMode::Manual);

    let response = server.get("/dogs/999").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_dog_store_failure_is_generic() {
    for mode in BOTH_MODES {
        let server = failing_server(mode);

        let response = server.get("/dogs/1").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Server Side Error" }));
    }
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_dog_success_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let response = server.post("/dogs").json(&rex()).await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert!(body["id"].is_i64());
        assert_eq!(body["name"], "Rex");
        assert_eq!(body["age"], 3);
        assert_eq!(body["breed"], "Lab");
        assert_eq!(body["description"], "friendly");
    }
}

#[tokio::test]
async fn test_create_dog_unknown_key_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let mut body = rex();
        body["color"] = json!("brown");

        let response = server.post("/dogs").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let errors = response.json::<Value>()["errors"].clone();
        assert!(
            errors
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e.as_str().unwrap().contains("color")),
            "mode {mode}: {errors}"
        );

        server.get("/dogs").await.assert_json(&json!([]));
    }
}

#[tokio::test]
async fn test_create_dog_manual_collects_every_error() {
    let server = make_server(ValidationMode::Manual);

    let response = server
        .post("/dogs")
        .json(&json!({ "age": "three", "breed": "Lab", "id": 4, "owner": "Sam" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "errors": [
            "age should be a number",
            "name should be a string",
            "description should be a string",
            "'id' is not a valid key",
            "'owner' is not a valid key"
        ]
    }));
}

#[tokio::test]
async fn test_create_dog_schema_reports_single_error() {
    let server = make_server(ValidationMode::Schema);

    let response = server
        .post("/dogs")
        .json(&json!({ "name": "Rex", "age": "three", "breed": "Lab" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = response.json::<Value>()["errors"].clone();
    assert_eq!(errors.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_dog_missing_fields_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let response = server
            .post("/dogs")
            .json(&json!({ "breed": "Lab" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["errors"].is_array());
    }
}

#[tokio::test]
async fn test_create_dog_manual_breed_gap_hits_store() {
    let server = make_server(ValidationMode::Manual);

    let response = server
        .post("/dogs")
        .json(&json!({ "name": "Rex", "age": 3, "breed": 9, "description": "friendly" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Server Side Error" }));
}

#[tokio::test]
async fn test_create_dog_schema_checks_breed() {
    let server = make_server(ValidationMode::Schema);

    let response = server
        .post("/dogs")
        .json(&json!({ "name": "Rex", "age": 3, "breed": 9, "description": "friendly" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["errors"].is_array());
}

#[tokio::test]
async fn test_create_dog_store_failure_is_generic() {
    for mode in BOTH_MODES {
        let server = failing_server(mode);

        let response = server.post("/dogs").json(&rex()).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Server Side Error" }));
    }
}

#[tokio::test]
async fn test_create_dog_age_rule_matches_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let mut whole = rex();
        whole["age"] = json!(4.0);
        let response = server.post("/dogs").json(&whole).await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["age"], 4);

        let mut fraction = rex();
        fraction["age"] = json!(3.5);
        let response = server.post("/dogs").json(&fraction).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "errors": ["age should be an integer"] }));
    }
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_dog_partial_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);
        let id = create_dog(&server, &rex()).await;

        let response = server
            .patch(&format!("/dogs/{id}"))
            .json(&json!({ "age": 4 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "id": id,
            "name": "Rex",
            "age": 4,
            "breed": "Lab",
            "description": "friendly"
        }));

        let stored = server.get(&format!("/dogs/{id}")).await.json::<Value>();
        assert_eq!(stored["age"], 4);
        assert_eq!(stored["name"], "Rex");
    }
}

#[tokio::test]
async fn test_update_dog_not_found_is_no_content() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let response = server
            .patch("/dogs/41")
            .json(&json!({ "age": 4 }))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_update_dog_not_found_wins_over_bad_body() {
    let server = make_server(ValidationMode::Manual);

    let response = server
        .patch("/dogs/41")
        .json(&json!({ "color": "red" }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_dog_manual_lists_bad_keys() {
    let server = make_server(ValidationMode::Manual);
    let id = create_dog(&server, &rex()).await;

    let response = server
        .patch(&format!("/dogs/{id}"))
        .json(&json!({ "color": "red", "owner": "Sam" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "errors": ["'color' is not a valid key", "'owner' is not a valid key"]
    }));

    let stored = server.get(&format!("/dogs/{id}")).await.json::<Value>();
    assert_eq!(stored["name"], "Rex");
}

#[tokio::test]
async fn test_update_dog_rejects_wrong_type_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);
        let id = create_dog(&server, &rex()).await;

        let response = server
            .patch(&format!("/dogs/{id}"))
            .json(&json!({ "age": "four" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["errors"].is_array());
    }
}

#[tokio::test]
async fn test_update_dog_non_numeric_id() {
    let server = make_server(ValidationMode::Manual);

    let response = server.patch("/dogs/abc").json(&json!({ "age": 4 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "id should be a number" }));
}

#[tokio::test]
async fn test_update_dog_age_rule_matches_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);
        let id = create_dog(&server, &rex()).await;

        let response = server
            .patch(&format!("/dogs/{id}"))
            .json(&json!({ "age": 4.0 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["age"], 4);

        let response = server
            .patch(&format!("/dogs/{id}"))
            .json(&json!({ "age": 3.5 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "errors": ["age should be an integer"] }));
    }
}

#[tokio::test]
async fn test_update_dog_store_failure_is_generic() {
    for mode in BOTH_MODES {
        let server = failing_server(mode);

        let response = server.patch("/dogs/1").json(&json!({ "age": 4 })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Server Side Error" }));
    }
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_dog_success() {
    let server = make_server(ValidationMode::Manual);
    let id = create_dog(&server, &rex()).await;

    let response = server.delete(&format!("/dogs/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Rex");

    server
        .get(&format!("/dogs/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get("/dogs").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_delete_dog_non_numeric_id() {
    let server = make_server(ValidationMode::Manual);

    let response = server.delete("/dogs/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "id should be a number" }));
}

#[tokio::test]
async fn test_delete_dog_not_found_is_no_content() {
    let server = make_server(ValidationMode::Manual);

    let response = server.delete("/dogs/77").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_dog_store_failure_is_no_content() {
    let server = failing_server(ValidationMode::Manual);

    let response = server.delete("/dogs/1").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

// ─── END TO END ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dog_lifecycle_in_both_modes() {
    for mode in BOTH_MODES {
        let server = make_server(mode);

        let created = server.post("/dogs").json(&rex()).await;
        created.assert_status(StatusCode::CREATED);
        let id = created.json::<Value>()["id"].as_i64().unwrap();

        let fetched = server.get(&format!("/dogs/{id}")).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), created.json::<Value>());

        let patched = server
            .patch(&format!("/dogs/{id}"))
            .json(&json!({ "age": 4 }))
            .await;
        patched.assert_status(StatusCode::CREATED);
        let patched = patched.json::<Value>();
        assert_eq!(patched["age"], 4);
        assert_eq!(patched["name"], "Rex");
        assert_eq!(patched["breed"], "Lab");
        assert_eq!(patched["description"], "friendly");

        server
            .delete(&format!("/dogs/{id}"))
            .await
            .assert_status_ok();

        server
            .get(&format!("/dogs/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}
