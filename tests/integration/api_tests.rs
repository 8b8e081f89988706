//! API integration tests, driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use farmrent_server::{create_router, repository::Repository, AppConfig, AppState};

fn app(repository: Repository) -> Router {
    create_router(AppState::new(AppConfig::default(), repository))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

fn test_tiller() -> Value {
    json!({
        "name": "Test Tiller",
        "category": "Tillers",
        "description": "d",
        "image_url": "http://x/y.jpg",
        "price_per_day": 500,
        "location": "Pune",
        "owner_name": "A",
        "owner_contact": "123",
        "condition": "Good"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app(Repository::new());

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment_count"], 0);
    assert_eq!(body["sample_data"], true);

    let mut config = AppConfig::default();
    config.store.seed_sample_data = false;
    let unseeded = create_router(AppState::new(config, Repository::new()));
    let (_, body) = send(&unseeded, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(body["sample_data"], false);
}

#[tokio::test]
async fn test_create_and_list_on_empty_store() {
    let app = app(Repository::new());

    let (status, created) = send(&app, Method::POST, "/api/v1/equipment", Some(test_tiller())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_string());
    assert_eq!(created["rating"], 5);
    assert_eq!(created["review_count"], 0);
    assert_eq!(created["is_available"], "true");

    let (status, list) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["price_per_day"], 500);
    assert_eq!(list[0]["rating"], 5);
    assert_eq!(list[0]["review_count"], 0);
}

#[tokio::test]
async fn test_creator_cannot_set_rating() {
    let app = app(Repository::new());

    let mut payload = test_tiller();
    payload["rating"] = json!(1);
    payload["review_count"] = json!(100);

    let (status, created) = send(&app, Method::POST, "/api/v1/equipment", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], 5);
    assert_eq!(created["review_count"], 0);
}

#[tokio::test]
async fn test_invalid_category_is_rejected() {
    let app = app(Repository::new());

    let mut payload = test_tiller();
    payload["category"] = json!("Drones");

    let (status, body) = send(&app, Method::POST, "/api/v1/equipment", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["category"].is_array());

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = app(Repository::new());

    let mut payload = test_tiller();
    payload.as_object_mut().unwrap().remove("price_per_day");

    let (status, body) = send(&app, Method::POST, "/api/v1/equipment", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("price_per_day"));
}

#[tokio::test]
async fn test_get_update_delete() {
    let app = app(Repository::new());

    let (_, created) = send(&app, Method::POST, "/api/v1/equipment", Some(test_tiller())).await;
    let uri = format!("/api/v1/equipment/{}", created["id"].as_str().unwrap());

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({ "price_per_day": 999 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price_per_day"], 999);
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");
}

#[tokio::test]
async fn test_update_unknown_equipment() {
    let app = app(Repository::new());

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/equipment/not-a-real-id",
        Some(json!({ "price_per_day": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inquiries_for_equipment() {
    let app = app(Repository::with_sample_data());

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 12);
    let first = list[0]["id"].as_str().unwrap().to_string();
    let second = list[1]["id"].as_str().unwrap().to_string();

    for equipment_id in [&first, &first, &second] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/inquiries",
            Some(json!({
                "equipment_id": equipment_id,
                "name": "Sunita",
                "email": "sunita@example.com",
                "phone": "+91 90000 12345",
                "message": "Available this weekend?",
                "start_date": "2024-11-02"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, inquiries) = send(
        &app,
        Method::GET,
        &format!("/api/v1/equipment/{}/inquiries", first),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let inquiries = inquiries.as_array().unwrap();
    assert_eq!(inquiries.len(), 2);
    assert!(inquiries.iter().all(|i| i["equipment_id"] == first.as_str()));

    let (_, all) = send(&app, Method::GET, "/api/v1/inquiries", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_inquiry_for_unknown_equipment() {
    let app = app(Repository::new());

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/inquiries",
        Some(json!({
            "equipment_id": "ghost",
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "123",
            "message": "Hello"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/v1/inquiries/{}", created["id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["equipment_id"], "ghost");
    assert!(fetched["end_date"].is_null());

    let (status, _) = send(&app, Method::GET, "/api/v1/inquiries/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_free_text_payloads_are_accepted() {
    let app = app(Repository::new());

    let (status, inquiry) = send(
        &app,
        Method::POST,
        "/api/v1/inquiries",
        Some(json!({
            "equipment_id": "x",
            "name": "Ravi",
            "email": "ravi at farm",
            "phone": "",
            "message": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(inquiry["email"], "ravi at farm");

    let mut payload = test_tiller();
    payload["image_url"] = json!("/uploads/tiller.jpg");
    payload["description"] = json!("");

    let (status, equipment) = send(&app, Method::POST, "/api/v1/equipment", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(equipment["image_url"], "/uploads/tiller.jpg");
}

#[tokio::test]
async fn test_wrong_type_is_rejected() {
    let app = app(Repository::new());

    let mut payload = test_tiller();
    payload["price_per_day"] = json!("five hundred");

    let (status, body) = send(&app, Method::POST, "/api/v1/equipment", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_search_and_categories() {
    let app = app(Repository::with_sample_data());

    let (status, results) = send(
        &app,
        Method::GET,
        "/api/v1/equipment?category=Tillers&sort=price_high",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rotary Tiller Heavy Duty", "Mini Power Tiller"]);

    let (status, _) = send(&app, Method::GET, "/api/v1/equipment?category=Boats", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/v1/equipment?sort=cheapest", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, categories) = send(&app, Method::GET, "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories.as_array().unwrap().len(), 8);
    assert_eq!(categories[2], "Irrigation Systems");
}
