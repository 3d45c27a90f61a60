use user_registry::clients::UserClient;
use user_registry::domain::User;
use user_registry::framework::StoreError;
use user_registry::framework::mock::MockClient;
use user_registry::http::{AppState, build_router};
use user_registry::lifecycle::UserSystem;
use user_registry::user_actor::BirthDatePolicy;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app() -> (Router, UserSystem) {
    let system = UserSystem::start(
        BirthDatePolicy::with_clock(18, || date(2024, 6, 15)),
        32,
    );
    let router = build_router(AppState::new(system.user_client.clone()));
    (router, system)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ada() -> Value {
    json!({
        "email": "ada@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "birthDate": "1990-12-10",
        "address": null,
        "phone": "+44 20 0000 0000"
    })
}

#[tokio::test]
async fn test_create_then_get() {
    let (app, _system) = app();

    let (status, created) = send_json(&app, Method::POST, "/users", Some(ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, ada());

    let (status, fetched) = send_json(&app, Method::GET, "/users/ada@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, ada());

    let (status, all) = send_json(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([ada()]));
}

#[tokio::test]
async fn test_missing_user_is_404_with_error_body() {
    let (app, _system) = app();

    let (status, body) = send_json(&app, Method::GET, "/users/nobody@example.com", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(
        body["message"],
        "User with email nobody@example.com was not found"
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_duplicate_create_is_409() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let (status, body) = send_json(&app, Method::POST, "/users", Some(ada())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_underage_create_is_403() {
    let (app, _system) = app();
    let mut young = ada();
    young["birthDate"] = json!("2010-01-01");

    let (status, body) = send_json(&app, Method::POST, "/users", Some(young)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "must be at least 18 years old");
}

#[tokio::test]
async fn test_bad_bodies_are_400() {
    let (app, _system) = app();

    let mut no_last_name = ada();
    no_last_name.as_object_mut().unwrap().remove("lastName");
    let (status, body) = send_json(&app, Method::POST, "/users", Some(no_last_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let mut bad_email = ada();
    bad_email["email"] = json!("not-an-email");
    let (status, _) = send_json(&app, Method::POST, "/users", Some(bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_date = ada();
    bad_date["birthDate"] = json!("10/12/1990");
    let (status, _) = send_json(&app, Method::POST, "/users", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send_json(&app, Method::GET, "/users", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_put_replaces_the_record() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let mut replacement = ada();
    replacement["lastName"] = json!("King");
    replacement["phone"] = json!(null);
    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/users/ada@example.com",
        Some(replacement.clone()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, replacement);
}

#[tokio::test]
async fn test_patch_changes_only_given_fields() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let (status, body) = send_json(
        &app,
        Method::PATCH,
        "/users/ada@example.com",
        Some(json!({ "firstName": "Augusta", "lastName": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Augusta");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["phone"], "+44 20 0000 0000");
}

#[tokio::test]
async fn test_patch_errors() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let (status, _) = send_json(
        &app,
        Method::PATCH,
        "/users/nobody@example.com",
        Some(json!({ "firstName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        Method::PATCH,
        "/users/ada@example.com",
        Some(json!({ "email": "broken" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        Method::PATCH,
        "/users/ada@example.com",
        Some(json!({ "birthDate": "2030-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_returns_confirmation_text() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let (status, body) = send(&app, Method::DELETE, "/users/ada@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "User with email ada@example.com was deleted"
    );

    let (status, _) = send(&app, Method::DELETE, "/users/ada@example.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_birth_date_range_query() {
    let (app, _system) = app();
    send(&app, Method::POST, "/users", Some(ada())).await;

    let (status, inside) = send_json(
        &app,
        Method::GET,
        "/users/in-birth-date-range?dateFrom=1990-01-01&dateTo=1991-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inside, json!([ada()]));

    let (_, on_bound) = send_json(
        &app,
        Method::GET,
        "/users/in-birth-date-range?dateFrom=1990-12-10&dateTo=1991-01-01",
        None,
    )
    .await;
    assert_eq!(on_bound, json!([]));

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/users/in-birth-date-range?dateFrom=yesterday&dateTo=1991-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, _) = send_json(
        &app,
        Method::GET,
        "/users/in-birth-date-range?dateFrom=1990-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreachable_store_is_500() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(StoreError::ActorClosed);
    let app = build_router(AppState::new(UserClient::new(mock.client())));

    let (status, body) = send_json(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    mock.verify();
}
