//! Router tests for the indicators API.

mod common;

use axum::Router;
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{send, test_app};

async fn create_indicator(app: &Router, body: Value) -> Value {
    let (status, created) = send(app, Method::POST, "/api/v1/indicators", Some(&body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {created}");
    created
}

fn root_indicator() -> Value {
    json!({
        "name_full": "Общее количество людей, постоянно проживающих на территории",
        "name_short": "Численность населения",
        "level": 1,
        "list_label": "1"
    })
}

fn indicator_value(indicator_id: i64) -> Value {
    json!({
        "indicator_id": indicator_id,
        "territory_id": 1,
        "date_type": "year",
        "date_value": "2024-01-01T00:00:00Z",
        "value": 100500,
        "value_type": "real",
        "information_source": "Росстат"
    })
}

#[tokio::test]
async fn measurement_units_create_and_list() {
    let app = test_app(&[]);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/measurement_units",
        Some(&json!({"name": "Количество людей"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"measurement_unit_id": 1, "name": "Количество людей"}));

    let (status, listed) = send(&app, Method::GET, "/api/v1/measurement_units", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/measurement_units",
        Some(&json!({"name": "Количество людей"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn indicator_tree_navigation() {
    let app = test_app(&[]);

    let root = create_indicator(&app, root_indicator()).await;
    let root_id = root["indicator_id"].as_i64().unwrap();
    let child = create_indicator(
        &app,
        json!({
            "name_full": "Численность детей",
            "name_short": "Дети",
            "level": 2,
            "list_label": "1.1",
            "parent_id": root_id
        }),
    )
    .await;

    let (status, roots) = send(&app, Method::GET, "/api/v1/indicators_by_parent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roots, json!([root]));

    let (status, children) = send(
        &app,
        Method::GET,
        &format!("/api/v1/indicators_by_parent?parent_id={root_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(children, json!([child]));
}

#[tokio::test]
async fn children_of_missing_parent_is_404() {
    let app = test_app(&[]);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/indicators_by_parent?parent_id=77",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Entity 'indicator' with id=77 is not found"));
}

#[tokio::test]
async fn create_indicator_with_zero_level_is_422() {
    let app = test_app(&[]);

    let mut body = root_indicator();
    body["level"] = json!(0);
    let (status, json) = send(&app, Method::POST, "/api/v1/indicators", Some(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], json!("level must be greater than or equal to 1, got 0"));
}

#[tokio::test]
async fn get_and_patch_indicator() {
    let app = test_app(&[]);
    let root = create_indicator(&app, root_indicator()).await;

    let (status, fetched) = send(&app, Method::GET, "/api/v1/indicators/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, root);

    let (status, patched) = send(
        &app,
        Method::PATCH,
        "/api/v1/indicators/1",
        Some(&json!({"name_short": "Население"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name_short"], json!("Население"));
    assert_eq!(patched["list_label"], json!("1"));
}

#[tokio::test]
async fn patch_indicator_rejects_empty_and_null_bodies() {
    let app = test_app(&[]);
    create_indicator(&app, root_indicator()).await;

    let (status, body) = send(&app, Method::PATCH, "/api/v1/indicators/1", Some(&json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("request body cannot be empty"));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/indicators/1",
        Some(&json!({"parent_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("parent_id cannot be null"));

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/indicators/1",
        Some(&json!({"colour": "red"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn indicator_values_create_list_and_conflict() {
    let app = test_app(&[]);
    create_indicator(&app, root_indicator()).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/indicator_values",
        Some(&indicator_value(1)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["value"], json!(100500));
    assert_eq!(created["date_type"], json!("year"));

    let (status, duplicate) = send(
        &app,
        Method::POST,
        "/api/v1/indicator_values",
        Some(&indicator_value(1)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(duplicate["status"], json!(409));

    let (status, values) = send(
        &app,
        Method::GET,
        "/api/v1/indicator/1/values?territory_id=1&value_type=real",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values, json!([created]));

    let (status, values) = send(
        &app,
        Method::GET,
        "/api/v1/indicator/1/values?value_type=forecast",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(values, json!([]));
}

#[tokio::test]
async fn value_for_missing_indicator_is_404() {
    let app = test_app(&[]);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/indicator_values",
        Some(&indicator_value(5)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Entity 'indicator' with id=5 is not found"));
}

#[tokio::test]
async fn value_with_unknown_date_type_is_422() {
    let app = test_app(&[]);
    create_indicator(&app, root_indicator()).await;

    let mut body = indicator_value(1);
    body["date_type"] = json!("decade");
    let (status, json) = send(&app, Method::POST, "/api/v1/indicator_values", Some(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("unknown variant `decade`"));
}

#[tokio::test]
async fn indicator_cannot_become_its_own_parent() {
    let app = test_app(&[]);
    let root = create_indicator(&app, root_indicator()).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/v1/indicators/1",
        Some(&json!({"parent_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("indicator 1 cannot be its own parent"));

    let (status, roots) = send(&app, Method::GET, "/api/v1/indicators_by_parent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roots, json!([root]));
}

#[tokio::test]
async fn child_level_must_follow_parent() {
    let app = test_app(&[]);
    create_indicator(&app, root_indicator()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/indicators",
        Some(&json!({
            "name_full": "Численность детей",
            "name_short": "Дети",
            "level": 7,
            "list_label": "1.1",
            "parent_id": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("level must be 2 under indicator 1, got 7"));
}

#[tokio::test]
async fn unparsable_indicator_id_is_json_400() {
    let app = test_app(&[]);

    let (status, body) = send(&app, Method::GET, "/api/v1/indicator/x/values", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(400));
}
