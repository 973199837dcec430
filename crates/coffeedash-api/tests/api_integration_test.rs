//! HTTP round trips against the router with an in-memory dataset

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use coffeedash_api::{create_router, AppState};
use coffeedash_core::models::{District, Farm, Farmer, LonLat, Station};
use coffeedash_core::store::ReferenceLayers;
use coffeedash_core::GeoDataStore;
use coffeedash_pipeline::{PipelineSettings, SelectionPipeline};
use geo::{polygon, MultiPolygon};
use serde_json::{json, Value};
use tower::ServiceExt;

fn fixture_store() -> GeoDataStore {
    let district = District {
        name: "huye".to_string(),
        boundary: MultiPolygon::new(vec![polygon![
            (x: 29.6, y: -2.7),
            (x: 29.8, y: -2.7),
            (x: 29.8, y: -2.5),
            (x: 29.6, y: -2.5),
            (x: 29.6, y: -2.7),
        ]]),
    };
    let farmer = Farmer {
        national_id: "n1".to_string(),
        gender: "female".to_string(),
        age: 29,
        youth_in_household: Some(1),
        district: "huye".to_string(),
        station_id: "cws-1".to_string(),
        training_topics: "pruning mulching".to_string(),
    };
    let farm = Farm {
        national_id: "n1".to_string(),
        station_id: "cws-1".to_string(),
        location: LonLat::new(29.7, -2.6),
        area: 42.0,
        tree_age_bracket: "8_to_15".to_string(),
        tree_count: Some(300),
    };
    let station = Station {
        id: "cws-1".to_string(),
        name: "Maraba".to_string(),
        ownership: "cooperative".to_string(),
        capacity: 150.0,
        location: LonLat::new(29.72, -2.61),
    };

    GeoDataStore::from_parts(vec![station], vec![farmer], vec![farm], vec![district], ReferenceLayers::default())
}

fn state() -> AppState {
    let pipeline = Arc::new(SelectionPipeline::new(Arc::new(fixture_store()), PipelineSettings::default()));
    AppState::new(pipeline)
}

fn app() -> Router {
    create_router(Arc::new(state()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn test_health_reports_dataset() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dataset"]["farms"], 1);
    assert_eq!(body["dataset"]["districts"], 1);
}

#[tokio::test]
async fn test_kpis() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/kpis", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["farmers"], 1);
    assert_eq!(body["women_pct"], 100.0);
    assert_eq!(body["youth_pct"], 100.0);
}

#[tokio::test]
async fn test_layers() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/layers/stations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"][0]["properties"]["cws_name"], "Maraba");

    let (status, _) = send(&app, Method::GET, "/api/v1/layers/roads", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_round_trip() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["outputs"]["tab"], "stations");
    assert_eq!(created["outputs"]["scope"], "all");
    let id = created["session_id"].as_str().unwrap().to_string();

    // Station view: click selects the nearest station
    let (status, clicked) = send(
        &app,
        Method::POST,
        &format!("/api/v1/sessions/{}/click", id),
        Some(json!({"lon": 29.71, "lat": -2.6})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(clicked["outputs"]["selection"]["station"]["id"], "cws-1");
    assert_eq!(clicked["outputs"]["farm_area_total"], 42.0);

    // Farms view: the point is cleared, then a click selects the district
    let (_, switched) = send(
        &app,
        Method::POST,
        &format!("/api/v1/sessions/{}/tab", id),
        Some(json!({"tab": "Coffee Farms View"})),
    )
    .await;
    assert_eq!(switched["outputs"]["clicked_point"], Value::Null);
    assert_eq!(switched["outputs"]["tab"], "farms");

    send(
        &app,
        Method::POST,
        &format!("/api/v1/sessions/{}/click", id),
        Some(json!({"lon": 29.7, "lat": -2.6})),
    )
    .await;
    let (status, outputs) =
        send(&app, Method::GET, &format!("/api/v1/sessions/{}/outputs", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outputs["selection"]["district"]["name"], "huye");
    assert_eq!(outputs["selection"]["farms"].as_array().unwrap().len(), 1);
    assert_eq!(outputs["tree_count_by_age_bracket"][2]["trees"], 300);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        send(&app, Method::GET, &format!("/api/v1/sessions/{}/outputs", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = app();
    let uri = "/api/v1/sessions/00000000-0000-4000-8000-000000000000/click";

    let (status, body) = send(&app, Method::POST, uri, Some(json!({"lon": 29.7, "lat": -2.6}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");
}

#[tokio::test]
async fn test_bad_tab_and_coordinates() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/v1/sessions", None).await;
    let id = created["session_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/sessions/{}/tab", id),
        Some(json!({"tab": "satellite"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/sessions/{}/click", id),
        Some(json!({"lon": 29.7, "lat": 120.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid coordinates");
}

#[tokio::test]
async fn test_idle_session_expires() {
    let app = create_router(Arc::new(state().with_session_ttl(chrono::Duration::milliseconds(100))));

    let (_, created) = send(&app, Method::POST, "/api/v1/sessions", None).await;
    let id = created["session_id"].as_str().unwrap().to_string();
    let outputs = format!("/api/v1/sessions/{}/outputs", id);

    let (status, _) = send(&app, Method::GET, &outputs, None).await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_millis(300)).await;

    let (status, body) = send(&app, Method::GET, &outputs, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");

    let (_, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health["active_sessions"], 0);
}
