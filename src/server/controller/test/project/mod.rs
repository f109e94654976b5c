use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError, factory, fixture,
};
use tower::ServiceExt;

use crate::server::{data::collection::ProjectCollection, router, state::AppState};

mod get_by_id;

/// Builds the full router around a fresh in-memory projects collection.
///
/// The context is returned so the database outlives the router in each test.
async fn test_app() -> Result<(Router, TestContext), TestError> {
    let test = TestBuilder::new().with_project_tables().build().await?;
    let collection = ProjectCollection::new(test.db.clone().unwrap());

    Ok((router::router(AppState::new(collection)), test))
}

/// Sends a request with an optional raw body and decodes the JSON response.
async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, method, uri, Some(&body.to_string())).await
}

/// Creates the CRM fixture project through the API and returns its id.
async fn create_crm(app: &Router) -> String {
    let (status, body) = send_json(app, Method::POST, "/projects", &fixture::crm_body()).await;
    assert_eq!(status, StatusCode::OK);

    body["id"].as_str().unwrap().to_string()
}

/// Returns the project body without its `id` field.
fn without_id(mut project: Value) -> Value {
    if let Some(object) = project.as_object_mut() {
        object.remove("id");
    }
    project
}
