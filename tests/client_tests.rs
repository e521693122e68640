//! Integration tests for the API client against a mock HTTP server.

use pmdash::{ApiClient, DashError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn projects_body() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Alpha Launch", "description": "first"},
        {"id": 2, "name": "Beta"}
    ])
}

#[tokio::test]
async fn list_projects_parses_partial_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_body()))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Alpha Launch");
    // Missing fields tolerated: no description, no tasks, not completed.
    assert!(projects[1].description.is_none());
    assert!(projects[1].tasks.is_empty());
    assert!(!projects[1].is_completed());
}

#[tokio::test]
async fn list_tasks_sends_project_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("projectId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "title": "Design API", "priority": "High", "status": "To Do"}
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let tasks = client.list_tasks(1).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].priority.as_deref(), Some("High"));
}

#[tokio::test]
async fn error_status_surfaces_as_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    match client.list_projects().await {
        Err(DashError::Api { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn load_snapshot_populates_tasks_per_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("projectId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "title": "Design API"},
            {"id": 11, "title": "Write docs"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("projectId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 20, "title": "alpha testing"}
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let snapshot = client.load_snapshot().await.unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.project(1).unwrap().tasks.len(), 2);
    assert_eq!(snapshot.project(2).unwrap().tasks.len(), 1);
    assert_eq!(snapshot.flatten_tasks().len(), 3);
}

#[tokio::test]
async fn load_snapshot_absorbs_failed_task_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("projectId", "1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unavailable"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("projectId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 20, "title": "alpha testing"}
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let snapshot = client.load_snapshot().await.unwrap();

    // The failing project contributes zero tasks; the load still succeeds.
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.project(1).unwrap().tasks.is_empty());
    assert_eq!(snapshot.project(2).unwrap().tasks.len(), 1);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri())).unwrap();
    let projects = client.list_projects().await.unwrap();
    assert!(projects.is_empty());
}
