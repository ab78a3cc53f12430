//! Project service API tests
//!
//! The Repo service is replaced either by an in-process directory or by a
//! wiremock server speaking its HTTP surface.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use repohub_common::{EntityId, Repo};
use repohub_http::{HttpClient, HttpClientTrait, HttpConfig, HttpRepoDirectory, RepoDirectory};
use repohub_project::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Repo directory answering from a fixed list
struct StaticRepos(Vec<Repo>);

#[async_trait]
impl RepoDirectory for StaticRepos {
    async fn find_repo(&self, id: EntityId) -> repohub_http::Result<Option<Repo>> {
        Ok(self.0.iter().find(|r| r.id == id).cloned())
    }
}

fn app_with_repos(repos: Vec<(EntityId, &str)>) -> Router {
    let repos = repos
        .into_iter()
        .map(|(id, name)| Repo {
            id,
            name: name.to_string(),
        })
        .collect();
    router(AppState::new(Arc::new(StaticRepos(repos))))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_add_project() {
    let app = app_with_repos(vec![]);

    let (status, body) = send(&app, Method::POST, "/project/add?name=proj1&type=lib").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "proj1", "type": "lib"}));
}

#[tokio::test]
async fn test_add_project_requires_name_and_type() {
    let app = app_with_repos(vec![]);

    let (status, body) = send(&app, Method::POST, "/project/add?name=proj1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "missing required parameter: type"}));

    let (status, body) = send(&app, Method::POST, "/project/add?type=lib").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "missing required parameter: name"}));

    let (_, projects) = send(&app, Method::GET, "/projects").await;
    assert_eq!(projects, json!([]));
}

#[tokio::test]
async fn test_attach_then_get_expands_repos() {
    let app = app_with_repos(vec![(5, "five")]);
    send(&app, Method::POST, "/project/add?name=Alpha&type=lib").await;

    let (status, body) = send(&app, Method::POST, "/project_repo/add?project_name=Alpha&repo_id=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Alpha", "type": "lib", "repos": [5]}));

    let (status, body) = send(&app, Method::GET, "/project/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["repos"], json!([{"id": 5, "name": "five"}]));
}

#[tokio::test]
async fn test_list_keeps_raw_ids() {
    let app = app_with_repos(vec![(1, "core")]);
    send(&app, Method::POST, "/project/add?name=a&type=lib").await;
    send(&app, Method::POST, "/project/add?name=b&type=app").await;
    send(&app, Method::POST, "/project_repo/add?project_name=b&repo_id=1").await;

    let (status, body) = send(&app, Method::GET, "/projects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "a", "type": "lib"},
            {"id": 2, "name": "b", "type": "app", "repos": [1]}
        ])
    );
}

#[tokio::test]
async fn test_get_project_without_repos_has_empty_list() {
    let app = app_with_repos(vec![]);
    send(&app, Method::POST, "/project/add?name=a&type=lib").await;

    let (status, body) = send(&app, Method::GET, "/project/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "a", "type": "lib", "repos": []}));
}

#[tokio::test]
async fn test_attach_to_unknown_project_is_404_and_changes_nothing() {
    let app = app_with_repos(vec![]);
    send(&app, Method::POST, "/project/add?name=Alpha&type=lib").await;
    let (_, before) = send(&app, Method::GET, "/projects").await;

    let (status, body) = send(&app, Method::POST, "/project_repo/add?project_name=Beta&repo_id=1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Project not found"}));
    let (_, after) = send(&app, Method::GET, "/projects").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_attach_validates_repo_id() {
    let app = app_with_repos(vec![]);
    send(&app, Method::POST, "/project/add?name=Alpha&type=lib").await;

    let (status, body) = send(&app, Method::POST, "/project_repo/add?project_name=Alpha").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "missing required parameter: repo_id"}));

    let (status, body) =
        send(&app, Method::POST, "/project_repo/add?project_name=Alpha&repo_id=five").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid parameter repo_id: five"}));
}

#[tokio::test]
async fn test_dangling_repo_ids_are_omitted() {
    let app = app_with_repos(vec![(1, "core")]);
    send(&app, Method::POST, "/project/add?name=Alpha&type=lib").await;
    send(&app, Method::POST, "/project_repo/add?project_name=Alpha&repo_id=99").await;
    send(&app, Method::POST, "/project_repo/add?project_name=Alpha&repo_id=1").await;

    let (status, body) = send(&app, Method::GET, "/project/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["repos"], json!([{"id": 1, "name": "core"}]));
}

#[tokio::test]
async fn test_get_unknown_project_is_404() {
    let app = app_with_repos(vec![]);

    let (status, body) = send(&app, Method::GET, "/project/3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Project not found"}));
}

#[tokio::test]
async fn test_expansion_over_http() {
    let repo_service = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repo/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "core"})))
        .mount(&repo_service)
        .await;

    let client: Arc<dyn HttpClientTrait> = Arc::new(HttpClient::new(HttpConfig::default()).unwrap());
    let directory = HttpRepoDirectory::new(client, repo_service.uri());
    let app = router(AppState::new(Arc::new(directory)));

    send(&app, Method::POST, "/project/add?name=proj1&type=lib").await;
    send(&app, Method::POST, "/project_repo/add?project_name=proj1&repo_id=1").await;

    let (status, body) = send(&app, Method::GET, "/project/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "proj1", "type": "lib", "repos": [{"id": 1, "name": "core"}]})
    );
}

#[tokio::test]
async fn test_unreachable_repo_service_is_502() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client: Arc<dyn HttpClientTrait> = Arc::new(HttpClient::new(HttpConfig::default()).unwrap());
    let directory = HttpRepoDirectory::new(client, format!("http://{}", addr));
    let app = router(AppState::new(Arc::new(directory)));

    send(&app, Method::POST, "/project/add?name=proj1&type=lib").await;
    send(&app, Method::POST, "/project_repo/add?project_name=proj1&repo_id=1").await;

    let (status, body) = send(&app, Method::GET, "/project/1").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "upstream unavailable"}));
}

#[tokio::test]
async fn test_non_integer_project_id_is_json_400() {
    let app = app_with_repos(vec![]);

    let (status, body) = send(&app, Method::GET, "/project/first").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid parameter id: first"}));
}
