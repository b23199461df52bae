use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use cook_fast::providers::OpenAIProvider;
use cook_fast::{router, AppState, RecipeResponse};
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn suggest_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/recipes/suggest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn app_for(server: &Server) -> axum::Router {
    let provider = OpenAIProvider::with_base_url(
        Some("fake_api_key".to_string()),
        server.url(),
        "gpt-4o-mini".to_string(),
    );
    router(
        AppState::new(Arc::new(provider)),
        &["http://localhost:3000".to_string()],
    )
}

#[tokio::test]
async fn test_fried_rice_round_trip() {
    let content = r#"[{"title":"Fried Rice","description":"Quick dish","prep_time":10,"steps":["Cook rice","Fry egg","Mix"],"substitutions":[]}]"#;

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("egg, rice".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": content}}]}).to_string())
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(suggest_request(r#"{"ingredients": ["egg", "rice"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let recipes: Vec<RecipeResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Fried Rice");
    assert_eq!(recipes[0].description, "Quick dish");
    assert_eq!(recipes[0].prep_time, 10);
    assert_eq!(recipes[0].steps, vec!["Cook rice", "Fry egg", "Mix"]);
    assert!(recipes[0].substitutions.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_provider_error_becomes_500() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "The server had an error"}}"#)
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(suggest_request(r#"{"ingredients": ["egg", "rice"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("Error generating recipes:"));
    assert!(detail.contains("The server had an error"));
}

#[tokio::test]
async fn test_rejected_key_becomes_500() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(suggest_request(r#"{"ingredients": ["egg"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["detail"],
        "Error generating recipes: authentication failed: Incorrect API key provided"
    );
}

#[tokio::test]
async fn test_garbled_model_output_degrades() {
    let content = "Here you go: [Fried Rice, Omelette]";

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": content}}]}).to_string())
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(suggest_request(r#"{"ingredients": ["egg", "rice"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let recipes: Vec<RecipeResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Recipe Suggestion");
    assert_eq!(recipes[0].steps, vec![content]);
}
