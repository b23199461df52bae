//! HTTP surface of the service.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::model::{FeedbackRequest, HealthResponse, MessageResponse, RecipeRequest, RecipeResponse};
use crate::providers::LlmProvider;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, error, info, warn};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

/// Build the router with every route and the CORS layer attached
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/recipes/suggest", post(suggest_recipes))
        .route("/feedback", post(submit_feedback))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// Credentialed CORS for the configured origins.
///
/// Wildcards cannot be combined with credentials, so methods and headers
/// are mirrored from the preflight request instead.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let origin = origin.trim();
            if origin == "*" {
                warn!("Ignoring wildcard CORS origin, it cannot be used with credentials");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Bind the listener and serve until the process is stopped
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let app = router(state, &config.cors_origins);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Cook Fast API"))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Suggest recipes based on available ingredients and preferences
async fn suggest_recipes(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let Json(request) = payload?;
    debug!("Recipe request: {:?}", request);

    let recipes = crate::suggest_recipes(state.provider.as_ref(), &request)
        .await
        .map_err(|e| {
            error!(
                "Recipe generation with {} failed: {:?}",
                state.provider.provider_name(),
                e
            );
            ApiError::from(e)
        })?;

    Ok(Json(recipes))
}

/// Acknowledge feedback. Nothing is stored.
async fn submit_feedback(
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(feedback) = payload?;
    info!(
        "Feedback received: {} - {}",
        feedback.recipe_title,
        if feedback.rating { "👍" } else { "👎" }
    );
    Ok(Json(MessageResponse::new("Feedback received successfully")))
}
