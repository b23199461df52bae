use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failures of the completion call to an LLM provider
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Connection or transport failure before a response arrived
    #[error("network error: {0}")]
    Network(String),

    /// Missing API key, or the provider rejected the credentials
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider answered, but not with a usable completion
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The configured request timeout elapsed
    #[error("request to provider timed out")]
    Timeout,

    /// Any other non-success answer (rate limits, provider outages)
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

impl GenerationError {
    /// HTTP status reported to the client for this kind of failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::Network(_) | GenerationError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            GenerationError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            GenerationError::Authentication(_) | GenerationError::Provider { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GenerationError::Timeout
        } else if error.is_decode() {
            GenerationError::MalformedResponse(error.to_string())
        } else {
            GenerationError::Network(error.to_string())
        }
    }
}

/// Errors surfaced by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error generating recipes: {0}")]
    Generation(#[from] GenerationError),

    /// The request body did not have the expected shape
    #[error("{message}")]
    Validation { status: StatusCode, message: String },
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Generation(e) => e.status_code(),
            ApiError::Validation { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
