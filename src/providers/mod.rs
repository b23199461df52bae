mod anthropic;
mod factory;
mod ollama;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;

use crate::error::GenerationError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send one system instruction and one user prompt, return the completion text
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Build the HTTP client shared by all requests of one provider.
pub(crate) fn build_client(timeout_secs: Option<u64>) -> Result<Client, GenerationError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| GenerationError::Network(e.to_string()))
}

/// Send `request` and decode the JSON body, classifying every failure.
pub(crate) async fn send_json(request: RequestBuilder) -> Result<Value, GenerationError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!("Provider responded with {}: {}", status, body);

    if !status.is_success() {
        let message = upstream_error_message(&body).unwrap_or(body);
        return Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GenerationError::Authentication(message)
            }
            _ => GenerationError::Provider {
                status: status.as_u16(),
                message,
            },
        });
    }

    serde_json::from_str(&body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}

/// Pull the human-readable message out of a provider error body.
fn upstream_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match &value["error"] {
        Value::String(message) => Some(message.clone()),
        error => error["message"].as_str().map(String::from),
    }
}
