use crate::config::LlmConfig;
use crate::providers::{AnthropicProvider, LlmProvider, OllamaProvider, OpenAIProvider};
use std::sync::Arc;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the provider named by `config.provider`
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, String> {
        let provider: Arc<dyn LlmProvider> = match config.provider.as_str() {
            "openai" => Arc::new(OpenAIProvider::new(config).map_err(|e| e.to_string())?),
            "anthropic" => Arc::new(AnthropicProvider::new(config).map_err(|e| e.to_string())?),
            "ollama" => Arc::new(OllamaProvider::new(config).map_err(|e| e.to_string())?),
            other => return Err(format!("Unknown provider: {}", other)),
        };
        Ok(provider)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "ollama"]
    }
}
