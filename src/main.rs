use cook_fast::server::{serve, AppState};
use cook_fast::{AppConfig, ProviderFactory};
use log::{error, info, warn};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load configuration: {}", e))?;

    if config.llm.requires_api_key() {
        if config.llm.resolve_api_key().is_some() {
            info!("{} API key loaded successfully", config.llm.provider);
        } else {
            warn!(
                "{} not found in configuration or environment!",
                config.llm.api_key_env_var().unwrap_or("API key")
            );
        }
    }

    let provider = ProviderFactory::create(&config.llm)?;
    info!(
        "Using provider '{}' with model '{}'",
        provider.provider_name(),
        config.llm.model
    );

    serve(&config.server, AppState::new(provider))
        .await
        .map_err(|e| format!("Server error: {}", e))?;
    Ok(())
}
