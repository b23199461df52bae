pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod server;

pub use config::{load_config, AppConfig, LlmConfig, ServerConfig};
pub use error::{ApiError, GenerationError};
pub use model::{FeedbackRequest, RecipeRequest, RecipeResponse};
pub use parser::parse_recipes;
pub use prompt::build_recipe_prompt;
pub use providers::{LlmProvider, ProviderFactory};
pub use server::{router, AppState};

use log::info;

/// Ask `provider` for recipes matching `request`.
///
/// Provider failures are returned as-is; unparseable model output is not an
/// error and degrades to a placeholder recipe.
pub async fn suggest_recipes(
    provider: &dyn LlmProvider,
    request: &RecipeRequest,
) -> Result<Vec<RecipeResponse>, GenerationError> {
    let prompt = build_recipe_prompt(
        &request.ingredients,
        &request.dietary_preferences,
        request.max_prep_time,
    );
    let text = provider
        .complete(prompt::RECIPE_SYSTEM_PROMPT, &prompt)
        .await?;
    let recipes = parse_recipes(&text);
    info!("Parsed {} recipe(s) from {}", recipes.len(), provider.provider_name());
    Ok(recipes)
}
