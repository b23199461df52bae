use serde::{Deserialize, Deserializer, Serialize};

/// Ingredients and constraints submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dietary_preferences: Vec<String>,
    /// Upper bound on preparation time, in minutes
    #[serde(default)]
    pub max_prep_time: Option<u32>,
}

/// A single suggested recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub title: String,
    pub description: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub substitutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub recipe_title: String,
    /// `true` for thumbs up, `false` for thumbs down
    pub rating: bool,
    pub ingredients_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
