//! Turns free-form model output into recipe records.
//!
//! Parsing happens in two stages: [`extract_json_array`] finds a candidate
//! `[ ... ]` region, then [`parse_recipes`] decodes it. Whenever either stage
//! fails, the raw text is wrapped into a single placeholder recipe instead.

use crate::model::{null_as_default, RecipeResponse};
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::OnceLock;

pub const DEFAULT_TITLE: &str = "Unknown Recipe";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_PREP_TIME: u32 = 30;

/// Why the model output could not be used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The text contained no bracketed region
    NoJsonArray,
    /// A bracketed region was found, but it was not a usable recipe list
    InvalidJson,
}

impl Fallback {
    /// Wrap `raw` into the placeholder recipe for this failure.
    pub fn placeholder(self, raw: &str) -> RecipeResponse {
        let (title, description) = match self {
            Fallback::NoJsonArray => ("Generated Recipe", "Recipe based on your ingredients"),
            Fallback::InvalidJson => (
                "Recipe Suggestion",
                "We found a recipe for you, but had trouble formatting it properly.",
            ),
        };

        RecipeResponse {
            title: title.to_string(),
            description: description.to_string(),
            prep_time: DEFAULT_PREP_TIME,
            steps: vec![raw.to_string()],
            substitutions: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawRecipe {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_description")]
    description: String,
    #[serde(default = "default_prep_time", deserialize_with = "lenient_minutes")]
    prep_time: u32,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    substitutions: Vec<String>,
}

impl From<RawRecipe> for RecipeResponse {
    fn from(raw: RawRecipe) -> Self {
        RecipeResponse {
            title: raw.title,
            description: raw.description,
            prep_time: raw.prep_time,
            steps: raw.steps,
            substitutions: raw.substitutions,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_prep_time() -> u32 {
    DEFAULT_PREP_TIME
}

/// Minutes as an integer, a whole float (`15.0`) or a digit string (`"15"`).
fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Value::deserialize(deserializer)?;
    let minutes = match &value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let digits = s.trim();
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                digits.parse::<u64>().ok()
            } else {
                None
            }
        }
        _ => None,
    };

    minutes
        .and_then(|m| u32::try_from(m).ok())
        .ok_or_else(|| D::Error::custom(format!("invalid prep_time: {}", value)))
}

fn json_array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Greedy and dot-matches-newline: first `[` through last `]`
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("static regex is valid"))
}

/// Return the widest bracket-delimited region of `text`, if any.
pub fn extract_json_array(text: &str) -> Option<&str> {
    json_array_pattern().find(text).map(|m| m.as_str())
}

/// Decode a candidate region into recipes.
///
/// An empty list counts as a failure, as does any element that is not an
/// object or carries a field of the wrong type.
pub fn decode_recipes(candidate: &str) -> Result<Vec<RecipeResponse>, serde_json::Error> {
    let raw: Vec<RawRecipe> = serde_json::from_str(candidate)?;
    if raw.is_empty() {
        return Err(serde::de::Error::custom("recipe list is empty"));
    }
    Ok(raw.into_iter().map(RecipeResponse::from).collect())
}

/// Parse model output into at least one recipe. Never fails.
pub fn parse_recipes(text: &str) -> Vec<RecipeResponse> {
    let Some(candidate) = extract_json_array(text) else {
        debug!("No JSON array found in model output, wrapping raw text");
        return vec![Fallback::NoJsonArray.placeholder(text)];
    };

    match decode_recipes(candidate) {
        Ok(recipes) => recipes,
        Err(e) => {
            warn!("Could not parse recipes from model output: {}", e);
            vec![Fallback::InvalidJson.placeholder(text)]
        }
    }
}
