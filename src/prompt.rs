/// System instruction framing the assistant's role for every completion.
pub const RECIPE_SYSTEM_PROMPT: &str =
    "You are a helpful cooking assistant that suggests recipes based on available ingredients.";

/// Expected output shape, appended verbatim to every prompt.
const RESPONSE_FORMAT: &str = r#"
Please format your response as JSON with this structure:
[
    {
        "title": "Recipe Name",
        "description": "Brief description",
        "prep_time": 15,
        "steps": ["List of cooking steps WITHOUT numbers - just the action"],
        "substitutions": ["If missing X, use Y"]
    }
]

IMPORTANT: Do NOT include step numbers (1., 2., 3., etc.) in the steps array. Just provide the cooking instructions as plain text.
"#;

/// Build the user prompt asking for recipes made from `ingredients`.
///
/// The dietary clause is only added when `dietary_preferences` is non-empty,
/// and the time clause only when `max_prep_time` is a positive number of minutes.
pub fn build_recipe_prompt(
    ingredients: &[String],
    dietary_preferences: &[String],
    max_prep_time: Option<u32>,
) -> String {
    let mut prompt = format!(
        "I have these ingredients available: {}

Please suggest 2-3 recipes that I can make using ONLY these ingredients (or common pantry staples like salt, pepper, oil).

Requirements:
- Use primarily the ingredients I listed
- If missing a key ingredient, suggest a substitution
- Include prep time for each recipe",
        ingredients.join(", ")
    );

    if !dietary_preferences.is_empty() {
        prompt.push_str(&format!("\n- Must be {}", dietary_preferences.join(", ")));
    }

    if let Some(minutes) = max_prep_time.filter(|&m| m > 0) {
        prompt.push_str(&format!(
            "\n- Must take {} minutes or less to prepare",
            minutes
        ));
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}
