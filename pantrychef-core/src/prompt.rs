//! Prompt templates for recipe generation.
//!
//! Three input shapes map to three prompt variants: structured ingredient
//! selection, a free-form voice transcript, and unconstrained surprise mode.
//! All three end with the same structural contract asking for a single JSON
//! object with a `recipes` array. The contract is a prompt-engineering
//! convention; the parser still validates what comes back.

use crate::types::GenerateRequest;

/// System instruction sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional chef and cookbook author. \
Write detailed, comprehensive instructions with specific temperatures, timing, visual cues, \
and proper cooking techniques. Each instruction step should be thorough and professional \
like a high-quality cookbook. Always return valid JSON only.";

/// JSON shape appended to every prompt variant.
const JSON_CONTRACT: &str = r#"Return only valid JSON:
{
  "recipes": [
    {
      "title": "Recipe Name",
      "description": "Brief description",
      "cookTime": "25 mins",
      "difficulty": "Easy",
      "servings": 4,
      "ingredients": ["ingredient with amount"],
      "instructions": ["Detailed step with temperature and timing", "Comprehensive step with visual cues and technique"]
    }
  ]
}"#;

/// Render the prompt for a generation request.
///
/// Surprise mode wins over a voice transcript, which wins over the structured
/// selection; the structured variant also handles fully-empty selections by
/// asking the model to choose.
pub fn render_prompt(request: &GenerateRequest) -> String {
    if request.surprise_mode {
        render_surprise_prompt()
    } else if let Some(voice) = request.voice_request.as_deref().filter(|v| !v.is_empty()) {
        render_voice_prompt(voice, &request.meal_type, &request.dietary)
    } else {
        render_structured_prompt(request)
    }
}

fn render_structured_prompt(request: &GenerateRequest) -> String {
    let base_joined = request.base_ingredients.join(", ");
    let main_joined = request.main_ingredients.join(", ");
    let base = non_empty_or(&base_joined, "Choose appropriate");
    let main = non_empty_or(&main_joined, "Choose appropriate");
    let meal = non_empty_or(&request.meal_type, "Any");
    let dietary = non_empty_or(&request.dietary, "No restrictions");

    format!(
        r#"Create 3-4 recipes using:
BASE: {base}
MAIN: {main}
MEAL: {meal}
DIETARY: {dietary}

INSTRUCTION STYLE: Write DETAILED, PROFESSIONAL instructions with specific temperatures, timing, visual cues, and proper cooking techniques. Include oven temperatures, pan preparation, cooking times, visual cues for doneness, and detailed techniques like a professional cookbook.

{contract}"#,
        base = base,
        main = main,
        meal = meal,
        dietary = dietary,
        contract = JSON_CONTRACT
    )
}

fn render_voice_prompt(voice_request: &str, meal_type: &str, dietary: &str) -> String {
    let meal = non_empty_or(meal_type, "Infer from request");
    let dietary = non_empty_or(dietary, "Infer from request");

    format!(
        r#"VOICE REQUEST: "{voice_request}"

You are a professional chef. The user spoke this request naturally. Create 3 recipes that match EXACTLY what they asked for.

CRITICAL REQUIREMENTS:
- If they said "mug cake", make single-serving microwave mug cake recipes
- If they said "eggless", use absolutely NO eggs
- If they said "quick", keep total time under 20 minutes
- Use realistic ingredient amounts
- Write DETAILED, PROFESSIONAL INSTRUCTIONS with specific temperatures, timing, visual cues, and proper cooking techniques

MEAL TYPE: {meal}
DIETARY: {dietary}

{contract}"#,
        voice_request = voice_request,
        meal = meal,
        dietary = dietary,
        contract = JSON_CONTRACT
    )
}

fn render_surprise_prompt() -> String {
    format!(
        r#"Generate 3 completely random and creative recipes. Be wildly creative with different cuisines, ingredients, and cooking techniques.

INSTRUCTIONS MUST BE DETAILED: Write professional, comprehensive instructions with specific temperatures, timing, visual cues, and cooking techniques. Each step should be clear and detailed like a professional cookbook.

{contract}"#,
        contract = JSON_CONTRACT
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured_request() -> GenerateRequest {
        GenerateRequest {
            base_ingredients: vec!["rice".to_string()],
            main_ingredients: vec!["chicken".to_string(), "spinach".to_string()],
            meal_type: "dinner".to_string(),
            dietary: "vegetarian".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_prompt_includes_selection() {
        let prompt = render_prompt(&structured_request());
        assert!(prompt.contains("BASE: rice"));
        assert!(prompt.contains("MAIN: chicken, spinach"));
        assert!(prompt.contains("MEAL: dinner"));
        assert!(prompt.contains("DIETARY: vegetarian"));
        assert!(prompt.contains("\"recipes\""));
    }

    #[test]
    fn test_structured_prompt_placeholders_for_empty_lists() {
        let prompt = render_prompt(&GenerateRequest::default());
        assert!(prompt.contains("BASE: Choose appropriate"));
        assert!(prompt.contains("MAIN: Choose appropriate"));
        assert!(prompt.contains("MEAL: Any"));
        assert!(prompt.contains("DIETARY: No restrictions"));
    }

    #[test]
    fn test_voice_prompt_quotes_transcript() {
        let request = GenerateRequest {
            voice_request: Some("make me an eggless mug cake".to_string()),
            ..Default::default()
        };
        let prompt = render_prompt(&request);
        assert!(prompt.contains("VOICE REQUEST: \"make me an eggless mug cake\""));
        assert!(prompt.contains("MEAL TYPE: Infer from request"));
        assert!(prompt.contains("\"recipes\""));
    }

    #[test]
    fn test_surprise_mode_wins_over_other_inputs() {
        let mut request = structured_request();
        request.surprise_mode = true;
        let prompt = render_prompt(&request);
        assert!(prompt.contains("completely random and creative"));
        assert!(!prompt.contains("BASE: rice"));
    }

    #[test]
    fn test_all_variants_share_contract() {
        let voice = GenerateRequest {
            voice_request: Some("pasta".to_string()),
            ..Default::default()
        };
        let surprise = GenerateRequest {
            surprise_mode: true,
            ..Default::default()
        };
        for request in [structured_request(), voice, surprise] {
            let prompt = render_prompt(&request);
            assert!(prompt.contains("Return only valid JSON"));
            assert!(prompt.contains("\"cookTime\""));
        }
    }
}
