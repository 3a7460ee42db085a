use crate::model::{SurveyData, NOT_SPECIFIED};

/// The instruction preamble sent ahead of the survey data.
///
/// It names the four section labels ("Ingredients:", "Wash Frequency:",
/// "Recommendations:", "Instructions:") the model is expected to emit. The
/// label text, order and casing are a de facto protocol with the parsing
/// stage and must not be reworded.
///
/// The preamble is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const CARE_PLAN_PROMPT: &str = include_str!("prompt.txt");

/// Build the full prompt for a survey: preamble plus a "Survey Data:" block
/// listing every attribute, with "Not specified" for blank fields.
pub fn build_prompt(survey: &SurveyData) -> String {
    let field = |value: &Option<String>| -> String {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_string()
    };

    format!(
        "{}\nSurvey Data:\n\
         - Hair Type: {}\n\
         - Hair Texture: {}\n\
         - Hair Porosity: {}\n\
         - Scalp Condition: {}\n\
         - Product Use: {}\n\
         - Styling Habits: {}\n\
         - Hair Goals: {}\n\
         - Lifestyle: {}\n",
        CARE_PLAN_PROMPT,
        field(&survey.hair_type),
        field(&survey.hair_texture),
        field(&survey.porosity),
        field(&survey.scalp_condition),
        field(&survey.product_use),
        field(&survey.styling_habits),
        field(&survey.hair_goals),
        field(&survey.lifestyle),
    )
}
