//! Turns the model's free-form reply into a [`CarePlan`].
//!
//! Three stages: strict section parsing, a pattern-based ingredient fallback
//! used only when the strict pass finds no ingredients, and a positional
//! ingredient-to-instruction mapper. All three are pure; the same text always
//! parses to the same plan.

pub mod fallback;
pub mod mapper;
pub mod sections;

use log::{debug, warn};

use crate::model::CarePlan;

/// Parse raw reply text into a fully populated plan. Total: malformed text
/// degrades to sentinel values rather than an error.
pub fn parse_care_plan(text: &str) -> CarePlan {
    let parsed = sections::parse_sections(text);
    debug!("Parsed sections: {parsed:?}");

    let (ingredients, instruction_lines) = if parsed.ingredients.is_empty() {
        warn!("No ingredients parsed, using fallback extraction");
        // The salvage path has no instruction lines to pair with
        (fallback::extract_ingredients(text), Vec::new())
    } else {
        (parsed.ingredients.clone(), parsed.instruction_lines.clone())
    };

    let instructions = mapper::map_instructions(&ingredients, &instruction_lines);

    CarePlan {
        ingredients,
        wash_frequency: sections::wash_frequency_or_default(&parsed),
        recommendations: parsed.recommendations,
        instructions,
        error: None,
        raw_response: None,
    }
}
