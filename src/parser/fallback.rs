use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::NO_INGREDIENTS_FOUND;

/// A run of letters, whitespace and commas ending at a known section label
/// or at the end of the reply. Salvages an ingredient list from replies that
/// dropped the "Ingredients:" header.
static INGREDIENT_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([A-Za-z\s,]+)(?:\n(?:wash frequency:|recommendations:|instructions:|survey data:)|\z)",
    )
    .expect("ingredient fallback pattern is valid")
});

/// Best-effort ingredient recovery over the raw (un-split) reply text.
///
/// Invoked only when strict section parsing produced no ingredients, and at
/// most once per request. Returns the sentinel list when nothing usable can
/// be salvaged.
pub fn extract_ingredients(raw_text: &str) -> Vec<String> {
    let salvaged: Vec<String> = INGREDIENT_RUN
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
        .map(|run| {
            run.as_str()
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    if salvaged.is_empty() {
        warn!("Fallback extraction found no ingredients in reply");
        return vec![NO_INGREDIENTS_FOUND.to_string()];
    }

    salvaged
}
