use std::collections::BTreeMap;

use crate::model::NO_INSTRUCTIONS_AVAILABLE;

/// Pair each ingredient with the instruction line at the same position.
///
/// Pure positional zip, right-padded with the placeholder when instruction
/// lines run out. The ingredient name is the map key, so a repeated name
/// keeps the instruction from its last position.
pub fn map_instructions(
    ingredients: &[String],
    instruction_lines: &[String],
) -> BTreeMap<String, String> {
    ingredients
        .iter()
        .enumerate()
        .map(|(idx, ingredient)| {
            let instruction = instruction_lines
                .get(idx)
                .cloned()
                .unwrap_or_else(|| NO_INSTRUCTIONS_AVAILABLE.to_string());
            (ingredient.clone(), instruction)
        })
        .collect()
}
