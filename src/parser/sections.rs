use crate::model::NOT_SPECIFIED;

const INGREDIENTS_LABEL: &str = "ingredients:";
const WASH_FREQUENCY_LABEL: &str = "wash frequency:";
const RECOMMENDATIONS_LABEL: &str = "recommendations:";
const INSTRUCTIONS_LABEL: &str = "instructions:";
const SURVEY_DATA_LABEL: &str = "survey data:";

/// Raw sections carved out of the model's reply.
///
/// This is a partial result: missing labels yield empty or defaulted fields,
/// never an error. Signaling failure is the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    pub ingredients: Vec<String>,
    pub wash_frequency: Option<String>,
    pub recommendations: Vec<String>,
    pub instruction_lines: Vec<String>,
}

/// Split the raw reply into the four labeled sections.
///
/// Labels are matched case-insensitively by line prefix. A missing
/// "Recommendations:" or "Instructions:" boundary makes the recommendations
/// section empty rather than swallowing unrelated leading lines.
pub fn parse_sections(text: &str) -> Sections {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let ingredients = find_label(&lines, INGREDIENTS_LABEL)
        .map(|(_, rest)| split_ingredients(rest))
        .unwrap_or_default();

    let wash_frequency =
        find_label(&lines, WASH_FREQUENCY_LABEL).map(|(_, rest)| rest.trim().to_string());

    let recommendations = match (
        find_label(&lines, RECOMMENDATIONS_LABEL),
        find_label(&lines, INSTRUCTIONS_LABEL),
    ) {
        (Some((start, _)), Some((end, _))) if start < end => lines[start + 1..end]
            .iter()
            .filter(|line| !starts_with_label(line, INSTRUCTIONS_LABEL))
            .map(|line| line.to_string())
            .collect(),
        // Either boundary missing: the section is absent, not "from line 0"
        _ => Vec::new(),
    };

    let instruction_lines = find_label(&lines, INSTRUCTIONS_LABEL)
        .map(|(idx, _)| {
            lines[idx + 1..]
                .iter()
                // "Survey Data:" lines are prompt echo, not instructions
                .filter(|line| !starts_with_label(line, SURVEY_DATA_LABEL))
                .map(|line| line.to_string())
                .collect()
        })
        .unwrap_or_default();

    Sections {
        ingredients,
        wash_frequency,
        recommendations,
        instruction_lines,
    }
}

/// Wash frequency with the documented default applied.
pub fn wash_frequency_or_default(sections: &Sections) -> String {
    sections
        .wash_frequency
        .clone()
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Find the first line starting with `label` (case-insensitive); return its
/// index and the content after the label on that line.
fn find_label<'a>(lines: &[&'a str], label: &str) -> Option<(usize, &'a str)> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        starts_with_label(line, label).then(|| (idx, &line[label.len()..]))
    })
}

fn starts_with_label(line: &str, label: &str) -> bool {
    line.get(..label.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label))
}

fn split_ingredients(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
