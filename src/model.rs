use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default value for any survey field the user left blank
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel ingredient used when no ingredients could be extracted at all
pub const NO_INGREDIENTS_FOUND: &str = "No ingredients found";

/// Placeholder paired with ingredients that have no instruction line
pub const NO_INSTRUCTIONS_AVAILABLE: &str = "No specific instructions available.";

/// Survey responses describing a user's hair care profile.
///
/// Every field is optional; absent fields render as "Not specified" in the
/// prompt. Field names follow the upstream survey form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyData {
    pub hair_type: Option<String>,
    pub hair_texture: Option<String>,
    pub porosity: Option<String>,
    pub scalp_condition: Option<String>,
    pub product_use: Option<String>,
    pub styling_habits: Option<String>,
    pub hair_goals: Option<String>,
    pub lifestyle: Option<String>,
}

/// Structured hair care plan extracted from the model's response.
///
/// Failure never propagates past the orchestrator: a failed request or parse
/// yields a plan whose `error` field is set, with `raw_response` preserved
/// for debugging where the raw text was available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub ingredients: Vec<String>,
    pub wash_frequency: String,
    pub recommendations: Vec<String>,
    /// Ingredient name -> instruction text, paired by position
    pub instructions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl Default for CarePlan {
    fn default() -> Self {
        CarePlan {
            ingredients: Vec::new(),
            wash_frequency: NOT_SPECIFIED.to_string(),
            recommendations: Vec::new(),
            instructions: BTreeMap::new(),
            error: None,
            raw_response: None,
        }
    }
}

impl CarePlan {
    /// Build the error-valued plan returned from every failure path.
    pub fn failed(error: impl Into<String>, raw_response: Option<String>) -> Self {
        CarePlan {
            error: Some(error.into()),
            raw_response,
            ..CarePlan::default()
        }
    }

    /// Whether this plan represents a failed generation attempt.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
