//! Turns hair care survey responses into a structured care plan by prompting
//! the Gemini API and parsing its loosely-formatted plain-text reply.
//!
//! The surrounding application (routing, sessions, persistence, rendering)
//! supplies a [`SurveyData`] and an API key and consumes a [`CarePlan`];
//! failures never propagate as errors past [`generate_care_plan`] — they
//! come back as a plan whose `error` field is set.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod service;

pub use client::{GeminiClient, TextGenerator};
pub use config::GeminiConfig;
pub use error::PlanError;
pub use model::{CarePlan, SurveyData};
pub use service::CarePlanService;

/// Generate a care plan for one survey using the default Gemini client.
///
/// A blank API key short-circuits before any network activity. The returned
/// plan carries either the extracted sections or an `error` message (with
/// `raw_response` where a response body was available) — never both absent.
pub async fn generate_care_plan(survey: &SurveyData, api_key: &str) -> CarePlan {
    match GeminiClient::new(api_key) {
        Ok(client) => CarePlanService::new(client).generate(survey).await,
        Err(err) => CarePlan::failed(err.to_string(), None),
    }
}

/// Same as [`generate_care_plan`] with an explicit endpoint configuration.
pub async fn generate_care_plan_with_config(
    survey: &SurveyData,
    api_key: &str,
    config: GeminiConfig,
) -> CarePlan {
    match GeminiClient::with_config(api_key, config) {
        Ok(client) => CarePlanService::new(client).generate(survey).await,
        Err(err) => CarePlan::failed(err.to_string(), None),
    }
}
