use log::{debug, error};

use crate::client::TextGenerator;
use crate::error::PlanError;
use crate::model::{CarePlan, SurveyData};
use crate::parser::parse_care_plan;
use crate::prompt::build_prompt;

/// Orchestrates one survey-to-plan cycle: prompt, transport, parse.
///
/// Every failure is folded into the returned [`CarePlan`]'s `error` field;
/// nothing here raises past this boundary.
pub struct CarePlanService<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> CarePlanService<G> {
    pub fn new(generator: G) -> Self {
        CarePlanService { generator }
    }

    pub async fn generate(&self, survey: &SurveyData) -> CarePlan {
        let prompt = build_prompt(survey);
        debug!("Generating care plan with prompt:\n{prompt}");

        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                error!("Care plan generation failed: {err}");
                return failure_plan(err);
            }
        };

        debug!("Received response text:\n{text}");
        parse_care_plan(&text)
    }
}

/// Convert a pipeline error into the error-valued plan handed to callers.
/// The raw HTTP body is preserved where one was captured.
fn failure_plan(err: PlanError) -> CarePlan {
    let raw_response = match &err {
        PlanError::Http { body, .. } if !body.is_empty() => Some(body.clone()),
        _ => None,
    };
    CarePlan::failed(format!("Failed to get plan from AI: {err}"), raw_response)
}
