use std::env;

use careplan::{generate_care_plan_with_config, GeminiConfig, PlanError, SurveyData};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a survey JSON file as an argument")?;

    let survey: SurveyData = serde_json::from_str(&tokio::fs::read_to_string(path).await?)?;
    let config = GeminiConfig::load().map_err(PlanError::Config)?;
    let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

    let plan = generate_care_plan_with_config(&survey, &api_key, config).await;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
