use careplan::{generate_care_plan, generate_care_plan_with_config, GeminiConfig, SurveyData};
use mockito::Matcher;
use serde_json::json;

const MODEL_PATH: &str = "/v1beta/models/gemini-1.5-pro-001:generateContent";

fn test_config(server: &mockito::ServerGuard) -> GeminiConfig {
    GeminiConfig {
        base_url: server.url(),
        timeout: 5,
        ..GeminiConfig::default()
    }
}

fn survey() -> SurveyData {
    SurveyData {
        hair_type: Some("Curly".to_string()),
        hair_goals: Some("Moisture retention".to_string()),
        ..SurveyData::default()
    }
}

fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_plan_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let reply = "Ingredients: Aloe vera, Argan oil\n\
                 Wash Frequency: Twice a week\n\
                 Recommendations:\nDeep condition monthly\n\
                 Instructions:\nApply aloe to damp hair\nSeal with argan oil";

    let mock = server
        .mock("POST", MODEL_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "maxOutputTokens": 2048 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(reply))
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "test-key", test_config(&server)).await;

    mock.assert_async().await;
    assert!(plan.error.is_none());
    assert_eq!(plan.ingredients, vec!["Aloe vera", "Argan oil"]);
    assert_eq!(plan.wash_frequency, "Twice a week");
    assert_eq!(plan.recommendations, vec!["Deep condition monthly"]);
    assert_eq!(plan.instructions["Argan oil"], "Seal with argan oil");
}

#[tokio::test]
async fn test_prompt_carries_survey_values_and_defaults() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", MODEL_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Hair Type: Curly".to_string()),
            Matcher::Regex("Hair Porosity: Not specified".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope("Ingredients: aloe"))
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "test-key", test_config(&server)).await;

    mock.assert_async().await;
    assert!(plan.error.is_none());
}

#[tokio::test]
async fn test_http_failure_reports_status_as_value() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", MODEL_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "test-key", test_config(&server)).await;

    let error = plan.error.as_deref().expect("plan should carry an error");
    assert!(error.contains("429"));
    assert_eq!(plan.raw_response.as_deref(), Some("rate limited"));
    assert!(plan.ingredients.is_empty());
}

#[tokio::test]
async fn test_malformed_envelope_reported_as_value() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", MODEL_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "test-key", test_config(&server)).await;

    let error = plan.error.as_deref().expect("plan should carry an error");
    assert!(error.contains("envelope"));
}

#[tokio::test]
async fn test_blank_api_key_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "", test_config(&server)).await;

    mock.assert_async().await;
    let error = plan.error.as_deref().expect("plan should carry an error");
    assert!(error.contains("API key"));
}

#[tokio::test]
async fn test_default_entry_point_rejects_blank_key() {
    let plan = generate_care_plan(&survey(), "  ").await;
    assert!(plan.error.as_deref().unwrap().contains("API key"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_request_failure_not_http() {
    // Nothing listens here; the failure path is the request error, which
    // carries no HTTP status number
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: 1,
        ..GeminiConfig::default()
    };

    let plan = generate_care_plan_with_config(&survey(), "test-key", config).await;

    let error = plan.error.as_deref().expect("plan should carry an error");
    assert!(error.contains("Request to Gemini API failed"));
    assert!(plan.raw_response.is_none());
}

#[tokio::test]
async fn test_fallback_when_reply_has_no_section_labels() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("POST", MODEL_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope("rosemary oil, peppermint oil, castor oil"))
        .create_async()
        .await;

    let plan = generate_care_plan_with_config(&survey(), "test-key", test_config(&server)).await;

    assert!(plan.error.is_none());
    assert_eq!(
        plan.ingredients,
        vec!["rosemary oil", "peppermint oil", "castor oil"]
    );
    assert!(plan
        .instructions
        .values()
        .all(|v| v == "No specific instructions available."));
}
