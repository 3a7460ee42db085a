use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::GeminiConfig;
use crate::error::PlanError;

/// Seam between the orchestrator and the text generation backend.
///
/// Production code uses [`GeminiClient`]; tests substitute stubs so the
/// parsing pipeline can be exercised without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send the prompt and return the raw text of the model's reply,
    /// unmodified. All interpretation belongs to the parsing stage.
    async fn generate(&self, prompt: &str) -> Result<String, PlanError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with the default configuration.
    ///
    /// Fails with [`PlanError::MissingApiKey`] when the key is blank, before
    /// any network activity takes place.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PlanError> {
        Self::with_config(api_key, GeminiConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        config: GeminiConfig,
    ) -> Result<Self, PlanError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PlanError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GeminiClient {
            client,
            api_key,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.api_key
        )
    }

    /// Pull the generated text out of the response envelope:
    /// `{candidates: [{content: {parts: [{text}]}}]}`.
    fn extract_text(envelope: &Value) -> Result<String, PlanError> {
        let candidate = envelope["candidates"]
            .get(0)
            .ok_or_else(|| PlanError::MalformedEnvelope("no candidates in response".into()))?;

        let part = candidate["content"]["parts"].get(0).ok_or_else(|| {
            PlanError::MalformedEnvelope("candidate has no content parts".into())
        })?;

        let text = &part["text"];
        if text.is_null() {
            return Err(PlanError::MalformedEnvelope(
                "content part has no text".into(),
            ));
        }

        text.as_str()
            .map(String::from)
            .ok_or_else(|| PlanError::Parse("response text is not a string".into()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        let body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "topK": self.config.top_k,
                "topP": self.config.top_p,
                "maxOutputTokens": self.config.max_output_tokens
            }
        });

        debug!("Sending request to Gemini API (model {})", self.config.model);
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlanError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| PlanError::MalformedEnvelope(format!("response is not JSON: {e}")))?;
        debug!("Gemini API full response: {envelope:?}");

        Self::extract_text(&envelope)
    }
}
