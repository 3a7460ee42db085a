use thiserror::Error;

/// Errors that can occur while generating a care plan
#[derive(Error, Debug)]
pub enum PlanError {
    /// No API key was supplied; checked before any network activity
    #[error("API key is missing. Please configure a valid GEMINI_API_KEY.")]
    MissingApiKey,

    /// Request never produced an HTTP response (connect failure, timeout)
    #[error("Request to Gemini API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini responded with a non-success HTTP status
    #[error("Gemini API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response decoded as JSON but lacked the expected candidate structure
    #[error("Unexpected Gemini response envelope: {0}")]
    MalformedEnvelope(String),

    /// Response text had a truly unexpected shape (e.g. a non-string part)
    #[error("Error parsing hair care plan: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
