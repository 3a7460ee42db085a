use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration for the Gemini text generation endpoint
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier (e.g., "gemini-1.5-pro-001")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Top-p (nucleus) sampling cutoff
    pub top_p: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Base URL for the API endpoint (overridable for tests and proxies)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            model: default_model(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
            base_url: default_base_url(),
            timeout: 30,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro-001".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl GeminiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CAREPLAN__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CAREPLAN__MAX_OUTPUT_TOKENS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("CAREPLAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
