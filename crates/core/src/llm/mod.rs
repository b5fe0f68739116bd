//! The LLM transformation collaborator.
//!
//! Raw documentation goes in, section-delimited FTL markdown comes out. The
//! core only depends on the [`Transformer`] trait; [`AnthropicTransformer`]
//! is the production implementation behind the `llm` feature.

#[cfg(feature = "llm")]
pub mod anthropic;

use std::future::Future;

use thiserror::Error;

#[cfg(feature = "llm")]
pub use anthropic::AnthropicTransformer;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Messages API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: retry after {retry_after:?}s")]
    RateLimitExceeded { retry_after: Option<u64> },

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transformation not available: {0}")]
    Unavailable(String),
}

impl LlmError {
    /// Maps a non-success HTTP status and body to an error.
    pub fn from_status(status: u16, body: &str, retry_after: Option<u64>) -> Self {
        match status {
            401 | 403 => LlmError::AuthenticationError(body.to_string()),
            429 => LlmError::RateLimitExceeded { retry_after },
            _ => LlmError::ApiError { status, message: body.to_string() },
        }
    }
}

/// Turns free-form documentation into section-delimited FTL text.
pub trait Transformer {
    /// Identifier of the model doing the work.
    fn model(&self) -> &str;

    fn transform(&self, input: &str) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Placeholder for pipelines that parse their input directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransform;

impl Transformer for NoTransform {
    fn model(&self) -> &str {
        "none"
    }

    async fn transform(&self, _input: &str) -> Result<String, LlmError> {
        Err(LlmError::Unavailable("no transformer configured".to_string()))
    }
}

/// Settings for the LLM call.
///
/// # Example
///
/// ```rust
/// use ftl_core::LlmConfig;
///
/// let config = LlmConfig::builder()
///     .api_key("sk-test")
///     .model("claude-sonnet-4-20250514")
///     .max_tokens(2000)
///     .build();
/// assert_eq!(config.max_tokens, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key sent with each request.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Messages API endpoint.
    pub endpoint: String,
    /// Sampling temperature (default: 0.1).
    pub temperature: f32,
    /// Maximum output tokens (default: 4000).
    pub max_tokens: u32,
    /// Request timeout in seconds (default: 120).
    pub timeout: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: 0.1,
            max_tokens: 4000,
            timeout: 120,
        }
    }
}

impl LlmConfig {
    pub fn builder() -> LlmConfigBuilder {
        LlmConfigBuilder::new()
    }
}

/// Builder for LlmConfig.
pub struct LlmConfigBuilder {
    config: LlmConfig,
}

impl LlmConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: LlmConfig::default() }
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.config.api_key = value.into();
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.config.model = value.into();
        self
    }

    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.config.endpoint = value.into();
        self
    }

    pub fn temperature(mut self, value: f32) -> Self {
        self.config.temperature = value;
        self
    }

    pub fn max_tokens(mut self, value: u32) -> Self {
        self.config.max_tokens = value;
        self
    }

    pub fn timeout(mut self, value: u64) -> Self {
        self.config.timeout = value;
        self
    }

    pub fn build(self) -> LlmConfig {
        self.config
    }
}

impl Default for LlmConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.max_tokens, 4000);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_llm_config_builder() {
        let config = LlmConfig::builder().api_key("key").model("custom-model").timeout(5).temperature(0.0).build();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, "custom-model");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_error_from_status() {
        assert!(matches!(LlmError::from_status(401, "bad key", None), LlmError::AuthenticationError(_)));
        assert!(matches!(LlmError::from_status(403, "forbidden", None), LlmError::AuthenticationError(_)));
        assert!(matches!(
            LlmError::from_status(429, "slow down", Some(10)),
            LlmError::RateLimitExceeded { retry_after: Some(10) }
        ));
        match LlmError::from_status(529, "overloaded", None) {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 529);
                assert_eq!(message, "overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_no_transform_fails() {
        let result = tokio::runtime::Runtime::new().unwrap().block_on(NoTransform.transform("text"));
        assert!(matches!(result, Err(LlmError::Unavailable(_))));
    }
}
