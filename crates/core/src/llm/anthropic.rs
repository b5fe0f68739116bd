use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::{LlmConfig, LlmError, Transformer};
use crate::prompts::{PromptSet, compose_user_message};

const API_VERSION: &str = "2023-06-01";

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Messages API response body
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Transformer backed by the Anthropic Messages API.
pub struct AnthropicTransformer {
    config: LlmConfig,
    prompts: PromptSet,
    client: Client,
}

impl AnthropicTransformer {
    pub fn new(config: LlmConfig, prompts: PromptSet) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self { config, prompts, client })
    }

    fn build_request(&self, input: &str) -> MessagesRequest<'_> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: self.prompts.system_message(),
            messages: vec![Message { role: "user", content: compose_user_message(input) }],
        }
    }

    fn parse_response(body: &str) -> Result<String, LlmError> {
        let response: MessagesResponse =
            serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        if response.stop_reason.as_deref() == Some("max_tokens") {
            warn!("completion stopped at max_tokens; output may be truncated");
        }

        let text = response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| LlmError::InvalidResponse("no text content in response".to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty completion".to_string()));
        }

        Ok(text.to_string())
    }
}

impl Transformer for AnthropicTransformer {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn transform(&self, input: &str) -> Result<String, LlmError> {
        let request = self.build_request(input);
        debug!(model = %self.config.model, input_bytes = input.len(), "calling messages api");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { LlmError::Timeout } else { LlmError::NetworkError(e.to_string()) })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let body = response
            .text()
            .await
            .map_err(|e| if e.is_timeout() { LlmError::Timeout } else { LlmError::NetworkError(e.to_string()) })?;

        if !status.is_success() {
            return Err(LlmError::from_status(status.as_u16(), &body, retry_after));
        }

        let text = Self::parse_response(&body)?;
        debug!(output_bytes = text.len(), "received completion");

        Ok(text)
    }
}
