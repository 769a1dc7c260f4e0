use crate::AiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Boundary trait for the text-transformation collaborator. The engine and
/// parser only see a prompt-in, text-out function.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    /// Request timeout in seconds. Generation failure must never block a
    /// transition, so the call is bounded.
    pub timeout_seconds: u64,
}

/// Messages API client.
pub struct AnthropicClient {
    config: AnthropicConfig,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        Self::with_base_url(config, "https://api.anthropic.com")
    }

    pub fn with_base_url(config: AnthropicConfig, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            config,
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| AiError::Transport(e.to_string()))?;

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AiError::Transport(e.to_string()))?;

        match body.content.first() {
            Some(block) if block.kind == "text" => Ok(block.text.clone()),
            _ => Err(AiError::MalformedResponse),
        }
    }
}
