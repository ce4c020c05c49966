//! Anthropic Messages API backend

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use shared_types::{InsightText, PromptRequest};
use tracing::{debug, warn};

use crate::error::CompletionError;
use crate::CompletionService;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const API_VERSION: &str = "2023-06-01";

#[derive(Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct AnthropicClient {
    config: AnthropicConfig,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl AnthropicClient {
    /// Create a client; a blank API key is rejected up front
    pub fn new(config: AnthropicConfig) -> Result<Self, CompletionError> {
        if config.api_key.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        let headers = build_headers(&config.api_key)?;
        Ok(Self {
            config,
            headers,
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap, CompletionError> {
    let mut headers = HeaderMap::new();
    let mut key = HeaderValue::from_str(api_key)
        .map_err(|e| CompletionError::Configuration(format!("invalid API key: {}", e)))?;
    key.set_sensitive(true);
    headers.insert("x-api-key", key);
    headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl CompletionService for AnthropicClient {
    async fn complete(&self, request: &PromptRequest) -> Result<InsightText, CompletionError> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        debug!(
            "Completion request: model={}, prompt_chars={}, max_tokens={}",
            self.config.model,
            request.prompt.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            warn!("Completion service returned {}", status);
            return Err(map_error(status, &text));
        }

        parse_response(&text)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn map_error(status: u16, body: &str) -> CompletionError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => CompletionError::Authentication(message),
        429 => CompletionError::RateLimited,
        _ => CompletionError::Api { status, message },
    }
}

/// Concatenate the text blocks of a Messages API response
fn parse_response(body: &str) -> Result<InsightText, CompletionError> {
    let parsed: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    let text: String = parsed
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();

    Ok(InsightText::new(text))
}
