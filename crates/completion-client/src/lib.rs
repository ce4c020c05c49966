//! Completion service client
//!
//! One prompt in, one text blob out. No conversation state, no streaming
//! and no retries: a failed call surfaces as a [`CompletionError`] and the
//! caller decides what to show the user.

pub mod anthropic;
pub mod error;

use async_trait::async_trait;
use shared_types::{InsightText, PromptRequest};

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use error::CompletionError;

/// A language-model completion backend
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send one prompt and return the generated text
    async fn complete(&self, request: &PromptRequest) -> Result<InsightText, CompletionError>;

    /// Model identifier, for logs
    fn model(&self) -> &str;
}
