//! LLM provider trait.

use async_trait::async_trait;

use super::error::LLMError;
use super::types::Message;

/// Trait for LLM providers with different API formats.
///
/// Implementations translate the common message list into their upstream
/// wire format, make exactly one HTTP call, and normalize the answer back
/// into an assistant [`Message`].
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make a chat completion request.
    async fn chat(&self, messages: &[Message]) -> Result<Message, LLMError>;
}
