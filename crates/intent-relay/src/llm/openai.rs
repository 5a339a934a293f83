//! OpenAI chat-completions provider.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{Message, Role};

/// OpenAI provider. Messages are forwarded as-is with a fixed sampling setup.
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAIProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";
    pub const TEMPERATURE: f32 = 0.2;
    pub const MAX_TOKENS: u32 = 300;

    #[must_use]
    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn chat(&self, messages: &[Message]) -> Result<Message, LLMError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request = to_request(&self.model, messages);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LLMError::from_response(response).await);
        }

        let openai_response: Response = response.json().await?;
        from_response(openai_response)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, serde::Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, serde::Deserialize)]
struct Response {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, serde::Deserialize)]
struct Choice {
    message: ResponseMessage,
}

/// OpenAI may send `null` content (e.g. refusals), so it is optional here.
#[derive(Debug, serde::Deserialize)]
struct ResponseMessage {
    role: Role,
    #[serde(default)]
    content: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

fn to_request<'a>(model: &'a str, messages: &'a [Message]) -> Request<'a> {
    Request {
        model,
        messages,
        temperature: OpenAIProvider::TEMPERATURE,
        max_tokens: OpenAIProvider::MAX_TOKENS,
    }
}

fn from_response(response: Response) -> Result<Message, LLMError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LLMError::EmptyResponse)?;

    Ok(Message {
        role: choice.message.role,
        content: choice.message.content.unwrap_or_default(),
    })
}
