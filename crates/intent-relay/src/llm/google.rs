//! Google Gemini provider with native `generateContent` format.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{Message, Role};

/// Gemini provider. The API key travels as the `key` query parameter.
pub struct GoogleProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GoogleProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Content used when the first candidate carries no text.
    pub const NO_CONTENT: &'static str = "(no content)";

    #[must_use]
    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> Result<Url, LLMError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            base, self.model
        ))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl LLMProvider for GoogleProvider {
    async fn chat(&self, messages: &[Message]) -> Result<Message, LLMError> {
        let url = self.endpoint()?;
        let request = to_request(messages);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(redact_url)?;

        if !response.status().is_success() {
            return Err(LLMError::from_response(response).await);
        }

        let google_response: Response = response.json().await.map_err(redact_url)?;
        Ok(from_response(google_response))
    }
}

/// The request URL carries the API key, so it must not reach error messages.
fn redact_url(err: reqwest::Error) -> LLMError {
    LLMError::Request(err.without_url())
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, serde::Serialize)]
struct Request {
    contents: Vec<Content>,
}

#[derive(Debug, serde::Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, serde::Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, serde::Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

/// Gemini has no system role, so anything that is not the assistant is sent as `user`.
fn to_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::User | Role::System => "user",
    }
}

fn to_request(messages: &[Message]) -> Request {
    let contents = messages
        .iter()
        .map(|msg| Content {
            role: to_role(msg.role),
            parts: vec![RequestPart {
                text: msg.content.clone(),
            }],
        })
        .collect();

    Request { contents }
}

fn from_response(response: Response) -> Message {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        Message::assistant(GoogleProvider::NO_CONTENT)
    } else {
        Message::assistant(text)
    }
}
