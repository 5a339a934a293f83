//! Common types shared by every provider adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Which upstream answered a chat request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    OpenAI,
    /// No credential configured; the router answers with a fixed message.
    None,
}

impl Provider {
    /// Pick a provider from credential presence. Google wins when both are set.
    pub fn select(google_configured: bool, openai_configured: bool) -> Self {
        match (google_configured, openai_configured) {
            (true, _) => Provider::Google,
            (false, true) => Provider::OpenAI,
            (false, false) => Provider::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAI => "openai",
            Provider::None => "none",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The assistant message produced for a chat request, tagged with its source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub message: Message,
    pub provider: Provider,
}

impl ChatReply {
    pub const FALLBACK_CONTENT: &'static str = "No AI provider configured. \
        Set GOOGLE_API_KEY or OPENAI_API_KEY on the server to enable the assistant.";

    /// The fixed reply used when no provider is configured.
    pub fn fallback() -> Self {
        Self {
            message: Message::assistant(Self::FALLBACK_CONTENT),
            provider: Provider::None,
        }
    }
}
