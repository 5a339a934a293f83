//! Chooses which provider answers chat requests.

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use super::error::LLMError;
use super::google::GoogleProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;
use super::types::{ChatReply, Message, Provider};
use crate::config::{Credentials, ProvidersConfig};

/// Routes chat requests to the single provider selected at startup.
///
/// The choice is fixed when the router is built; it never looks at the
/// environment again.
#[derive(Clone)]
pub struct ChatRouter {
    route: Route,
}

#[derive(Clone)]
enum Route {
    Upstream {
        provider: Provider,
        adapter: Arc<dyn LLMProvider>,
    },
    Fallback,
}

impl ChatRouter {
    /// Build the router from credentials read at process start.
    pub fn from_config(
        client: Client,
        credentials: &Credentials,
        providers: &ProvidersConfig,
    ) -> Self {
        let adapter: Option<Arc<dyn LLMProvider>> = match credentials.provider() {
            Provider::Google => credentials.google_api_key().map(|key| {
                Arc::new(GoogleProvider::new(
                    client,
                    key.to_string(),
                    providers.google.base_url.clone(),
                    providers.google.model.clone(),
                )) as Arc<dyn LLMProvider>
            }),
            Provider::OpenAI => credentials.openai_api_key().map(|key| {
                Arc::new(OpenAIProvider::new(
                    client,
                    key.to_string(),
                    providers.openai.base_url.clone(),
                    providers.openai.model.clone(),
                )) as Arc<dyn LLMProvider>
            }),
            Provider::None => None,
        };

        let router = match adapter {
            Some(adapter) => Self::upstream(credentials.provider(), adapter),
            None => Self::fallback(),
        };

        match router.provider() {
            Provider::None => warn!(
                "No LLM provider configured. \
                Set GOOGLE_API_KEY or OPENAI_API_KEY to enable chat."
            ),
            provider => info!(%provider, "Registered chat provider"),
        }

        router
    }

    /// Route every request to `adapter`, tagging replies with `provider`.
    pub fn upstream(provider: Provider, adapter: Arc<dyn LLMProvider>) -> Self {
        Self {
            route: Route::Upstream { provider, adapter },
        }
    }

    /// Answer every request with the fixed fallback reply.
    pub fn fallback() -> Self {
        Self {
            route: Route::Fallback,
        }
    }

    /// The provider that answers requests; used by the health check.
    pub fn provider(&self) -> Provider {
        match &self.route {
            Route::Upstream { provider, .. } => *provider,
            Route::Fallback => Provider::None,
        }
    }

    /// Send `messages` to the selected provider.
    ///
    /// Adapter failures are returned as-is; the fallback reply is only used
    /// when no provider is configured.
    pub async fn route(&self, messages: &[Message]) -> Result<ChatReply, LLMError> {
        match &self.route {
            Route::Upstream { provider, adapter } => {
                let message = adapter.chat(messages).await?;
                Ok(ChatReply {
                    message,
                    provider: *provider,
                })
            }
            Route::Fallback => Ok(ChatReply::fallback()),
        }
    }
}
