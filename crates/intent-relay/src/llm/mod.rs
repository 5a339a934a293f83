//! LLM provider adapters and the router that picks between them.

mod error;
mod google;
mod openai;
mod provider;
mod router;
mod types;

pub use error::LLMError;
pub use google::GoogleProvider;
pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use router::ChatRouter;
pub use types::{ChatReply, Message, Provider, Role};
