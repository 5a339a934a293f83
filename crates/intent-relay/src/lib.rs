//! Intent Relay - a stateless relay between a Web3 intent UI and a hosted LLM.

pub mod build_info;
pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
