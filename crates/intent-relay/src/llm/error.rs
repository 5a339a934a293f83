//! LLM error types.

use thiserror::Error;

/// Errors that can occur when making LLM API calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed, or the response body could not be decoded
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Endpoint could not be built from the configured base URL
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// API answered successfully but carried no choice to use
    #[error("response contained no choices")]
    EmptyResponse,
}

impl LLMError {
    /// Build an `Api` error from a non-success response, consuming its body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        LLMError::Api { status, message }
    }
}
