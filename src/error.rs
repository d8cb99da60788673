//! Backend Errors
//!
//! Error kinds surfaced by every backend call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be built or the fetch itself failed
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// The server received the request and answered, even if with an error
    pub fn reached_server(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
