//! Error types for the CoinCap client

use thiserror::Error;

/// Errors that can occur when configuring the client or fetching assets
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client configuration is unusable (zero timeout, missing token, bad base URL)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Asset identifier rejected before sending a request
    #[error("Invalid asset id: {0:?}")]
    InvalidAssetId(String),

    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Timeout waiting for response
    #[error("Request timeout")]
    Timeout,

    /// Response body does not match the expected envelope
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upstream reported that the requested asset does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Upstream answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

impl ClientError {
    /// Creates an InvalidConfiguration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Maps a reqwest failure, keeping timeouts distinguishable
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }

    /// True for failures of the HTTP exchange itself (network or timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// True when the response body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// True for configuration problems detected before any request
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
