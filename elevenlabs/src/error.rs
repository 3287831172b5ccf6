//! Error types for the ElevenLabs API client.

use thiserror::Error;

/// Well-known API error status strings.
pub mod status {
    pub const INVALID_API_KEY: &str = "invalid_api_key";
    pub const QUOTA_EXCEEDED: &str = "quota_exceeded";
    pub const TOO_MANY_CONCURRENT_REQUESTS: &str = "too_many_concurrent_requests";
    pub const VOICE_NOT_FOUND: &str = "voice_not_found";
}

/// Result type alias for ElevenLabs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ElevenLabs API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// API error returned by ElevenLabs.
    #[error("elevenlabs: {message} (status={status}, http={http_status})")]
    Api {
        status: String,
        message: String,
        http_status: u16,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(status: impl Into<String>, message: impl Into<String>, http_status: u16) -> Self {
        Error::Api {
            status: status.into(),
            message: message.into(),
            http_status,
        }
    }

    /// Returns true if this is an invalid API key error.
    pub fn is_invalid_api_key(&self) -> bool {
        match self {
            Error::Api {
                status,
                http_status,
                ..
            } => status == status::INVALID_API_KEY || *http_status == 401,
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            Error::Api {
                status,
                http_status,
                ..
            } => status == status::TOO_MANY_CONCURRENT_REQUESTS || *http_status == 429,
            _ => false,
        }
    }

    /// Returns true if the request itself was rejected by the API.
    pub fn is_invalid_request(&self) -> bool {
        match self {
            Error::Api { http_status, .. } => *http_status == 400 || *http_status == 422,
            _ => false,
        }
    }

    /// Returns true if this is a server-side error.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { http_status, .. } => *http_status >= 500,
            _ => false,
        }
    }
}
