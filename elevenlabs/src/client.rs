//! ElevenLabs API client.

use std::sync::Arc;
use std::time::Duration;

use super::{
    error::{Error, Result},
    http::HttpClient,
    models::ModelService,
    tts::TtsService,
    voice::VoiceService,
};

/// Default ElevenLabs API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// ElevenLabs API client.
///
/// The client provides access to the ElevenLabs API services.
///
/// # Example
///
/// ```rust,no_run
/// use elevenlabs_sdk::Client;
///
/// # fn main() -> elevenlabs_sdk::Result<()> {
/// let client = Client::new("your-api-key")?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

/// Client configuration.
#[derive(Clone)]
struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new ElevenLabs API client.
    ///
    /// No network call is made at construction time; a malformed key is
    /// only rejected by the first real request.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Returns the configured API key.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the text-to-speech service.
    pub fn tts(&self) -> TtsService {
        TtsService::new(self.http.clone())
    }

    /// Returns the voice catalogue service.
    pub fn voices(&self) -> VoiceService {
        VoiceService::new(self.http.clone())
    }

    /// Returns the model catalogue service.
    pub fn models(&self) -> ModelService {
        ModelService::new(self.http.clone())
    }

    /// Returns a reference to the internal HTTP client.
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

/// Builder for creating an ElevenLabs API client.
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }

        let http = HttpClient::new(self.base_url.clone(), self.api_key.clone(), self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
            config: ClientConfig {
                api_key: self.api_key,
                base_url: self.base_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_api_key() {
        assert!(matches!(Client::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = Client::builder("key")
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(client.api_key(), "key");
    }
}
