//! HTTP client implementation for the ElevenLabs API.

use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client as ReqwestClient, Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::error::{Error, Result};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "xi-api-key";

/// HTTP client for the ElevenLabs API.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Makes a GET request and decodes the JSON response.
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .headers(self.default_headers()?)
            .send()
            .await?;

        self.handle_json_response(response).await
    }

    /// Makes a POST request and returns the raw response body.
    pub async fn post_bytes<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &T,
    ) -> Result<Bytes>
    where
        T: Serialize + ?Sized,
    {
        let response = self.send_post(path, query, body).await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        Ok(response.bytes().await?)
    }

    /// Makes a POST request and returns the response body as a byte stream.
    ///
    /// The stream is finite and consumed once; it is not restartable.
    pub async fn post_stream<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: T,
    ) -> Result<impl Stream<Item = Result<Bytes>> + use<T>>
    where
        T: Serialize,
    {
        let response = self.send_post(path, query, &body).await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        Ok(response.bytes_stream().map(|r| r.map_err(Error::from)))
    }

    async fn send_post<T>(&self, path: &str, query: &[(&str, &str)], body: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .query(query)
            .headers(self.default_headers()?)
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    /// Returns default headers for API requests.
    ///
    /// Fails rather than sending an unauthenticated request when the key is
    /// not a valid header value.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::Config("api_key is not a valid header value".to_string()))?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("elevenlabs-sdk-rust/0.1"),
        );
        Ok(headers)
    }

    /// Handles a JSON API response.
    async fn handle_json_response<R>(&self, response: Response) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Handles an error response.
    async fn handle_error_response(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => parse_error(&body, status),
            Err(e) => Error::Http(e),
        }
    }
}

/// Error envelope returned by the API.
///
/// The `detail` field is either an object with `status` and `message`, a
/// plain string, or (for 422 validation failures) a list of field errors.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    detail: serde_json::Value,
}

/// Parses an error response body into an [`Error::Api`].
pub(crate) fn parse_error(body: &[u8], http_status: u16) -> Error {
    if let Ok(resp) = serde_json::from_slice::<ApiErrorResponse>(body) {
        match &resp.detail {
            serde_json::Value::Object(obj) => {
                let status = obj
                    .get("status")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let message = obj
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                return Error::api(status, message, http_status);
            }
            serde_json::Value::String(s) => {
                return Error::api("", s.clone(), http_status);
            }
            other => {
                return Error::api("", other.to_string(), http_status);
            }
        }
    }

    Error::api(
        "",
        String::from_utf8_lossy(body).to_string(),
        http_status,
    )
}
