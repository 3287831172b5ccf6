//! Text-to-speech service.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::pin::pin;
use std::sync::Arc;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use super::{
    error::Result,
    http::HttpClient,
    models::OUTPUT_MP3_44100_128,
};

/// Text-to-speech service.
pub struct TtsService {
    http: Arc<HttpClient>,
}

impl TtsService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Performs buffered speech synthesis.
    ///
    /// Returns the complete encoded audio payload.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use elevenlabs_sdk::{Client, TtsRequest, MODEL_MULTILINGUAL_V2};
    ///
    /// # async fn run() -> elevenlabs_sdk::Result<()> {
    /// let client = Client::new("your-api-key")?;
    /// let request = TtsRequest {
    ///     voice_id: "JBFqnCBsd6RMkjVDRZzb".to_string(),
    ///     model_id: MODEL_MULTILINGUAL_V2.to_string(),
    ///     text: "Hello, world!".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let audio = client.tts().convert(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn convert(&self, request: &TtsRequest) -> Result<Bytes> {
        let path = format!("/v1/text-to-speech/{}", request.voice_id);
        self.http
            .post_bytes(&path, &[("output_format", request.format())], &request.body())
            .await
    }

    /// Performs streaming speech synthesis.
    ///
    /// Returns a finite stream of raw audio chunks in delivery order. The
    /// stream is consumed once and is not restartable.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::pin::pin;
    /// use futures::StreamExt;
    ///
    /// # async fn run(client: elevenlabs_sdk::Client, request: elevenlabs_sdk::TtsRequest) -> elevenlabs_sdk::Result<()> {
    /// let stream = client.tts().convert_stream(&request).await?;
    /// let mut stream = pin!(stream);
    ///
    /// while let Some(chunk) = stream.next().await {
    ///     let chunk = chunk?;
    ///     // Process chunk bytes
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn convert_stream(
        &self,
        request: &TtsRequest,
    ) -> Result<impl Stream<Item = Result<Bytes>> + use<>> {
        let path = format!("/v1/text-to-speech/{}/stream", request.voice_id);
        self.http
            .post_stream(&path, &[("output_format", request.format())], request.body())
            .await
    }

    /// Performs streaming speech synthesis and writes the audio to a file.
    ///
    /// The destination is created fresh, truncating any existing file of the
    /// same name. Returns the number of bytes written. On a mid-stream
    /// failure the error is returned and the partial file is left on disk.
    pub async fn convert_to_file(
        &self,
        request: &TtsRequest,
        path: impl AsRef<Path>,
    ) -> Result<u64> {
        let stream = self.convert_stream(request).await?;
        write_audio_stream(stream, path).await
    }
}

/// Consumes an audio chunk stream and writes it to a file.
///
/// Chunks are written in delivery order; empty chunks are silently skipped.
/// The file handle is closed on every exit path, including when the stream
/// yields an error mid-way, in which case the partial file remains on disk.
pub async fn write_audio_stream(
    stream: impl Stream<Item = Result<Bytes>>,
    path: impl AsRef<Path>,
) -> Result<u64> {
    let mut file = File::create(path.as_ref())?;
    let mut written = 0u64;

    let mut stream = pin!(stream);
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if !chunk.is_empty() {
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
    }

    Ok(written)
}

// ==================== Request Types ====================

/// Request for speech synthesis.
///
/// `voice_id` and `output_format` address the request (URL path and query);
/// `text`, `model_id` and `voice_settings` form the JSON body. All fields
/// are passed through to the API verbatim, without client-side validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TtsRequest {
    /// Voice identifier.
    pub voice_id: String,

    /// Model identifier, e.g. "eleven_multilingual_v2".
    pub model_id: String,

    /// Output format, e.g. "mp3_44100_128". Empty means the default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output_format: String,

    /// Text to synthesize.
    pub text: String,

    /// Voice tuning parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
}

impl TtsRequest {
    fn format(&self) -> &str {
        if self.output_format.is_empty() {
            OUTPUT_MP3_44100_128
        } else {
            &self.output_format
        }
    }

    fn body(&self) -> TtsApiRequest {
        TtsApiRequest {
            text: self.text.clone(),
            model_id: self.model_id.clone(),
            voice_settings: self.voice_settings.clone(),
        }
    }
}

/// Voice tuning parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice stability (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,

    /// Similarity to the original voice (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,

    /// Style exaggeration (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,

    /// Boost similarity at a latency cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

/// JSON body for the synthesis endpoints.
#[derive(Serialize)]
struct TtsApiRequest {
    text: String,
    model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<VoiceSettings>,
}
