//! Model catalogue and well-known identifier constants.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{error::Result, http::HttpClient};

// ==================== Speech Models ====================

/// eleven_multilingual_v2, high-quality synthesis in 29 languages.
pub const MODEL_MULTILINGUAL_V2: &str = "eleven_multilingual_v2";

/// eleven_turbo_v2_5, low-latency synthesis.
pub const MODEL_TURBO_V2_5: &str = "eleven_turbo_v2_5";

/// eleven_flash_v2_5, lowest-latency synthesis.
pub const MODEL_FLASH_V2_5: &str = "eleven_flash_v2_5";

// ==================== Output Formats ====================

/// MP3 at 44.1kHz, 128kbps. Default for synthesis requests.
pub const OUTPUT_MP3_44100_128: &str = "mp3_44100_128";

/// MP3 at 44.1kHz, 192kbps.
pub const OUTPUT_MP3_44100_192: &str = "mp3_44100_192";

/// Raw 16-bit PCM at 16kHz.
pub const OUTPUT_PCM_16000: &str = "pcm_16000";

/// Raw 16-bit PCM at 44.1kHz.
pub const OUTPUT_PCM_44100: &str = "pcm_44100";

/// Model catalogue service.
pub struct ModelService {
    http: Arc<HttpClient>,
}

impl ModelService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists the synthesis models available to the account.
    pub async fn list(&self) -> Result<Vec<ModelInfo>> {
        self.http.get("/v1/models").await
    }
}

/// A synthesis model variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier.
    pub model_id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the model supports text-to-speech.
    #[serde(default)]
    pub can_do_text_to_speech: bool,

    /// Languages the model can synthesize.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<ModelLanguage>,
}

/// A language supported by a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelLanguage {
    /// Language identifier, e.g. "en".
    pub language_id: String,

    /// Display name, e.g. "English".
    #[serde(default)]
    pub name: String,
}
