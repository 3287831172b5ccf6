//! Voice catalogue service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{error::Result, http::HttpClient};

/// Voice catalogue service.
pub struct VoiceService {
    http: Arc<HttpClient>,
}

impl VoiceService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists the voices available to the account.
    pub async fn list(&self) -> Result<VoiceListResponse> {
        self.http.get("/v1/voices").await
    }

    /// Fetches a single voice by identifier.
    pub async fn get(&self, voice_id: &str) -> Result<VoiceInfo> {
        self.http.get(&format!("/v1/voices/{voice_id}")).await
    }
}

/// Response from the voice list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceListResponse {
    /// Available voices.
    pub voices: Vec<VoiceInfo>,
}

/// A single voice profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Voice identifier.
    pub voice_id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Voice category, e.g. "premade" or "cloned".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL of a short audio preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    /// Descriptive labels such as accent or age.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_voice_list_payload() {
        let payload = serde_json::json!({
            "voices": [
                {
                    "voice_id": "JBFqnCBsd6RMkjVDRZzb",
                    "name": "George",
                    "category": "premade",
                    "labels": {"accent": "british"},
                    "preview_url": "https://example.com/george.mp3"
                },
                {"voice_id": "abc123"}
            ]
        });

        let resp: VoiceListResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(resp.voices.len(), 2);
        assert_eq!(resp.voices[0].name, "George");
        assert_eq!(resp.voices[0].labels["accent"], "british");
        assert!(resp.voices[1].name.is_empty());
    }
}
