//! ElevenLabs API SDK for Rust.
//!
//! This crate provides a client for the ElevenLabs text-to-speech API.

mod client;
mod error;
pub mod http;
mod models;
mod tts;
mod voice;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use models::{ModelInfo, ModelLanguage, ModelService};
pub use models::{
    MODEL_FLASH_V2_5, MODEL_MULTILINGUAL_V2, MODEL_TURBO_V2_5,
    OUTPUT_MP3_44100_128, OUTPUT_MP3_44100_192, OUTPUT_PCM_16000, OUTPUT_PCM_44100,
};
pub use tts::{write_audio_stream, TtsRequest, TtsService, VoiceSettings};
pub use voice::{VoiceInfo, VoiceListResponse, VoiceService};
