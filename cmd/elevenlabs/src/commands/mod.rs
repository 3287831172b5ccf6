//! CLI commands module.

mod config;
mod model;
mod tts;
mod util;
mod voice;

pub use config::ConfigCommand;
pub use model::ModelCommand;
pub use tts::TtsCommand;
pub use voice::VoiceCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
