//! Streaming text-to-speech example.
//!
//! Synthesizes a short sentence and streams the MP3 audio to output.mp3.
//!
//! Run with:
//! ```bash
//! export ELEVENLABS_API_KEY="your-api-key"
//! cargo run --example convert
//! ```

use std::env;

use elevenlabs_sdk::{Client, TtsRequest, MODEL_MULTILINGUAL_V2, OUTPUT_MP3_44100_128};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get API key from environment
    let api_key =
        env::var("ELEVENLABS_API_KEY").expect("ELEVENLABS_API_KEY environment variable not set");

    // Create client
    let client = Client::new(api_key)?;

    let request = TtsRequest {
        voice_id: "JBFqnCBsd6RMkjVDRZzb".to_string(),
        model_id: MODEL_MULTILINGUAL_V2.to_string(),
        output_format: OUTPUT_MP3_44100_128.to_string(),
        text: "The first move is what sets everything in motion.".to_string(),
        ..Default::default()
    };

    client.tts().convert_to_file(&request, "output.mp3").await?;

    println!("Audio saved as output.mp3");
    Ok(())
}
