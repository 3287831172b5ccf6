//! Speech synthesis commands.

use clap::{Args, Subcommand};

use elevenlabs_sdk::{write_audio_stream, TtsRequest, MODEL_MULTILINGUAL_V2};

use super::{
    create_client, format_bytes, get_context, load_request, output_bytes, output_result,
    print_success, print_verbose, require_input_file,
};
use crate::Cli;

/// Speech synthesis service.
///
/// Supports buffered and streaming synthesis. The request file carries the
/// voice_id, model_id, output_format and text fields; they are passed to
/// the API as-is.
#[derive(Args)]
pub struct TtsCommand {
    #[command(subcommand)]
    command: TtsSubcommand,
}

#[derive(Subcommand)]
enum TtsSubcommand {
    /// Synthesize speech from text (buffered)
    Convert,
    /// Stream speech synthesis to a file
    Stream,
}

impl TtsCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            TtsSubcommand::Convert => self.convert(cli).await,
            TtsSubcommand::Stream => self.stream(cli).await,
        }
    }

    async fn convert(&self, cli: &Cli) -> anyhow::Result<()> {
        let input_file = require_input_file(cli)?;
        let output_path = cli
            .output
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("output file is required for audio, use -o flag"))?;

        let ctx = get_context(cli)?;
        let req = prepare_request(&ctx, input_file)?;

        print_verbose(cli, &format!("Using context: {}", ctx.name));
        print_verbose(cli, &format!("Model: {}", req.model_id));
        print_verbose(cli, &format!("Text length: {} characters", req.text.len()));

        let client = create_client(&ctx)?;
        let audio = client.tts().convert(&req).await?;

        output_bytes(&audio, output_path)?;
        print_success(&format!(
            "Audio saved to: {} ({})",
            output_path,
            format_bytes(audio.len())
        ));

        let result = serde_json::json!({
            "audio_size": audio.len(),
            "output_file": output_path,
        });
        output_result(&result, None, cli.json)
    }

    async fn stream(&self, cli: &Cli) -> anyhow::Result<()> {
        let input_file = require_input_file(cli)?;
        let output_path = cli.output.as_deref().ok_or_else(|| {
            anyhow::anyhow!("output file is required for streaming audio, use -o flag")
        })?;

        let ctx = get_context(cli)?;
        let req = prepare_request(&ctx, input_file)?;

        print_verbose(cli, &format!("Using context: {}", ctx.name));
        print_verbose(cli, &format!("Streaming to: {}", output_path));

        let client = create_client(&ctx)?;

        let stream = client.tts().convert_stream(&req).await?;
        let written = write_audio_stream(stream, output_path).await?;

        print_success(&format!(
            "Audio saved to: {} ({})",
            output_path,
            format_bytes(written as usize)
        ));

        let result = serde_json::json!({
            "audio_size": written,
            "output_file": output_path,
        });
        output_result(&result, None, cli.json)
    }
}

/// Loads the request file and fills in context defaults.
fn prepare_request(ctx: &crate::config::Context, input_file: &str) -> anyhow::Result<TtsRequest> {
    let mut req: TtsRequest = load_request(input_file)?;

    if req.model_id.is_empty() {
        req.model_id = if ctx.default_model.is_empty() {
            MODEL_MULTILINGUAL_V2.to_string()
        } else {
            ctx.default_model.clone()
        };
    }
    if req.voice_id.is_empty() {
        if ctx.default_voice.is_empty() {
            anyhow::bail!("voice_id missing from request and no default_voice in context");
        }
        req.voice_id = ctx.default_voice.clone();
    }

    Ok(req)
}
