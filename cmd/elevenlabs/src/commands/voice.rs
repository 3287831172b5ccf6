//! Voice catalogue commands.

use clap::{Args, Subcommand};

use super::{create_client, get_context, output_result, print_verbose};
use crate::Cli;

/// Voice catalogue service.
#[derive(Args)]
pub struct VoiceCommand {
    #[command(subcommand)]
    command: VoiceSubcommand,
}

#[derive(Subcommand)]
enum VoiceSubcommand {
    /// List available voices
    List,
    /// Show a single voice
    Get {
        /// Voice identifier
        voice_id: String,
    },
}

impl VoiceCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;
        print_verbose(cli, &format!("Using context: {}", ctx.name));
        let client = create_client(&ctx)?;

        match &self.command {
            VoiceSubcommand::List => {
                let resp = client.voices().list().await?;
                output_result(&resp.voices, cli.output.as_deref(), cli.json)
            }
            VoiceSubcommand::Get { voice_id } => {
                let voice = client.voices().get(voice_id).await?;
                output_result(&voice, cli.output.as_deref(), cli.json)
            }
        }
    }
}
