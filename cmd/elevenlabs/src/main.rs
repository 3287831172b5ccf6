//! ElevenLabs CLI - A command line interface for the ElevenLabs API.

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::{ConfigCommand, ModelCommand, TtsCommand, VoiceCommand};

/// ElevenLabs CLI - A command line interface for the ElevenLabs API.
///
/// This tool allows you to interact with ElevenLabs services:
///   - Speech synthesis (TTS), buffered or streamed to a file
///   - Voice catalogue lookup
///   - Model catalogue lookup
///
/// Configuration is stored in ~/.elevenlabs/config.yaml and supports
/// multiple contexts, similar to kubectl's context management. When no
/// context is configured, the ELEVENLABS_API_KEY environment variable is
/// used instead.
#[derive(Parser)]
#[command(name = "elevenlabs")]
#[command(about = "ElevenLabs API CLI tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.elevenlabs/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Context name to use
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Input request file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Speech synthesis service
    Tts(TtsCommand),
    /// Voice catalogue service
    Voice(VoiceCommand),
    /// Model catalogue service
    Model(ModelCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli).await,
        Commands::Tts(cmd) => cmd.run(&cli).await,
        Commands::Voice(cmd) => cmd.run(&cli).await,
        Commands::Model(cmd) => cmd.run(&cli).await,
    }
}
