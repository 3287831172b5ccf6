//! Model catalogue commands.

use clap::{Args, Subcommand};

use super::{create_client, get_context, output_result, print_verbose};
use crate::Cli;

/// Model catalogue service.
#[derive(Args)]
pub struct ModelCommand {
    #[command(subcommand)]
    command: ModelSubcommand,
}

#[derive(Subcommand)]
enum ModelSubcommand {
    /// List available synthesis models
    List,
}

impl ModelCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ctx = get_context(cli)?;
        print_verbose(cli, &format!("Using context: {}", ctx.name));
        let client = create_client(&ctx)?;

        match &self.command {
            ModelSubcommand::List => {
                let models = client.models().list().await?;
                output_result(&models, cli.output.as_deref(), cli.json)
            }
        }
    }
}
