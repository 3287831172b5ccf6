//! Configuration management commands.

use clap::{Args, Subcommand};

use super::{get_config, output_result, print_success};
use crate::config::{mask_api_key, Context};
use crate::Cli;

/// Manage CLI configuration.
///
/// Contexts allow you to manage multiple API configurations,
/// similar to kubectl's context management.
///
/// Configuration is stored in ~/.elevenlabs/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Add a new context
    #[command(name = "add-context")]
    AddContext {
        /// Context name
        name: String,
        /// API key (required)
        #[arg(long)]
        api_key: String,
        /// API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Default voice ID
        #[arg(long)]
        default_voice: Option<String>,
        /// Default model ID
        #[arg(long)]
        default_model: Option<String>,
    },
    /// Delete a context
    #[command(name = "delete-context")]
    DeleteContext {
        /// Context name
        name: String,
    },
    /// Set the current context
    #[command(name = "use-context")]
    UseContext {
        /// Context name
        name: String,
    },
    /// Display the current context
    #[command(name = "get-context")]
    GetContext,
    /// List all contexts
    #[command(name = "list-contexts", alias = "get-contexts")]
    ListContexts,
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::AddContext {
                name,
                api_key,
                base_url,
                timeout,
                default_voice,
                default_model,
            } => {
                let mut cfg = get_config(cli)?;

                let ctx = Context {
                    api_key: api_key.clone(),
                    base_url: base_url.clone().unwrap_or_default(),
                    timeout: timeout.unwrap_or(0),
                    default_voice: default_voice.clone().unwrap_or_default(),
                    default_model: default_model.clone().unwrap_or_default(),
                    ..Default::default()
                };

                cfg.add_context(name, ctx)?;
                print_success(&format!("Context \"{}\" added successfully", name));
                Ok(())
            }

            ConfigSubcommand::DeleteContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.delete_context(name)?;
                print_success(&format!("Context \"{}\" deleted", name));
                Ok(())
            }

            ConfigSubcommand::UseContext { name } => {
                let mut cfg = get_config(cli)?;
                cfg.use_context(name)?;
                print_success(&format!("Switched to context \"{}\"", name));
                Ok(())
            }

            ConfigSubcommand::GetContext => {
                let cfg = get_config(cli)?;
                match cfg.get_current_context() {
                    Some(ctx) => {
                        let view = serde_json::json!({
                            "name": ctx.name,
                            "api_key": mask_api_key(&ctx.api_key),
                            "base_url": ctx.base_url,
                            "default_voice": ctx.default_voice,
                            "default_model": ctx.default_model,
                        });
                        output_result(&view, cli.output.as_deref(), cli.json)
                    }
                    None => anyhow::bail!("no current context set"),
                }
            }

            ConfigSubcommand::ListContexts => {
                let cfg = get_config(cli)?;
                let mut names = cfg.list_contexts();
                names.sort_unstable();
                for name in names {
                    if name == cfg.current_context {
                        println!("* {}", name);
                    } else {
                        println!("  {}", name);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;
                let contexts: Vec<serde_json::Value> = cfg
                    .contexts
                    .values()
                    .map(|ctx| {
                        serde_json::json!({
                            "name": ctx.name,
                            "api_key": mask_api_key(&ctx.api_key),
                            "base_url": ctx.base_url,
                            "default_voice": ctx.default_voice,
                            "default_model": ctx.default_model,
                        })
                    })
                    .collect();

                let view = serde_json::json!({
                    "current_context": cfg.current_context,
                    "contexts": contexts,
                });
                output_result(&view, cli.output.as_deref(), cli.json)
            }
        }
    }
}
