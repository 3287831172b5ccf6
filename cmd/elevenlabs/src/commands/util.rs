//! Shared helpers for CLI commands.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use elevenlabs_sdk::Client;

use crate::config::{load_config, Config, Context, API_KEY_ENV};
use crate::Cli;

/// Loads the CLI configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(cli.config.as_deref())
}

/// Resolves the context to use for a command.
///
/// Falls back to an anonymous context built from ELEVENLABS_API_KEY when the
/// config has no matching context.
pub fn get_context(cli: &Cli) -> anyhow::Result<Context> {
    let cfg = get_config(cli)?;

    if let Some(ctx) = cfg.resolve_context(cli.context.as_deref()) {
        return Ok(ctx.clone());
    }

    if let Some(name) = cli.context.as_deref() {
        anyhow::bail!("context '{}' not found", name);
    }

    match std::env::var(API_KEY_ENV) {
        Ok(api_key) if !api_key.is_empty() => Ok(Context {
            name: "env".to_string(),
            api_key,
            ..Default::default()
        }),
        _ => anyhow::bail!(
            "no context configured; run 'elevenlabs config add-context' or set {}",
            API_KEY_ENV
        ),
    }
}

/// Creates an API client from a context.
pub fn create_client(ctx: &Context) -> anyhow::Result<Client> {
    let mut builder = Client::builder(&ctx.api_key);
    if !ctx.base_url.is_empty() {
        builder = builder.base_url(&ctx.base_url);
    }
    if ctx.timeout > 0 {
        builder = builder.timeout(Duration::from_secs(ctx.timeout));
    }
    Ok(builder.build()?)
}

/// Returns the input file path or fails with a usage hint.
pub fn require_input_file(cli: &Cli) -> anyhow::Result<&str> {
    cli.input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("input request file is required, use -f flag"))
}

/// Loads a request from a YAML or JSON file into the provided type.
pub fn load_request<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(&data)?),
        Some("json") => Ok(serde_json::from_slice(&data)?),
        _ => {
            // Try YAML first, then JSON
            if let Ok(v) = serde_yaml::from_slice(&data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(&data) {
                return Ok(v);
            }
            anyhow::bail!("failed to parse {} (tried YAML and JSON)", path.display())
        }
    }
}

/// Outputs a result as YAML (default) or JSON, to stdout or a file.
pub fn output_result<T: Serialize>(value: &T, file: Option<&str>, json: bool) -> anyhow::Result<()> {
    let output = if json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_yaml::to_string(value)?
    };

    match file {
        Some(path) => {
            let mut f = File::create(path)?;
            f.write_all(output.as_bytes())?;
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Writes binary data to a file.
pub fn output_bytes(data: &[u8], path: &str) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{}", message);
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, message: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", message);
    }
}

/// Formats a byte count for display.
pub fn format_bytes(n: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if n >= MB {
        format!("{:.1} MiB", n as f64 / MB as f64)
    } else if n >= KB {
        format!("{:.1} KiB", n as f64 / KB as f64)
    } else {
        format!("{} B", n)
    }
}
