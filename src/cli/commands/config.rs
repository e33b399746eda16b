//! `config` subcommands.

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::TimerError;
use crate::output::to_json;

/// Print the effective configuration.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn config_show(ctx: &Context) -> Result<String, TimerError> {
    match ctx.format {
        OutputFormat::Json => to_json(&ctx.config),
        OutputFormat::Pretty => Ok(ctx.config.to_yaml()?.trim_end().to_string()),
    }
}

/// Print where configuration and data live.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn config_path(ctx: &Context) -> Result<String, TimerError> {
    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "root": ctx.paths.root,
            "config": ctx.paths.config_file,
            "database": ctx.paths.database,
        })),
        OutputFormat::Pretty => Ok(format!(
            "root:     {}\nconfig:   {}\ndatabase: {}",
            ctx.paths.root.display(),
            ctx.paths.config_file.display(),
            ctx.paths.database.display()
        )),
    }
}

/// Write the default configuration to the config file.
///
/// # Errors
///
/// Returns `TimerError::Config` if the file exists and `force` is not set, or
/// if it cannot be written.
pub fn config_init(ctx: &Context, force: bool) -> Result<String, TimerError> {
    let path = &ctx.paths.config_file;
    if path.exists() && !force {
        return Err(TimerError::Config(format!(
            "{} already exists.\nUse --force to overwrite it.",
            path.display()
        )));
    }

    ctx.paths.ensure_dirs()?;
    Config::default().save_to_path(path)?;
    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "action": "created", "path": path })),
        OutputFormat::Pretty => Ok(format!("{} {}", "Wrote".green(), path.display())),
    }
}
