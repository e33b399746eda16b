use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use roundtimer::cli::args::{Cli, Commands, ConfigCommands};
use roundtimer::cli::commands::{self, Context};
use roundtimer::features::session::SessionConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("ROUNDTIMER_LOG", "warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::load(cli.data_dir, cli.output).context("failed to load configuration")?;
    let format = ctx.format;

    let output = match cli.command {
        Commands::Run(args) => {
            let config = ctx.session_config(&args)?;
            let library = ctx.open_library()?;
            let tick_rate = Duration::from_millis(ctx.config.tui.tick_millis.max(1));
            roundtimer::tui::run(library, config, tick_rate)?;
            String::new()
        }
        Commands::Simulate(args) => {
            let config = ctx.session_config(&args.session)?;
            let library = ctx.open_library()?;
            commands::simulate(library.list(), &config, args.ticks, args.from, format)?
        }
        Commands::List => {
            let library = ctx.open_library()?;
            commands::list(&library, &default_session(&ctx)?, format)?
        }
        Commands::Show { index } => commands::show(&ctx.open_library()?, index, format)?,
        Commands::Add(args) => commands::add(&mut ctx.open_library()?, args.item, format)?,
        Commands::Edit(args) => {
            commands::edit(&mut ctx.open_library()?, args.index, args.item, format)?
        }
        Commands::Remove { index } => commands::remove(&mut ctx.open_library()?, index, format)?,
        Commands::Move { index, direction } => {
            commands::move_item(&mut ctx.open_library()?, index, direction, format)?
        }
        Commands::ResetDefaults { force } => {
            commands::reset_defaults(&mut ctx.open_library()?, force, format)?
        }
        Commands::Export { path } => {
            commands::export(&ctx.open_library()?, path.as_deref(), format)?
        }
        Commands::Import { path } => commands::import(&mut ctx.open_library()?, &path, format)
            .with_context(|| format!("failed to import {}", path.display()))?,
        Commands::Config(args) => match args.command {
            ConfigCommands::Show => commands::config_show(&ctx)?,
            ConfigCommands::Path => commands::config_path(&ctx)?,
            ConfigCommands::Init { force } => commands::config_init(&ctx, force)?,
        },
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn default_session(ctx: &Context) -> Result<SessionConfig> {
    Ok(ctx.config.session.to_session_config()?)
}
