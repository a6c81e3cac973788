mod app;
mod args;
mod commands;
mod host;
mod keys;
mod ui;

use anyhow::Result;
use clap::Parser;

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match cli.command.unwrap_or(Commands::Run(Default::default())) {
        Commands::Run(overrides) => commands::run::run(overrides).await,
        Commands::Status => commands::status::run(),
        Commands::Config { overrides, show } => commands::config::run(overrides, show),
    }
}
