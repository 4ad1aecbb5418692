use std::process::ExitCode;

use anyhow::Context;
use arigold_cli::Cli;
use arigold_cli::Command;
use arigold_cli::config_cmd::render_config;
use arigold_cli::logging;
use arigold_core::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing `.env` file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load(
        cli.overrides.config_file.as_deref(),
        cli.overrides.to_overrides(),
    )
    .context("failed to load configuration")?;
    logging::init(config.log_level);

    match cli.command {
        Command::Serve(serve) => {
            serve.run(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask(ask) => ask.run(&config).await,
        Command::Config => {
            print!("{}", render_config(&config)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
