//! Command-line front end for the Arigold orchestrator.

use std::path::PathBuf;

use arigold_core::ConfigOverrides;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

pub mod ask;
pub mod config_cmd;
pub mod context_arg;
pub mod logging;
pub mod serve;

pub use ask::AskCommand;
pub use serve::ServeCommand;

#[derive(Debug, Parser)]
#[command(name = "arigold", version)]
#[command(about = "Forward requests to a hosted language model through the Arigold orchestrator")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP function locally.
    Serve(ServeCommand),

    /// Send a single request and print the answer.
    Ask(AskCommand),

    /// Print the resolved configuration.
    Config,
}

/// Options that override the configuration file and `ARIGOLD_*` variables.
#[derive(Debug, Default, Args)]
pub struct OverrideArgs {
    /// Path to a `config.toml` file.
    #[arg(long = "config", env = "ARIGOLD_CONFIG", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Model to send requests to.
    #[arg(long, short = 'm', global = true)]
    pub model: Option<String>,

    #[arg(long, global = true)]
    pub temperature: Option<f32>,

    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// DEBUG, INFO, WARNING, ERROR or CRITICAL. `RUST_LOG` wins when set.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model_name: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            log_level: self.log_level.clone(),
            api_key: None,
        }
    }
}
