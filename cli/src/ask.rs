use std::borrow::Cow;
use std::process::ExitCode;

use anyhow::Context;
use arigold_core::Config;
use arigold_orchestrator::OrchestratorOptions;
use arigold_orchestrator::ProcessOutcome;
use arigold_orchestrator::RequestOrchestrator;
use arigold_orchestrator::registry::placeholder;
use arigold_orchestrator::truncation::preview;
use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::context_arg::build_context;
use crate::context_arg::parse_context_pair;

/// Characters of the answer shown unless `--full` is given.
pub const ANSWER_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Args)]
pub struct AskCommand {
    /// Text to send to the model.
    pub request: String,

    /// Context entry sent with the request. May be repeated.
    #[arg(short = 'c', long = "context", value_name = "KEY=VALUE", value_parser = parse_context_pair)]
    pub context: Vec<(String, Value)>,

    /// Name of a sub-agent to list as available. May be repeated.
    #[arg(long = "agent", value_name = "NAME")]
    pub agents: Vec<String>,

    /// Print the outcome as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the whole answer instead of a preview.
    #[arg(long, default_value_t = false)]
    pub full: bool,
}

impl AskCommand {
    pub async fn run(self, config: &Config) -> anyhow::Result<ExitCode> {
        let orchestrator = RequestOrchestrator::from_config(config, OrchestratorOptions::default())
            .context("failed to create orchestrator")?;
        for name in &self.agents {
            orchestrator
                .register_agent(name.clone(), placeholder(name.clone()))
                .await;
        }

        let outcome = orchestrator
            .process(&self.request, build_context(&self.context))
            .await;
        info!(
            success = outcome.is_success(),
            agents = self.agents.len(),
            "ask finished"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print!("{}", render(&outcome, self.full));
        }

        Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Human-readable form of an outcome.
pub fn render(outcome: &ProcessOutcome, full: bool) -> String {
    let answer = if full {
        Cow::Borrowed(outcome.response())
    } else {
        preview(outcome.response(), ANSWER_PREVIEW_CHARS)
    };

    let agents = outcome.agents_available();
    let agents = if agents.is_empty() {
        "none".to_string()
    } else {
        agents.join(", ")
    };

    let mut out = String::new();
    if let Some(error) = outcome.error() {
        out.push_str(&format!("Error: {error}\n"));
    }
    out.push_str(&format!("Response: {answer}\n"));
    out.push_str(&format!("Agents available: {agents}\n"));
    out
}
