use anyhow::Context;
use arigold_core::Config;
use arigold_function::FunctionState;
use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Name of a sub-agent to list as available. May be repeated.
    #[arg(long = "agent", value_name = "NAME")]
    pub agents: Vec<String>,
}

impl ServeCommand {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        info!(host = %self.host, port = self.port, "binding HTTP listener");
        let listener = TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to bind {}:{}", self.host, self.port))?;

        let state = FunctionState::new(config).with_delegates(self.agents);
        arigold_function::serve(listener, state).await?;
        Ok(())
    }
}
