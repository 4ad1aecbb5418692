use std::sync::Arc;

use arigold_core::Config;
use arigold_orchestrator::OrchestratorError;
use arigold_orchestrator::OrchestratorOptions;
use arigold_orchestrator::RequestOrchestrator;
use arigold_orchestrator::registry::placeholder;
use tokio::sync::OnceCell;
use tracing::info;

type OrchestratorFactory =
    dyn Fn(&Config) -> Result<Arc<RequestOrchestrator>, OrchestratorError> + Send + Sync;

/// Shared state of the HTTP function.
///
/// The orchestrator is built on the first invocation that needs it and
/// reused by every later one, for the lifetime of the process.
#[derive(Clone)]
pub struct FunctionState {
    config: Arc<Config>,
    delegates: Arc<Vec<String>>,
    factory: Arc<OrchestratorFactory>,
    orchestrator: Arc<OnceCell<Arc<RequestOrchestrator>>>,
}

impl FunctionState {
    /// State whose orchestrator talks to the Gemini API.
    pub fn new(config: Config) -> Self {
        Self::with_factory(config, |config| {
            RequestOrchestrator::from_config(config, OrchestratorOptions::default())
        })
    }

    /// State that builds its orchestrator with `factory` on first use.
    pub fn with_factory<F>(config: Config, factory: F) -> Self
    where
        F: Fn(&Config) -> Result<RequestOrchestrator, OrchestratorError> + Send + Sync + 'static,
    {
        Self::from_factory(config, Arc::new(move |config: &Config| factory(config).map(Arc::new)))
    }

    /// State around an orchestrator that already exists. Delegates set with
    /// [`FunctionState::with_delegates`] are registered on it at first use.
    pub fn with_orchestrator(config: Config, orchestrator: Arc<RequestOrchestrator>) -> Self {
        Self::from_factory(config, Arc::new(move |_: &Config| Ok(Arc::clone(&orchestrator))))
    }

    fn from_factory(config: Config, factory: Arc<OrchestratorFactory>) -> Self {
        Self {
            config: Arc::new(config),
            delegates: Arc::new(Vec::new()),
            factory,
            orchestrator: Arc::new(OnceCell::new()),
        }
    }

    /// Sub-agent names registered on the orchestrator when it is built.
    pub fn with_delegates(mut self, names: Vec<String>) -> Self {
        self.delegates = Arc::new(names);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the shared orchestrator, building it on first use.
    pub async fn orchestrator(&self) -> Result<Arc<RequestOrchestrator>, OrchestratorError> {
        self.orchestrator
            .get_or_try_init(|| async {
                let orchestrator = (self.factory)(&self.config)?;
                for name in self.delegates.iter() {
                    orchestrator
                        .register_agent(name.clone(), placeholder(name.clone()))
                        .await;
                }
                info!("Orchestrator initialized");
                Ok(orchestrator)
            })
            .await
            .map(Arc::clone)
    }
}
