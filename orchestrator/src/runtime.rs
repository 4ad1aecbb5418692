//! Core orchestrator runtime.

use std::sync::OnceLock;
use std::time::Duration;

use arigold_core::Config;
use arigold_core::GeminiClient;
use arigold_core::GenerateError;
use arigold_core::GenerateRequest;
use arigold_core::ModelClient;
use arigold_protocol::ErrorKind;
use arigold_protocol::ProcessFailure;
use arigold_protocol::ProcessOutcome;
use arigold_protocol::ProcessSuccess;
use arigold_protocol::RequestContext;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::error::OrchestratorError;
use crate::prompt::build_system_prompt;
use crate::prompt::prepare_prompt;
use crate::registry::DelegateHandle;
use crate::registry::DelegateRegistry;
use crate::truncation::LOG_PREVIEW_CHARS;
use crate::truncation::preview;
use crate::validation::validate_request;

/// Who the orchestrator says it is in the system instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub name: String,
    pub description: String,
}

/// Parameters forwarded with every generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Constructor arguments that take precedence over the configuration.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorOptions {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub location: Option<String>,
}

/// Forwards requests to the generation service and keeps a registry of
/// named sub-agents.
///
/// Meant to be created once per process and shared behind an `Arc`; every
/// method takes `&self`.
pub struct RequestOrchestrator {
    identity: AgentIdentity,

    /// Deployment parameters, reported but not sent to the service.
    project_id: String,
    location: String,

    generation: GenerationSettings,

    /// Default deadline for one generation call.
    request_timeout: Option<Duration>,

    client: Box<dyn ModelClient>,

    /// Registered sub-agents
    delegates: RwLock<DelegateRegistry>,

    /// Runtime used by [`RequestOrchestrator::process_blocking`], created on
    /// first use.
    blocking_runtime: OnceLock<Runtime>,
}

impl RequestOrchestrator {
    /// Creates an orchestrator backed by the Gemini API.
    ///
    /// The credential is taken from `options`, then the configuration, then
    /// the ambient environment. A missing credential is not an error here;
    /// it surfaces as a failure outcome on the first request.
    pub fn from_config(
        config: &Config,
        options: OrchestratorOptions,
    ) -> Result<Self, OrchestratorError> {
        let api_key = options
            .api_key
            .clone()
            .or_else(|| config.api_key.clone());
        let client = GeminiClient::new(api_key, config.api_base_url.clone())?;
        if !client.has_credential() {
            warn!("no API key found; requests will fail until one is configured");
        }
        Ok(Self::build(config, options, Box::new(client)))
    }

    /// Creates an orchestrator around any generation backend.
    pub fn with_client(config: &Config, client: Box<dyn ModelClient>) -> Self {
        Self::build(config, OrchestratorOptions::default(), client)
    }

    fn build(config: &Config, options: OrchestratorOptions, client: Box<dyn ModelClient>) -> Self {
        let orchestrator = Self {
            identity: AgentIdentity {
                name: config.agent_name.clone(),
                description: config.agent_description.clone(),
            },
            project_id: options
                .project_id
                .unwrap_or_else(|| config.project_id.clone()),
            location: options.location.unwrap_or_else(|| config.location.clone()),
            generation: GenerationSettings {
                model: config.model_name.clone(),
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
            },
            request_timeout: config.request_timeout,
            client,
            delegates: RwLock::new(DelegateRegistry::new()),
            blocking_runtime: OnceLock::new(),
        };

        info!(
            agent = %orchestrator.identity.name,
            model = %orchestrator.generation.model,
            project_id = %orchestrator.project_id,
            location = %orchestrator.location,
            "Initialized {} with model {}",
            orchestrator.identity.name,
            orchestrator.generation.model
        );
        orchestrator
    }

    pub fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    pub fn generation(&self) -> &GenerationSettings {
        &self.generation
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Registers a sub-agent under `name`, replacing any previous entry.
    pub async fn register_agent(&self, name: impl Into<String>, delegate: DelegateHandle) {
        let name = name.into();
        let replaced = {
            let mut delegates = self.delegates.write().await;
            delegates.register(name.clone(), delegate).is_some()
        };
        info!(agent = %name, replaced, "Registered sub-agent: {name}");
    }

    /// Names of all registered sub-agents, in registration order.
    pub async fn list_agents(&self) -> Vec<String> {
        let delegates = self.delegates.read().await;
        delegates.names()
    }

    /// The system instruction for the current set of sub-agents.
    pub async fn build_system_prompt(&self) -> String {
        let names = self.list_agents().await;
        build_system_prompt(&self.identity, &names)
    }

    /// Processes one request with the configured deadline, if any.
    pub async fn process(&self, request: &str, context: Option<RequestContext>) -> ProcessOutcome {
        self.process_with_deadline(request, context, self.request_timeout)
            .await
    }

    /// Processes one request. `deadline` bounds the generation call and
    /// replaces the configured one; `None` waits indefinitely.
    pub async fn process_with_deadline(
        &self,
        request: &str,
        context: Option<RequestContext>,
        deadline: Option<Duration>,
    ) -> ProcessOutcome {
        info!("Processing request: {}", preview(request, LOG_PREVIEW_CHARS));

        if let Err(err) = validate_request(request) {
            warn!("Rejected request: {err}");
            let agents_available = self.list_agents().await;
            return ProcessFailure::new(ErrorKind::InvalidInput, err.to_string(), agents_available)
                .into();
        }

        let system_instruction = self.build_system_prompt().await;
        let contents = prepare_prompt(request, context.as_ref());
        debug!(
            system_chars = system_instruction.len(),
            prompt_chars = contents.len(),
            "prompts prepared"
        );

        let generate_request = GenerateRequest {
            model: self.generation.model.clone(),
            contents,
            system_instruction,
            temperature: self.generation.temperature,
            max_output_tokens: self.generation.max_output_tokens,
        };

        match self.generate(generate_request, deadline).await {
            Ok(response) => {
                info!("Request processed successfully");
                ProcessSuccess {
                    response,
                    model: self.generation.model.clone(),
                    agents_available: self.list_agents().await,
                    context: context.unwrap_or_default(),
                }
                .into()
            }
            Err(err) => {
                error!("Error processing request: {err}");
                let agents_available = self.list_agents().await;
                ProcessFailure::new(ErrorKind::UpstreamFailure, err.to_string(), agents_available)
                    .into()
            }
        }
    }

    async fn generate(
        &self,
        request: GenerateRequest,
        deadline: Option<Duration>,
    ) -> Result<String, GenerateError> {
        let call = self.client.generate(request);
        match deadline {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GenerateError::Timeout(limit))?,
            None => call.await,
        }
    }

    /// Blocking variant of [`RequestOrchestrator::process`] for callers
    /// without an async runtime.
    ///
    /// Runs the request on a runtime owned by the orchestrator. Calling this
    /// from inside a tokio runtime returns [`OrchestratorError::NestedRuntime`].
    pub fn process_blocking(
        &self,
        request: &str,
        context: Option<RequestContext>,
    ) -> Result<ProcessOutcome, OrchestratorError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(OrchestratorError::NestedRuntime);
        }
        let runtime = self.blocking_runtime()?;
        Ok(runtime.block_on(self.process(request, context)))
    }

    fn blocking_runtime(&self) -> Result<&Runtime, OrchestratorError> {
        if let Some(runtime) = self.blocking_runtime.get() {
            return Ok(runtime);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(OrchestratorError::Runtime)?;
        // A concurrent caller may have installed one first; ours is dropped.
        Ok(self.blocking_runtime.get_or_init(|| runtime))
    }
}

impl Drop for RequestOrchestrator {
    fn drop(&mut self) {
        // Dropping a runtime from async code panics, and the last `Arc` may
        // well be released there.
        if let Some(runtime) = self.blocking_runtime.take() {
            runtime.shutdown_background();
        }
    }
}
