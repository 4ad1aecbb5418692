//! Request orchestrator for the Arigold agent.
//!
//! The orchestrator turns a user's request and optional context into a
//! prompt, sends it to the configured generation service together with a
//! system instruction naming the registered sub-agents, and reports the
//! completion (or the failure) as a [`ProcessOutcome`].
//!
//! Sub-agents are bookkeeping only: they are registered, listed and named in
//! the system instruction, never invoked.

pub mod error;
pub mod prompt;
pub mod registry;
pub mod runtime;
pub mod truncation;
pub mod validation;

pub use arigold_protocol::ProcessOutcome;
pub use error::OrchestratorError;
pub use registry::DelegateHandle;
pub use registry::DelegateRegistry;
pub use registry::NamedDelegate;
pub use runtime::AgentIdentity;
pub use runtime::GenerationSettings;
pub use runtime::OrchestratorOptions;
pub use runtime::RequestOrchestrator;
