use arigold_core::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("failed to build the generation client: {0}")]
    Client(#[from] GenerateError),

    #[error("blocking call made from inside an async runtime; await `process` instead")]
    NestedRuntime,

    #[error("failed to start a runtime for the blocking call: {0}")]
    Runtime(#[source] std::io::Error),
}
