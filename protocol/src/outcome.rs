use serde::Deserialize;
use serde::Serialize;

use crate::context::RequestContext;

/// User-facing text returned in place of a completion when a request fails.
pub const FALLBACK_RESPONSE: &str = "I encountered an error processing your request.";

/// Closed set of failure classes. Not part of the JSON body; callers of the
/// library use it to pick a status code or exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    #[default]
    UpstreamFailure,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSuccess {
    pub response: String,
    pub model: String,
    pub agents_available: Vec<String>,
    pub context: RequestContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessFailure {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub error: String,
    pub response: String,
    pub agents_available: Vec<String>,
}

impl ProcessFailure {
    pub fn new(kind: ErrorKind, error: impl Into<String>, agents_available: Vec<String>) -> Self {
        Self {
            kind,
            error: error.into(),
            response: FALLBACK_RESPONSE.to_string(),
            agents_available,
        }
    }
}

/// Result of processing one request.
///
/// Serialised untagged: a success body has no `error` key, a failure body
/// always has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessOutcome {
    Failure(ProcessFailure),
    Success(ProcessSuccess),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Success(_))
    }

    pub fn response(&self) -> &str {
        match self {
            ProcessOutcome::Success(success) => &success.response,
            ProcessOutcome::Failure(failure) => &failure.response,
        }
    }

    pub fn agents_available(&self) -> &[String] {
        match self {
            ProcessOutcome::Success(success) => &success.agents_available,
            ProcessOutcome::Failure(failure) => &failure.agents_available,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProcessOutcome::Success(_) => None,
            ProcessOutcome::Failure(failure) => Some(&failure.error),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ProcessOutcome::Success(_) => None,
            ProcessOutcome::Failure(failure) => Some(failure.kind),
        }
    }
}

impl From<ProcessSuccess> for ProcessOutcome {
    fn from(success: ProcessSuccess) -> Self {
        ProcessOutcome::Success(success)
    }
}

impl From<ProcessFailure> for ProcessOutcome {
    fn from(failure: ProcessFailure) -> Self {
        ProcessOutcome::Failure(failure)
    }
}
