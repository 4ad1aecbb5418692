//! Bodies exchanged with the HTTP function.

use serde::Deserialize;
use serde::Serialize;

use crate::context::RequestContext;

/// A validated request to the agent endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
}

impl HealthResponse {
    pub fn healthy(agent: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            agent: agent.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
