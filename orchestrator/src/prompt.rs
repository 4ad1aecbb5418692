//! Prompt construction.

use arigold_protocol::RequestContext;
use arigold_protocol::context::display_value;

use crate::runtime::AgentIdentity;

/// Placeholder used in the system instruction when no sub-agents exist.
pub const NO_DELEGATES: &str = "none";

/// System instruction naming the agent and the sub-agents it may delegate to.
pub fn build_system_prompt(identity: &AgentIdentity, delegate_names: &[String]) -> String {
    let agent_list = if delegate_names.is_empty() {
        NO_DELEGATES.to_string()
    } else {
        delegate_names.join(", ")
    };
    let AgentIdentity { name, description } = identity;

    format!(
        "You are {name}, {description}.

Your role is to understand user requests and coordinate with specialized agents when needed.

Available sub-agents: {agent_list}

When processing requests:
1. Analyze the user's request carefully
2. Determine if you can handle it directly or if a specialized agent is needed
3. If delegation is needed, explain which agent would be appropriate and why
4. Provide clear, helpful responses
5. Coordinate multiple agents if the task requires it

Always be helpful, clear, and efficient in your responses."
    )
}

/// User prompt: an optional `Context:` block followed by the request.
pub fn prepare_prompt(request: &str, context: Option<&RequestContext>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(context) = context.filter(|context| !context.is_empty()) {
        parts.push("Context:".to_string());
        for (key, value) in context {
            parts.push(format!("- {key}: {}", display_value(value)));
        }
        parts.push(String::new());
    }

    parts.push(format!("User Request: {request}"));
    parts.join("\n")
}
