//! Parsing of `-c key=value` context pairs.

use arigold_protocol::RequestContext;
use serde_json::Value;

/// Splits `key=value` on the first `=`. The value is read as JSON when it
/// parses, so `-c retries=3` yields a number; anything else stays a string.
pub fn parse_context_pair(raw: &str) -> Result<(String, Value), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got `{raw}`"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collects parsed pairs; a repeated key keeps its last value.
pub fn build_context(pairs: &[(String, Value)]) -> Option<RequestContext> {
    if pairs.is_empty() {
        return None;
    }
    Some(pairs.iter().cloned().collect())
}
