use serde_json::Value;

/// Caller-supplied key/value context. Keys keep the order they were given in.
pub type RequestContext = serde_json::Map<String, Value>;

/// Text shown for a context value in a prompt. Strings appear without
/// quotes; everything else uses its compact JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
