//! Request validation shared by the orchestrator and the HTTP function.

use arigold_protocol::http::AgentRequest;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("No JSON body provided")]
    MissingBody,

    #[error("No 'request' field provided")]
    MissingRequest,

    #[error("'context' must be a JSON object")]
    InvalidContext,
}

/// Rejects an empty request. Whitespace-only text is passed through.
pub fn validate_request(request: &str) -> Result<(), InvalidRequest> {
    if request.is_empty() {
        return Err(InvalidRequest::MissingRequest);
    }
    Ok(())
}

/// Parses a raw HTTP body into an [`AgentRequest`].
///
/// A body that is empty, not JSON, not an object, or an empty object counts
/// as missing. `request` must be a non-empty string. `context` may be absent,
/// `null` or an object.
pub fn parse_agent_request(body: &[u8]) -> Result<AgentRequest, InvalidRequest> {
    let value: Value = serde_json::from_slice(body).map_err(|_| InvalidRequest::MissingBody)?;
    let Value::Object(mut fields) = value else {
        return Err(InvalidRequest::MissingBody);
    };
    if fields.is_empty() {
        return Err(InvalidRequest::MissingBody);
    }

    let request = match fields.remove("request") {
        Some(Value::String(request)) => request,
        _ => return Err(InvalidRequest::MissingRequest),
    };
    validate_request(&request)?;

    let context = match fields.remove("context") {
        None | Some(Value::Null) => None,
        Some(Value::Object(context)) => Some(context),
        Some(_) => return Err(InvalidRequest::InvalidContext),
    };

    Ok(AgentRequest { request, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_request_is_rejected() {
        assert_eq!(validate_request(""), Err(InvalidRequest::MissingRequest));
        assert_eq!(validate_request(" "), Ok(()));
    }

    #[test]
    fn missing_or_unusable_bodies() {
        let bodies: [&[u8]; 6] = [b"", b"not json", b"[]", b"null", b"\"text\"", b"{}"];
        for body in bodies {
            assert_eq!(
                parse_agent_request(body),
                Err(InvalidRequest::MissingBody),
                "body: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn request_field_must_be_non_empty_string() {
        for body in [
            json!({"context": {"a": 1}}),
            json!({"request": ""}),
            json!({"request": 42}),
            json!({"request": null}),
        ] {
            let raw = body.to_string();
            assert_eq!(
                parse_agent_request(raw.as_bytes()),
                Err(InvalidRequest::MissingRequest),
                "body: {raw}"
            );
        }
    }

    #[test]
    fn context_must_be_object_or_null() {
        for context in [json!(["a"]), json!([]), json!("abc"), json!(3)] {
            let raw = json!({"request": "hi", "context": context}).to_string();
            assert_eq!(
                parse_agent_request(raw.as_bytes()),
                Err(InvalidRequest::InvalidContext),
                "body: {raw}"
            );
        }

        let raw = json!({"request": "hi", "context": null}).to_string();
        assert_eq!(
            parse_agent_request(raw.as_bytes()).map(|parsed| parsed.context),
            Ok(None)
        );
    }

    #[test]
    fn parses_request_and_context() {
        let raw = r#"{"request": "hello", "context": {"user": "demo_user", "n": 1}}"#;
        let parsed = parse_agent_request(raw.as_bytes());

        let mut context = serde_json::Map::new();
        context.insert("user".to_string(), json!("demo_user"));
        context.insert("n".to_string(), json!(1));
        assert_eq!(
            parsed,
            Ok(AgentRequest {
                request: "hello".to_string(),
                context: Some(context),
            })
        );
    }
}
