#![allow(clippy::unwrap_used, clippy::expect_used)]

use arigold_core::GeminiClient;
use arigold_core::GenerateError;
use arigold_core::GenerateRequest;
use arigold_core::ModelClient;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/models/gemini-test:generateContent";

fn request() -> GenerateRequest {
    GenerateRequest {
        model: MODEL.to_string(),
        contents: "User Request: hello".to_string(),
        system_instruction: "You are Test Agent".to_string(),
        temperature: 0.5,
        max_output_tokens: 128,
    }
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_credential(Some("test-key".to_string()), server.uri()).unwrap()
}

#[tokio::test]
async fn returns_concatenated_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "User Request: hello"}]}],
            "systemInstruction": {"parts": [{"text": "You are Test Agent"}]},
            "generationConfig": {"temperature": 0.5, "maxOutputTokens": 128}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "there"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server).generate(request()).await.unwrap();
    assert_eq!(text, "Hello there");
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = client(&server).generate(request()).await.unwrap_err();
    assert_matches!(
        &err,
        GenerateError::Api { status: 429, message } if message == "Resource has been exhausted"
    );
    assert_eq!(
        err.to_string(),
        "generation service returned 429: Resource has been exhausted"
    );
}

#[tokio::test]
async fn empty_candidates_are_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let err = client(&server).generate(request()).await.unwrap_err();
    assert_matches!(err, GenerateError::MalformedResponse(message) if message.contains("SAFETY"));
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).generate(request()).await.unwrap_err();
    assert_matches!(err, GenerateError::MalformedResponse(_));
}

#[tokio::test]
async fn missing_credential_fails_without_calling_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::with_credential(None, server.uri()).unwrap();
    assert!(!client.has_credential());
    let err = client.generate(request()).await.unwrap_err();
    assert_matches!(err, GenerateError::MissingCredential);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = GeminiClient::with_credential(Some("k".to_string()), uri).unwrap();
    let err = client.generate(request()).await.unwrap_err();
    assert_matches!(err, GenerateError::Transport(_));
}
