//! Client for the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::auth::discover_api_key;
use crate::client::GenerateRequest;
use crate::client::ModelClient;
use crate::error::GenerateError;

const API_KEY_HEADER: &str = "x-goog-api-key";
const USER_AGENT: &str = concat!("arigold/", env!("CARGO_PKG_VERSION"));

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Builds a client using `api_key` when given, otherwise whatever key the
    /// environment provides. A missing key is only reported when the first
    /// request is made.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self, GenerateError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(discover_api_key);
        Self::with_credential(api_key, base_url)
    }

    /// Builds a client with exactly the given credential, skipping
    /// environment discovery.
    pub fn with_credential(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/models/{model}:generateContent")
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, GenerateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerateError::MissingCredential);
        };

        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(&request);
        debug!(
            url = %url,
            prompt_chars = request.contents.len(),
            "calling generateContent"
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &bytes),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|err| GenerateError::MalformedResponse(err.to_string()))?;
        parsed.into_text()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    system_instruction: RequestContent<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

impl<'a> From<&'a GenerateRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a GenerateRequest) -> Self {
        Self {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart {
                    text: &request.contents,
                }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart {
                    text: &request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all text parts concatenated.
    fn into_text(self) -> Result<String, GenerateError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .map(|reason| format!(" (prompt blocked: {reason})"))
                .unwrap_or_default();
            return Err(GenerateError::MalformedResponse(format!(
                "response contained no candidates{reason}"
            )));
        };

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|reason| format!(" (finish reason: {reason})"))
                .unwrap_or_default();
            return Err(GenerateError::MalformedResponse(format!(
                "candidate contained no text{reason}"
            )));
        }

        Ok(texts.concat())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn api_error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        })
}
