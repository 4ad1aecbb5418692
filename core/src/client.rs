use async_trait::async_trait;

use crate::error::GenerateError;

/// Everything a single generation call needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    /// The user prompt, already rendered.
    pub contents: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// A hosted or local text-generation backend.
///
/// Implementations return the raw completion text or a [`GenerateError`];
/// they never retry.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<String, GenerateError>;
}
