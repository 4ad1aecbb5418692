use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: `{value}` ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure of a single call to the generation service.
///
/// The orchestrator does not distinguish transient from permanent failures;
/// the variants exist so callers and logs can tell them apart.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API key configured; set ARIGOLD_API_KEY, GOOGLE_API_KEY or GEMINI_API_KEY")]
    MissingCredential,

    #[error("request to the generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response from the generation service: {0}")]
    MalformedResponse(String),

    #[error("generation call timed out after {0:?}")]
    Timeout(Duration),
}
