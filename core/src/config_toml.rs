use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// One layer of configuration as it appears in `config.toml`. Every field
/// is optional; unset fields fall through to the next layer down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of output tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Name the function is deployed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Deadline for a single generation call, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ConfigToml {
    /// Fields set in `higher` win over fields set in `self`.
    pub fn merge(self, higher: ConfigToml) -> ConfigToml {
        ConfigToml {
            project_id: higher.project_id.or(self.project_id),
            location: higher.location.or(self.location),
            api_key: higher.api_key.or(self.api_key),
            agent_name: higher.agent_name.or(self.agent_name),
            agent_description: higher.agent_description.or(self.agent_description),
            model_name: higher.model_name.or(self.model_name),
            temperature: higher.temperature.or(self.temperature),
            max_tokens: higher.max_tokens.or(self.max_tokens),
            log_level: higher.log_level.or(self.log_level),
            function_name: higher.function_name.or(self.function_name),
            api_base_url: higher.api_base_url.or(self.api_base_url),
            request_timeout_secs: higher.request_timeout_secs.or(self.request_timeout_secs),
        }
    }
}

/// Reads and parses a `config.toml` file.
pub fn load_config_toml(path: &Path) -> Result<ConfigToml, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
