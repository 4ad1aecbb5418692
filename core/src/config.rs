//! Layered configuration: defaults, then `config.toml`, then `ARIGOLD_*`
//! environment variables, then explicit overrides.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::config_toml::ConfigToml;
use crate::config_toml::load_config_toml;
use crate::error::ConfigError;

/// Prefix shared by every environment variable the agent reads.
pub const ENV_PREFIX: &str = "ARIGOLD_";

pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_AGENT_NAME: &str = "Arigold Orchestrator";
pub const DEFAULT_AGENT_DESCRIPTION: &str =
    "An orchestrating agent that coordinates multiple specialized agents";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
pub const DEFAULT_FUNCTION_NAME: &str = "arigold-agent";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const MAX_TEMPERATURE: f32 = 2.0;

/// Log verbosity as accepted in configuration. `WARN` and `WARNING` are
/// both accepted; `CRITICAL` maps to the error level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(format!("unknown log level `{other}`")),
        }
    }
}

/// Fully resolved agent configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_id: String,
    pub location: String,
    pub api_key: Option<String>,
    pub agent_name: String,
    pub agent_description: String,
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub log_level: LogLevel,
    pub function_name: String,
    pub api_base_url: String,
    /// `None` means generation calls run without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            api_key: None,
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            agent_description: DEFAULT_AGENT_DESCRIPTION.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            log_level: LogLevel::default(),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

/// Values supplied on the command line. They win over every other layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub model_name: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub log_level: Option<String>,
    pub api_key: Option<String>,
}

impl From<ConfigOverrides> for ConfigToml {
    fn from(overrides: ConfigOverrides) -> Self {
        Self {
            model_name: overrides.model_name,
            temperature: overrides.temperature,
            max_tokens: overrides.max_tokens,
            log_level: overrides.log_level,
            api_key: overrides.api_key,
            ..Default::default()
        }
    }
}

impl Config {
    /// Loads configuration from the live process environment and, when
    /// given, a `config.toml` file.
    pub fn load(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = config_file.map(load_config_toml).transpose()?;
        Self::load_with(std::env::vars_os(), file, overrides)
    }

    /// Resolves configuration from explicit inputs. `env` is any set of
    /// key/value pairs; only keys starting with [`ENV_PREFIX`] (compared
    /// case-insensitively) are considered. Other variables are ignored even
    /// when they are not valid UTF-8.
    pub fn load_with<I, K, V>(
        env: I,
        file: Option<ConfigToml>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let env_layer = config_toml_from_env(env)?;
        let merged = file
            .unwrap_or_default()
            .merge(env_layer)
            .merge(overrides.into());
        Self::from_layers(merged)
    }

    fn from_layers(toml: ConfigToml) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let temperature = toml.temperature.unwrap_or(defaults.temperature);
        if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(ConfigError::invalid(
                "temperature",
                temperature,
                "must be between 0 and 2",
            ));
        }

        let max_tokens = toml.max_tokens.unwrap_or(defaults.max_tokens);
        if max_tokens == 0 {
            return Err(ConfigError::invalid("max_tokens", max_tokens, "must be positive"));
        }

        let log_level = match toml.log_level {
            Some(raw) => raw
                .parse::<LogLevel>()
                .map_err(|reason| ConfigError::invalid("log_level", &raw, &reason))?,
            None => defaults.log_level,
        };

        let request_timeout = match toml.request_timeout_secs {
            Some(0) => {
                return Err(ConfigError::invalid(
                    "request_timeout_secs",
                    0,
                    "must be positive",
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            project_id: toml.project_id.unwrap_or(defaults.project_id),
            location: toml.location.unwrap_or(defaults.location),
            api_key: toml.api_key.filter(|key| !key.trim().is_empty()),
            agent_name: toml.agent_name.unwrap_or(defaults.agent_name),
            agent_description: toml.agent_description.unwrap_or(defaults.agent_description),
            model_name: toml.model_name.unwrap_or(defaults.model_name),
            temperature,
            max_tokens,
            log_level,
            function_name: toml.function_name.unwrap_or(defaults.function_name),
            api_base_url: toml.api_base_url.unwrap_or(defaults.api_base_url),
            request_timeout,
        })
    }

    /// Renders the resolved values back into a file layer, e.g. for display.
    pub fn to_config_toml(&self) -> ConfigToml {
        ConfigToml {
            project_id: Some(self.project_id.clone()),
            location: Some(self.location.clone()),
            api_key: self.api_key.clone(),
            agent_name: Some(self.agent_name.clone()),
            agent_description: Some(self.agent_description.clone()),
            model_name: Some(self.model_name.clone()),
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            log_level: Some(self.log_level.to_string()),
            function_name: Some(self.function_name.clone()),
            api_base_url: Some(self.api_base_url.clone()),
            request_timeout_secs: self.request_timeout.map(|timeout| timeout.as_secs()),
        }
    }
}

fn config_toml_from_env<I, K, V>(env: I) -> Result<ConfigToml, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut vars: HashMap<String, String> = HashMap::new();
    for (key, value) in env {
        let key: OsString = key.into();
        let Some(key) = key.to_str() else {
            continue;
        };
        let upper = key.to_ascii_uppercase();
        let Some(field) = upper.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let value: OsString = value.into();
        let value = value.into_string().map_err(|raw| {
            ConfigError::invalid(key, raw.to_string_lossy(), "not valid UTF-8")
        })?;
        vars.insert(field.to_string(), value);
    }

    Ok(ConfigToml {
        project_id: vars.get("PROJECT_ID").cloned(),
        location: vars.get("LOCATION").cloned(),
        api_key: vars.get("API_KEY").cloned(),
        agent_name: vars.get("AGENT_NAME").cloned(),
        agent_description: vars.get("AGENT_DESCRIPTION").cloned(),
        model_name: vars.get("MODEL_NAME").cloned(),
        temperature: parse_env(&vars, "TEMPERATURE")?,
        max_tokens: parse_env(&vars, "MAX_TOKENS")?,
        log_level: vars.get("LOG_LEVEL").cloned(),
        function_name: vars.get("FUNCTION_NAME").cloned(),
        api_base_url: vars.get("API_BASE_URL").cloned(),
        request_timeout_secs: parse_env(&vars, "REQUEST_TIMEOUT_SECS")?,
    })
}

fn parse_env<T>(vars: &HashMap<String, String>, field: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = vars.get(field) else {
        return Ok(None);
    };
    raw.trim().parse::<T>().map(Some).map_err(|err| {
        ConfigError::invalid(&format!("{ENV_PREFIX}{field}"), raw, &err.to_string())
    })
}
