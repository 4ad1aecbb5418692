#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::time::Duration;

use arigold_core::Config;
use arigold_core::ConfigError;
use arigold_core::ConfigOverrides;
use arigold_core::config_toml::load_config_toml;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_layer_is_overridden_by_env_and_flags() {
    let file = write_config(
        r#"
agent_name = "Ari Gold Super Agent"
model_name = "gemini-1.5-flash"
max_tokens = 512
request_timeout_secs = 45
"#,
    );
    let toml = load_config_toml(file.path()).unwrap();

    let config = Config::load_with(
        vec![("ARIGOLD_MODEL_NAME".to_string(), "gemini-1.5-pro".to_string())],
        Some(toml),
        ConfigOverrides {
            temperature: Some(0.2),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.agent_name, "Ari Gold Super Agent");
    assert_eq!(config.model_name, "gemini-1.5-pro");
    assert_eq!(config.max_tokens, 512);
    assert_eq!(config.temperature, 0.2);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_toml(&dir.path().join("absent.toml"));
    assert_matches!(err, Err(ConfigError::Read { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("temperature = \"warm\"");
    let err = load_config_toml(file.path());
    assert_matches!(err, Err(ConfigError::Parse { .. }));
}
