use arigold_core::Config;
use arigold_core::auth::redact;

/// Resolved configuration as TOML, with the API key masked.
pub fn render_config(config: &Config) -> anyhow::Result<String> {
    let mut file = config.to_config_toml();
    file.api_key = file.api_key.as_deref().map(redact);
    Ok(toml::to_string(&file)?)
}
