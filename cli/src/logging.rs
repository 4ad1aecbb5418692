use arigold_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_filter_directive())
}

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// carries command output.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
