//! Shared building blocks for the Arigold agent: layered configuration and
//! the boundary to the hosted text-generation service.

pub mod auth;
pub mod client;
pub mod config;
pub mod config_toml;
pub mod error;
pub mod gemini;

pub use client::GenerateRequest;
pub use client::ModelClient;
pub use config::Config;
pub use config::ConfigOverrides;
pub use config::LogLevel;
pub use error::ConfigError;
pub use error::GenerateError;
pub use gemini::GeminiClient;
