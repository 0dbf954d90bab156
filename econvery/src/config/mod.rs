//! Configuration system for Econvery.
//!
//! Configuration is layered: built-in defaults, then the first default
//! configuration file found, then an explicit file, then `ECONVERY_`
//! environment variables. Nested keys use a double underscore, e.g.
//! `ECONVERY_SCORING__AUTHOR_BONUS=0.15` or `ECONVERY_LOGGING__LEVEL=debug`.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "econvery.toml",
    "econvery.yaml",
    "econvery.yml",
    "econvery.json",
    ".econvery/config.toml",
    ".econvery/config.yaml",
    ".econvery/config.yml",
    ".econvery/config.json",
];

/// Environment variable prefix for Econvery configuration
pub const ENV_PREFIX: &str = "ECONVERY_";

/// Separator between nested keys in environment variable names
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
