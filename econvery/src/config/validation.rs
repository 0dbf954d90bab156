//! Configuration validation.
//!
//! This module provides functions to validate Econvery configuration.

use super::{ConfigError, Result, models::*};

/// Validate the entire configuration.
pub fn validate_config(config: &EconveryConfig) -> Result<()> {
    config
        .scoring
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("scoring: {}", e)))?;
    config
        .ranking
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("ranking: {}", e)))?;
    validate_taxonomy_config(&config.taxonomy)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate taxonomy configuration.
fn validate_taxonomy_config(config: &TaxonomyConfig) -> Result<()> {
    if let Some(path) = &config.path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "taxonomy.path cannot be empty".to_string(),
            ));
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") | Some("yaml") | Some("yml") | Some("json") => {}
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Unsupported taxonomy file format: {}",
                    path.display()
                )));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if let Some(file) = &config.file {
        if file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Logging file path cannot be empty".to_string(),
            ));
        }

        if let Some(parent) = file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ConfigError::ValidationError(format!(
                    "Logging directory does not exist: {}",
                    parent.display()
                )));
            }
        }
    }

    Ok(())
}
