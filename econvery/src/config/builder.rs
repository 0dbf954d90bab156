//! Configuration builder.
//!
//! This module provides a fluent builder API for creating Econvery configurations.

use super::{Result, models::*, validation};
use crate::ranking::{RankingConfig, SortOrder};
use crate::scoring::ScoringConfig;
use std::path::PathBuf;

/// Builder for Econvery configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: EconveryConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Use a named scoring preset (`balanced`, `method_focused`, `topic_focused`).
    ///
    /// Unknown names leave the current scoring configuration in place.
    pub fn with_scoring_preset(mut self, name: &str) -> Self {
        if let Some(scoring) = ScoringConfig::preset(name) {
            self.config.scoring = scoring;
        }
        self
    }

    /// Set the ranking configuration.
    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.config.ranking = ranking;
        self
    }

    /// Drop papers scoring below `min_score`.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.config.ranking.min_score = min_score;
        self
    }

    /// Return at most `limit` papers.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.ranking.limit = Some(limit);
        self
    }

    /// Set the order ranked papers are returned in.
    pub fn with_sort_order(mut self, sort_by: SortOrder) -> Self {
        self.config.ranking.sort_by = sort_by;
        self
    }

    /// Load the taxonomy from a file instead of the built-in one.
    pub fn with_taxonomy_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.taxonomy.path = Some(path.into());
        self
    }

    /// Enable or disable upstream record preparation.
    pub fn with_record_preparation(mut self, enabled: bool) -> Self {
        self.config.taxonomy.prepare_records = enabled;
        self
    }

    /// Set the logging configuration.
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Also write logs to a file.
    pub fn with_log_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.into());
        self
    }

    /// Enable or disable console logging.
    pub fn with_console_logging(mut self, enabled: bool) -> Self {
        self.config.logging.console = enabled;
        self
    }

    /// Use default logging settings for production (info level, JSON lines).
    pub fn with_default_logging(self) -> Self {
        self.with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }

    /// Build the configuration, validating it first.
    pub fn build(self) -> Result<EconveryConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }

    /// Verbose logging with the balanced scoring defaults.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Default)
    }

    /// Quiet, deterministic settings for tests.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
            .with_console_logging(false)
    }

    /// Structured logging for unattended runs.
    pub fn production() -> Self {
        Self::new().with_default_logging()
    }

    /// The built-in defaults.
    pub fn defaults() -> Self {
        Self::new()
    }

    /// Only essential papers, quiet logs.
    pub fn minimal() -> Self {
        Self::new()
            .with_min_score(8.0)
            .with_log_level(LogLevel::Error)
    }
}
