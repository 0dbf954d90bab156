//! Configuration loader.
//!
//! This module provides functionality to load configuration from multiple sources.

use super::{
    ConfigError, DEFAULT_CONFIG_FILES, ENV_NESTING_SEPARATOR, ENV_PREFIX, Result, models::*,
    validation,
};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};

/// Configuration loader that handles loading from multiple sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default values.
    pub fn new() -> Self {
        let figment = Figment::new().merge(Serialized::defaults(EconveryConfig::default()));
        Self {
            figment,
            sources: Vec::new(),
        }
    }

    /// Load configuration from a file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let figment = std::mem::take(&mut self.figment);
        self.figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => {
                self.figment = figment;
                return Err(ConfigError::FileLoadError(format!(
                    "Unsupported file format: {}",
                    path.display()
                )));
            }
        };

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        self.sources.push(path.to_path_buf());
        Ok(self)
    }

    /// Attempt to load from default configuration file locations.
    ///
    /// The first existing file in the working directory wins; the user config
    /// directory is consulted only when none is found there.
    pub fn load_default_files(&mut self) -> &mut Self {
        if self.load_first_existing(DEFAULT_CONFIG_FILES.iter().map(PathBuf::from)) {
            return self;
        }

        if let Some(proj_dirs) = directories::ProjectDirs::from("org", "econvery", "econvery") {
            let config_dir = proj_dirs.config_dir();
            let candidates = ["toml", "yaml", "yml", "json"]
                .iter()
                .map(|ext| config_dir.join(format!("config.{}", ext)));
            self.load_first_existing(candidates);
        }

        self
    }

    fn load_first_existing<I: IntoIterator<Item = PathBuf>>(&mut self, candidates: I) -> bool {
        for path in candidates {
            if path.exists() && self.load_file(&path).is_ok() {
                return true;
            }
        }
        false
    }

    /// Load configuration from environment variables.
    pub fn load_env(&mut self) -> &mut Self {
        let figment = std::mem::take(&mut self.figment)
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR));
        self.figment = figment;
        self
    }

    /// Load configuration from a custom source.
    pub fn merge<T: figment::Provider>(&mut self, provider: T) -> &mut Self {
        let figment = std::mem::take(&mut self.figment).merge(provider);
        self.figment = figment;
        self
    }

    /// Files merged so far, in merge order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Extract and validate the configuration.
    pub fn extract(&self) -> Result<EconveryConfig> {
        let config: EconveryConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
