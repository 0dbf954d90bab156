use econvery::config::ConfigLoader;
use econvery::prelude::*;
use std::path::{Path, PathBuf};

/// Loaded configuration and the engine built from it.
pub struct CliContext {
    pub config: EconveryConfig,
    pub sources: Vec<PathBuf>,
    pub engine: RelevanceEngine,
}

impl CliContext {
    /// Load configuration (defaults, default files, `config_file`, environment)
    /// and build the engine.
    pub fn new(config_file: Option<&Path>) -> econvery::Result<Self> {
        let (config, sources) = load_config(config_file)?;
        Self::from_config(config, sources)
    }

    pub fn from_config(config: EconveryConfig, sources: Vec<PathBuf>) -> econvery::Result<Self> {
        let engine = RelevanceEngine::from_config(&config)?;
        Ok(Self {
            config,
            sources,
            engine,
        })
    }

    /// An engine sharing this context's taxonomy, with per-command overrides.
    pub fn engine_with(
        &self,
        scoring: Option<ScoringConfig>,
        ranking: RankingConfig,
    ) -> econvery::Result<RelevanceEngine> {
        let scoring = scoring.unwrap_or_else(|| self.config.scoring.clone());
        Ok(
            RelevanceEngine::new(self.engine.taxonomy().clone(), scoring)?
                .with_ranking(ranking)
                .with_record_preparation(self.config.taxonomy.prepare_records),
        )
    }
}

/// Merge configuration sources in precedence order and validate the result.
pub fn load_config(
    config_file: Option<&Path>,
) -> econvery::Result<(EconveryConfig, Vec<PathBuf>)> {
    let mut loader = ConfigLoader::new();
    loader.load_default_files();
    if let Some(path) = config_file {
        loader.load_file(path)?;
    }
    loader.load_env();

    let config = loader.extract()?;
    Ok((config, loader.sources().to_vec()))
}
