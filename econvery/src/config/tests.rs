#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, EconveryConfig, LogFormat, LogLevel, validation,
    };
    use crate::ranking::SortOrder;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = EconveryConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Default);
        assert!(config.logging.console);
        assert_eq!(config.ranking.min_score, 1.0);
        assert_eq!(config.ranking.sort_by, SortOrder::Relevance);
        assert!(config.taxonomy.path.is_none());
        assert!(config.taxonomy.prepare_records);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_scoring_preset("method_focused")
            .with_min_score(4.0)
            .with_limit(25)
            .with_sort_order(SortOrder::Citations)
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.scoring.weights.method, 0.40);
        assert_eq!(config.ranking.min_score, 4.0);
        assert_eq!(config.ranking.limit, Some(25));
        assert_eq!(config.ranking.sort_by, SortOrder::Citations);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_unknown_preset_keeps_scoring() {
        let config = ConfigBuilder::new()
            .with_scoring_preset("does-not-exist")
            .build()
            .unwrap();
        assert_eq!(config.scoring, EconveryConfig::default().scoring);
    }

    #[test]
    fn test_validation() {
        let valid = ConfigBuilder::new().build();
        assert!(valid.is_ok());

        let config = EconveryConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let mut config = EconveryConfig::default();
        config.scoring.weights.field = 0.9;
        assert!(matches!(
            validation::validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));

        let invalid = ConfigBuilder::new().with_limit(0).build();
        assert!(invalid.is_err());

        let invalid = ConfigBuilder::new().with_taxonomy_file("taxonomy.xml").build();
        assert!(invalid.is_err());

        let invalid = ConfigBuilder::new()
            .with_log_file("/definitely/not/a/real/dir/econvery.log")
            .build();
        assert!(invalid.is_err());
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        let test = ConfigBuilder::testing().build().unwrap();
        let minimal = ConfigBuilder::minimal().build().unwrap();

        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(test.logging.level, LogLevel::Warn);
        assert!(!test.logging.console);
        assert_eq!(minimal.ranking.min_score, 8.0);
        assert_eq!(
            ConfigBuilder::defaults().build().unwrap(),
            EconveryConfig::default()
        );
    }

    #[test]
    fn test_predefined_configs_production() {
        let prod = ConfigBuilder::production().build().unwrap();

        assert_eq!(prod.logging.level, LogLevel::Info);
        assert_eq!(prod.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_taxonomy_file("/tmp/taxonomy.toml")
            .with_limit(10)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EconveryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
        assert_eq!(
            deserialized.taxonomy.path,
            Some(PathBuf::from("/tmp/taxonomy.toml"))
        );
    }

    #[test]
    fn test_legacy_stdout_key() {
        let config: EconveryConfig =
            serde_json::from_str(r#"{"logging": {"stdout": false}}"#).unwrap();
        assert!(!config.logging.console);
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_config(
            ".toml",
            r#"
[scoring]
author_bonus = 0.2

[scoring.weights]
field = 0.4
interest = 0.3
method = 0.2
region = 0.1

[ranking]
min_score = 3.5
sort_by = "publication_date"

[logging]
level = "warn"
"#,
        );

        let mut loader = ConfigLoader::new();
        loader.load_file(file.path()).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.scoring.author_bonus, 0.2);
        assert_eq!(config.scoring.weights.field, 0.4);
        assert_eq!(config.scoring.title_repetitions, 3);
        assert_eq!(config.ranking.min_score, 3.5);
        assert_eq!(config.ranking.sort_by, SortOrder::PublicationDate);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(loader.sources(), &[file.path().to_path_buf()]);
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_config(
            ".yaml",
            "ranking:\n  limit: 5\ntaxonomy:\n  prepare_records: false\n",
        );

        let mut loader = ConfigLoader::new();
        loader.load_file(file.path()).unwrap();
        let config = loader.extract().unwrap();

        assert_eq!(config.ranking.limit, Some(5));
        assert!(!config.taxonomy.prepare_records);
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let file = write_config(".json", r#"{"ranking": {"min_score": 42.0}}"#);

        let mut loader = ConfigLoader::new();
        loader.load_file(file.path()).unwrap();
        assert!(matches!(
            loader.extract(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_file_errors() {
        let mut loader = ConfigLoader::new();
        assert!(matches!(
            loader.load_file("/no/such/econvery.toml"),
            Err(ConfigError::FileLoadError(_))
        ));

        let file = write_config(".ini", "level = debug");
        assert!(matches!(
            loader.load_file(file.path()),
            Err(ConfigError::FileLoadError(_))
        ));

        // Failed loads leave the loader usable.
        assert_eq!(loader.extract().unwrap(), EconveryConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config(".toml", "[ranking]\nmin_score = \"high\"\n");

        let mut loader = ConfigLoader::new();
        loader.load_file(file.path()).unwrap();
        assert!(matches!(loader.extract(), Err(ConfigError::ParseError(_))));
    }
}
