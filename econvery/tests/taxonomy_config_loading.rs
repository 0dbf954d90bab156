//! Loading taxonomy and configuration files from disk

use econvery::config::{ConfigLoader, LogLevel};
use econvery::prelude::*;
use econvery::taxonomy::TaxonomyData;
use std::io::Write;
use tempfile::TempDir;

const SMALL_TAXONOMY: &str = r#"
version = "test-1"
academic_levels = ["Postdoc"]

[[fields]]
label = "Marine Economics"
canonical = "fisheries"
synonyms = ["fishing", "catch shares", "aquaculture"]
weight = 1.0

[[interests]]
label = "Coral Reefs"
canonical = "coral reef"
synonyms = ["coral", "reefs", "bleaching"]
concepts = ["Coral reef"]
weight = 0.9
aliases = ["Reefs"]

[[methods]]
label = "Field Surveys"
canonical = "survey"
synonyms = ["transect", "census"]
weight = 0.8

[[regions]]
label = "Pacific"
canonical = "pacific"
weight = 1.0

[[journals]]
name = "Marine Resource Economics"
issn = "0738-1360"
discipline = "economics"
tier = 2
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn reef_profile() -> UserProfile {
    UserProfile::builder("Postdoc", "Marine Economics")
        .interest("reefs")
        .method("Field Surveys")
        .regional_focus("Pacific")
        .build()
        .unwrap()
}

#[test]
fn test_custom_taxonomy_drives_scoring() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "taxonomy.toml", SMALL_TAXONOMY);

    let store = TaxonomyStore::from_file(&path).unwrap();
    assert_eq!(store.version(), "test-1");
    assert_eq!(store.options().interests, vec!["Coral Reefs"]);

    let engine = RelevanceEngine::new(store.into(), ScoringConfig::default()).unwrap();
    let paper = PaperRecord::new(
        "Coral bleaching and Pacific fisheries",
        "A transect survey of reefs measures how coral bleaching changes the catch \
         of Pacific fishing fleets.",
    )
    .with_journal("Marine Resource Economics");

    let result = engine.score(&reef_profile(), &paper);
    // Matches are reported under the profile's own wording.
    assert_eq!(result.matched_interests, vec!["reefs"]);
    assert_eq!(result.matched_methods, vec!["Field Surveys"]);
    assert!(result.region_score > 0.0);
    assert!(result.explanation.contains("tier 2 journal"));
    assert!(result.relevance_score >= 8.0);
}

#[test]
fn test_builtin_taxonomy_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::to_string_pretty(&TaxonomyData::builtin()).unwrap();
    let path = write_file(&dir, "builtin.json", &json);

    let loaded = TaxonomyStore::from_file(&path).unwrap();
    let builtin = TaxonomyStore::builtin().unwrap();
    assert_eq!(loaded.version(), builtin.version());
    assert_eq!(loaded.options(), builtin.options());
    assert_eq!(loaded.journals().len(), builtin.journals().len());
}

#[test]
fn test_invalid_taxonomy_files_are_rejected() {
    let dir = TempDir::new().unwrap();

    let bad_weight = SMALL_TAXONOMY.replace("weight = 0.8", "weight = 1.5");
    let path = write_file(&dir, "bad_weight.toml", &bad_weight);
    assert!(matches!(
        TaxonomyStore::from_file(&path),
        Err(EconveryError::Taxonomy(_))
    ));

    let duplicate = SMALL_TAXONOMY.replace("aliases = [\"Reefs\"]", "aliases = [\"coral reefs\"]");
    let path = write_file(&dir, "duplicate.toml", &duplicate);
    assert!(TaxonomyStore::from_file(&path).is_err());

    let path = write_file(&dir, "taxonomy.csv", "label,weight");
    assert!(TaxonomyStore::from_file(&path).is_err());

    assert!(TaxonomyStore::from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_config_file_selects_taxonomy_and_ranking() {
    let dir = TempDir::new().unwrap();
    let taxonomy = write_file(&dir, "taxonomy.toml", SMALL_TAXONOMY);
    let config = format!(
        r#"
[taxonomy]
path = "{}"

[ranking]
limit = 1
min_score = 2.0

[logging]
level = "error"
console = false
"#,
        taxonomy.display()
    );
    let config_path = write_file(&dir, "econvery.toml", &config);

    let mut loader = ConfigLoader::new();
    loader.load_file(&config_path).unwrap();
    let config = loader.extract().unwrap();
    assert_eq!(config.logging.level, LogLevel::Error);

    let engine = RelevanceEngine::from_config(&config).unwrap();
    assert_eq!(engine.taxonomy().version(), "test-1");

    let ranked = engine.rank(
        &reef_profile(),
        vec![
            PaperRecord::new("Labor markets", "Minimum wages and employment."),
            PaperRecord::new("Reef surveys", "A census of coral reefs in the Pacific."),
        ],
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].paper.title, "Reef surveys");
}

#[test]
fn test_missing_taxonomy_path_fails_engine_construction() {
    let config = ConfigBuilder::new()
        .with_taxonomy_file("/no/such/taxonomy.toml")
        .build()
        .unwrap();

    assert!(RelevanceEngine::from_config(&config).is_err());
}
