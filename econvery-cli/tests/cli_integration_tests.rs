//! Integration tests for the Econvery CLI
//!
//! These tests drive the command handlers' pure halves against files on disk:
//! - Input parsing (arrays, API pages, single records)
//! - Ranking with command-line overrides
//! - Single-paper scoring with record preparation
//! - Profile and taxonomy inspection
//! - Configuration validation and error reporting

use econvery::EconveryError;
use econvery::prelude::*;
use econvery::taxonomy::Discipline;
use econvery_cli::args::{JournalsArgs, RankArgs, ScoreArgs};
use econvery_cli::context::CliContext;
use econvery_cli::handlers::config::validate_file;
use econvery_cli::handlers::rank::{rank_papers, score_paper, unknown_labels};
use econvery_cli::handlers::taxonomy::select_journals;
use econvery_cli::output::error_response;
use econvery_cli::utils::{parse_papers, parse_profile, ranking_overrides};
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Context built from defaults only, ignoring config files and environment
fn test_context() -> CliContext {
    CliContext::from_config(EconveryConfig::default(), Vec::new())
        .expect("default context should build")
}

fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn profile_json() -> serde_json::Value {
    json!({
        "academic_level": "PhD Student (Early)",
        "primary_field": "Labor Economics",
        "interests": ["Causal Inference"],
        "methods": ["Difference-in-Differences"]
    })
}

fn papers_json() -> serde_json::Value {
    json!([
        {
            "id": "coral",
            "title": "Thermal stress and coral reef bleaching",
            "abstract": "Marine heatwaves drive mass bleaching of reef-building corals.",
            "concepts": [{"name": "Coral reef", "confidence": 0.95}]
        },
        {
            "id": "minwage",
            "title": "The Employment Effects of Minimum Wages: A Difference-in-Differences Approach",
            "abstract": "We study a minimum wage increase across neighbouring counties. Using a difference-in-differences design with parallel pre-trends, we estimate the causal effect of the policy on teen employment and hours worked.",
            "concepts": [
                {"name": "Minimum wage", "confidence": 0.9},
                {"name": "Labour economics", "confidence": 0.7}
            ],
            "journal": "American Economic Review",
            "cited_by_count": 120
        }
    ])
}

fn rank_args(profile: PathBuf, papers: PathBuf) -> RankArgs {
    RankArgs {
        profile,
        papers,
        limit: None,
        min_score: None,
        sort: None,
        preset: None,
        details: false,
        summary: false,
    }
}

#[test]
fn test_parse_papers_accepts_every_input_shape() {
    let array = parse_papers(&papers_json().to_string()).unwrap();
    assert_eq!(array.len(), 2);

    let page = json!({ "meta": { "count": 2 }, "results": papers_json() });
    let from_page = parse_papers(&page.to_string()).unwrap();
    assert_eq!(from_page.len(), 2);
    assert_eq!(from_page[1].id.as_deref(), Some("minwage"));

    let single = json!({ "title": "Just one", "abstract": "" });
    let from_single = parse_papers(&single.to_string()).unwrap();
    assert_eq!(from_single.len(), 1);
    assert_eq!(from_single[0].title, "Just one");

    assert!(parse_papers("42").is_err());
    assert!(parse_papers(r#"{"results": 3}"#).is_err());
    assert!(matches!(parse_papers("[{"), Err(EconveryError::Json(_))));
}

#[test]
fn test_parse_profile_rejects_invalid_profiles() {
    let profile = parse_profile(&profile_json().to_string()).unwrap();
    assert_eq!(profile.primary_field(), "Labor Economics");

    let too_many = json!({
        "academic_level": "Faculty",
        "primary_field": "Labor Economics",
        "interests": ["a", "b", "c", "d", "e", "f"]
    });
    assert!(parse_profile(&too_many.to_string()).is_err());
}

#[test]
fn test_rank_orders_and_applies_overrides() {
    let dir = TempDir::new().unwrap();
    let profile = write_json(dir.path(), "profile.json", &profile_json());
    let papers = write_json(dir.path(), "papers.json", &papers_json());
    let ctx = test_context();

    let (ranked, _) = rank_papers(&rank_args(profile.clone(), papers.clone()), &ctx).unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].paper.id.as_deref(), Some("minwage"));
    assert!(ranked[0].score() > ranked[1].score());
    // Journal names are mapped to tiers during preparation
    assert_eq!(ranked[0].paper.journal_tier, JournalTier::Top);

    let mut limited = rank_args(profile.clone(), papers.clone());
    limited.limit = Some(1);
    let (ranked, engine) = rank_papers(&limited, &ctx).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(engine.ranking_config().limit, Some(1));

    let mut filtered = rank_args(profile, papers);
    filtered.min_score = Some(9.99);
    filtered.sort = Some("citations".to_string());
    let (ranked, engine) = rank_papers(&filtered, &ctx).unwrap();
    assert!(ranked.iter().all(|paper| paper.score() >= 9.99));
    assert_eq!(engine.ranking_config().sort_by, SortOrder::Citations);
}

#[test]
fn test_rank_rejects_bad_arguments() {
    let dir = TempDir::new().unwrap();
    let profile = write_json(dir.path(), "profile.json", &profile_json());
    let papers = write_json(dir.path(), "papers.json", &papers_json());
    let ctx = test_context();

    let mut bad_sort = rank_args(profile.clone(), papers.clone());
    bad_sort.sort = Some("alphabetical".to_string());
    assert!(rank_papers(&bad_sort, &ctx).is_err());

    let mut bad_preset = rank_args(profile.clone(), papers.clone());
    bad_preset.preset = Some("everything".to_string());
    assert!(rank_papers(&bad_preset, &ctx).is_err());

    let mut bad_min = rank_args(profile, papers);
    bad_min.min_score = Some(11.0);
    assert!(matches!(
        rank_papers(&bad_min, &ctx),
        Err(EconveryError::Configuration(_))
    ));

    let both_stdin = rank_args(PathBuf::from("-"), PathBuf::from("-"));
    assert!(rank_papers(&both_stdin, &ctx).is_err());

    let missing = rank_args(
        dir.path().join("nope.json"),
        dir.path().join("papers.json"),
    );
    let error = rank_papers(&missing, &ctx).unwrap_err();
    assert_eq!(error_response(&error)["code"], "OTHER_ERROR");
}

#[test]
fn test_ranking_overrides_keep_unset_values() {
    let base = RankingConfig {
        min_score: 3.0,
        limit: Some(50),
        sort_by: SortOrder::Relevance,
    };

    let unchanged = ranking_overrides(&base, None, None, None).unwrap();
    assert_eq!(unchanged, base);

    let changed = ranking_overrides(&base, Some(5), None, Some("publication_date")).unwrap();
    assert_eq!(changed.limit, Some(5));
    assert_eq!(changed.min_score, 3.0);
    assert_eq!(changed.sort_by, SortOrder::PublicationDate);
}

#[test]
fn test_score_prepares_upstream_records() {
    let dir = TempDir::new().unwrap();
    let profile = write_json(dir.path(), "profile.json", &profile_json());
    let paper = write_json(
        dir.path(),
        "paper.json",
        &json!({
            "id": "https://openalex.org/W42",
            "title": "Minimum wages and employment",
            "abstract_inverted_index": {
                "Minimum": [0],
                "wage": [1],
                "increases": [2],
                "and": [3],
                "employment": [4]
            },
            "journal": "Quarterly Journal of Economics",
            "cited_by_count": 30
        }),
    );

    let scored = score_paper(
        &ScoreArgs {
            profile,
            paper,
            preset: None,
        },
        &test_context(),
    )
    .unwrap();

    assert_eq!(scored.paper.id.as_deref(), Some("W42"));
    assert_eq!(
        scored.paper.abstract_text,
        "Minimum wage increases and employment"
    );
    assert_eq!(scored.paper.journal_tier, JournalTier::Top);
    assert!(scored.result.relevance_score > 1.0);
    assert!(scored.result.explanation.contains("tier 1 journal"));
}

#[test]
fn test_unknown_profile_labels_are_reported() {
    let ctx = test_context();
    let profile = UserProfile::builder("Faculty", "Labor Economics")
        .interest("Causal Inference")
        .interest("Underwater Basket Weaving")
        .build()
        .unwrap();

    let unknown = unknown_labels(ctx.engine.taxonomy(), &profile);
    assert_eq!(
        unknown,
        vec![(
            TaxonomyCategory::Interest,
            "Underwater Basket Weaving".to_string()
        )]
    );
}

#[test]
fn test_journal_filters() {
    let ctx = test_context();
    let taxonomy = ctx.engine.taxonomy();

    let all = select_journals(
        &JournalsArgs {
            tier: None,
            discipline: None,
        },
        taxonomy,
    )
    .unwrap();
    assert_eq!(all.len(), taxonomy.journals().len());
    assert!(all.windows(2).all(|pair| pair[0].tier <= pair[1].tier));

    let top_econ = select_journals(
        &JournalsArgs {
            tier: Some(1),
            discipline: Some("economics".to_string()),
        },
        taxonomy,
    )
    .unwrap();
    assert!(!top_econ.is_empty());
    assert!(top_econ.iter().all(|journal| {
        journal.tier == JournalTier::Top && journal.discipline == Discipline::Economics
    }));

    let bad_tier = JournalsArgs {
        tier: Some(7),
        discipline: None,
    };
    assert!(select_journals(&bad_tier, taxonomy).is_err());
}

#[test]
fn test_config_validation() {
    let dir = TempDir::new().unwrap();

    let valid = dir.path().join("econvery.toml");
    std::fs::write(
        &valid,
        r#"
[ranking]
min_score = 4.0
sort_by = "citations"

[logging]
level = "debug"
"#,
    )
    .unwrap();
    let config = validate_file(&valid).unwrap();
    assert_eq!(config.ranking.min_score, 4.0);
    assert_eq!(config.ranking.sort_by, SortOrder::Citations);
    assert_eq!(config.logging.level, LogLevel::Debug);

    let invalid = dir.path().join("weights.toml");
    std::fs::write(
        &invalid,
        r#"
[scoring.weights]
field = 0.5
interest = 0.5
method = 0.5
region = 0.0
"#,
    )
    .unwrap();
    let error = validate_file(&invalid).unwrap_err();
    assert_eq!(error_response(&error)["code"], "CONFIGURATION_ERROR");

    let unsupported = dir.path().join("econvery.ini");
    std::fs::write(&unsupported, "min_score = 3").unwrap();
    assert!(validate_file(&unsupported).is_err());
}
