//! # Econvery
//!
//! Profile-driven relevance scoring for academic papers. Econvery takes a
//! researcher's declared profile (primary field, ordered research interests,
//! ordered methods, regional focus, followed authors) and a set of paper
//! records (title, abstract, classifier concepts, journal tier, citations),
//! and produces a calibrated 1–10 relevance score for each paper with the
//! matched interests and methods and a short explanation.
//!
//! Scoring is deterministic and local: keyword-cluster matching with synonym
//! expansion from a versioned taxonomy, concept matching against upstream
//! classifier tags, position-weighted aggregation, additive quality bonuses
//! and a piecewise-linear calibration curve.
//!
//! ## Quick Start
//!
//! ```rust
//! use econvery::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let engine = RelevanceEngine::with_defaults()?;
//!
//!     let profile = UserProfile::builder("PhD Student (Early)", "Labor Economics")
//!         .interest("Causal Inference")
//!         .method("Difference-in-Differences")
//!         .build()?;
//!
//!     let papers = vec![
//!         PaperRecord::new(
//!             "Minimum wages and employment",
//!             "A difference-in-differences study of minimum wage increases.",
//!         )
//!         .with_citations(120),
//!     ];
//!
//!     for scored in engine.rank(&profile, papers) {
//!         println!("{:.1} {}", scored.score(), scored.result.explanation);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Taxonomy**: field, interest, method and region labels mapped to
//!   weighted keyword clusters, plus journal tiers and author suggestions
//! - **Matching**: keyword and concept matchers over normalized text
//! - **Scoring**: component sub-scores, weighted combination, calibration
//! - **Ranking**: stable ordering with tie-breaks, filtering and summaries
//!
//! The engine does no I/O. Fetching papers and presenting results are left to
//! the caller; the `econvery-cli` crate is one such caller.

pub mod config;
pub mod engine;
pub mod logging;
pub mod matching;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod taxonomy;
pub mod text;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::engine::RelevanceEngine;

    pub use crate::{init, init_with_defaults};

    pub use crate::config::{ConfigBuilder, ConfigLoader, EconveryConfig, LogLevel};

    pub use crate::models::{
        AcademicLevel, Concept, JournalTier, MatchResult, PaperRecord, ProfileBuilder,
        RelevanceLevel, ScoredPaper, UserProfile,
    };

    pub use crate::ranking::{RankingConfig, RankingSummary, SortOrder};

    pub use crate::scoring::ScoringConfig;

    pub use crate::taxonomy::{TaxonomyCategory, TaxonomyStore};

    pub use crate::{EconveryError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Econvery operations
#[derive(Debug, thiserror::Error)]
pub enum EconveryError {
    /// Invalid or unreadable taxonomy data
    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid researcher profile
    #[error("Profile error: {0}")]
    Profile(#[from] crate::models::ProfileError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Invalid scoring configuration
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for EconveryError {
    fn from(err: crate::config::ConfigError) -> Self {
        EconveryError::Configuration(err.to_string())
    }
}

/// Result type for Econvery operations
pub type Result<T> = std::result::Result<T, EconveryError>;

/// Initialize Econvery with default configuration
///
/// Sets up logging and returns an engine over the built-in taxonomy.
///
/// # Examples
///
/// ```rust
/// use econvery::prelude::*;
///
/// fn example() -> Result<()> {
///     let engine = init_with_defaults()?;
///     assert!(!engine.taxonomy().options().primary_fields.is_empty());
///     Ok(())
/// }
/// ```
pub fn init_with_defaults() -> Result<engine::RelevanceEngine> {
    let config = config::ConfigBuilder::defaults().build()?;
    init(&config)
}

/// Initialize Econvery with the provided configuration
///
/// Installs the global logging subscriber (a no-op when one is already set)
/// and builds a [`RelevanceEngine`](engine::RelevanceEngine) from the
/// scoring, ranking and taxonomy sections.
///
/// # Examples
///
/// ```rust
/// use econvery::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_scoring_preset("method_focused")
///         .with_min_score(5.0)
///         .build()?;
///
///     let engine = init(&config)?;
///     assert_eq!(engine.ranking_config().min_score, 5.0);
///     Ok(())
/// }
/// ```
pub fn init(config: &config::EconveryConfig) -> Result<engine::RelevanceEngine> {
    logging::init(&config.logging)?;
    engine::RelevanceEngine::from_config(config)
}
