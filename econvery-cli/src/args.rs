//! Command argument structures
//!
//! This module contains all CLI argument structs organized by command category.

use clap::Args;
use std::path::PathBuf;

// Ranking command arguments
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Profile file (JSON); use - for stdin
    #[arg(long, short)]
    pub profile: PathBuf,

    /// Paper records (JSON array, or an object with a "results" array); use - for stdin
    pub papers: PathBuf,

    /// Maximum number of papers to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Drop papers scoring below this (1.0 to 10.0)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Sort order (relevance, citations, publication_date)
    #[arg(long, short)]
    pub sort: Option<String>,

    /// Scoring preset (balanced, method_focused, topic_focused)
    #[arg(long)]
    pub preset: Option<String>,

    /// Show per-component sub-scores
    #[arg(long)]
    pub details: bool,

    /// Print summary statistics after the list
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Profile file (JSON); use - for stdin
    #[arg(long, short)]
    pub profile: PathBuf,

    /// A single paper record (JSON object); use - for stdin
    pub paper: PathBuf,

    /// Scoring preset (balanced, method_focused, topic_focused)
    #[arg(long)]
    pub preset: Option<String>,
}

// Taxonomy command arguments
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Only list one category (levels, fields, interests, methods, regions)
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct AuthorsArgs {
    /// Primary field to list suggested authors for
    pub field: String,
}

#[derive(Args, Debug)]
pub struct JournalsArgs {
    /// Only journals of this tier (1, 2 or 3)
    #[arg(long, short)]
    pub tier: Option<u8>,

    /// Only journals of this discipline (economics, polisci)
    #[arg(long, short)]
    pub discipline: Option<String>,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile file (JSON); use - for stdin
    pub profile: PathBuf,
}

// Config command arguments
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate (TOML, YAML or JSON)
    pub file: PathBuf,
}

// Completions command arguments
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
