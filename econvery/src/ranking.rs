//! Ordering, filtering and summarizing scored papers.

use crate::models::{RelevanceLevel, ScoredPaper};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Order in which ranked papers are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Relevance score, then citations, then input order
    #[default]
    Relevance,
    /// Citation count, then input order
    Citations,
    /// Newest publication date first; undated papers last
    PublicationDate,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::Citations => write!(f, "citations"),
            Self::PublicationDate => write!(f, "publication_date"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "relevance" | "score" => Ok(Self::Relevance),
            "citations" | "cited_by_count" => Ok(Self::Citations),
            "publication_date" | "date" => Ok(Self::PublicationDate),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// Post-scoring presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Papers scoring below this are dropped
    pub min_score: f64,

    /// Maximum number of papers returned
    pub limit: Option<usize>,

    pub sort_by: SortOrder,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: 1.0,
            limit: None,
            sort_by: SortOrder::Relevance,
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_score.is_finite() || !(1.0..=10.0).contains(&self.min_score) {
            return Err(format!(
                "min_score must be in [1.0, 10.0], got {}",
                self.min_score
            ));
        }
        if self.limit == Some(0) {
            return Err("limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Sorts and trims scored papers.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Sort by the configured order, drop papers below `min_score`, then apply `limit`.
    pub fn rank(&self, mut papers: Vec<ScoredPaper>) -> Vec<ScoredPaper> {
        sort_papers(&mut papers, self.config.sort_by);
        let mut papers = filter_min_score(papers, self.config.min_score);
        if let Some(limit) = self.config.limit {
            papers.truncate(limit);
        }
        papers
    }
}

/// Stable sort of `papers` in `order`.
pub fn sort_papers(papers: &mut [ScoredPaper], order: SortOrder) {
    match order {
        SortOrder::Relevance => papers.sort_by(by_relevance),
        SortOrder::Citations => {
            papers.sort_by(|a, b| b.paper.cited_by_count.cmp(&a.paper.cited_by_count))
        }
        SortOrder::PublicationDate => {
            papers.sort_by(|a, b| match (&a.paper.publication_date, &b.paper.publication_date) {
                (Some(a), Some(b)) => b.cmp(a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
        }
    }
}

/// Relevance descending, then citations descending.
pub fn by_relevance(a: &ScoredPaper, b: &ScoredPaper) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| b.paper.cited_by_count.cmp(&a.paper.cited_by_count))
}

/// Keep papers scoring at least `min_score`, preserving order.
pub fn filter_min_score(papers: Vec<ScoredPaper>, min_score: f64) -> Vec<ScoredPaper> {
    papers
        .into_iter()
        .filter(|paper| paper.score() >= min_score)
        .collect()
}

/// Per-level counts and the average score of a ranked list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RankingSummary {
    pub total: usize,
    pub essential: usize,
    pub moderate: usize,
    pub tangential: usize,
    pub weak: usize,
    pub average_score: f64,
    pub top_score: Option<f64>,
}

impl RankingSummary {
    pub fn from_papers(papers: &[ScoredPaper]) -> Self {
        let mut summary = Self {
            total: papers.len(),
            ..Self::default()
        };
        if papers.is_empty() {
            return summary;
        }

        let mut sum = 0.0;
        for paper in papers {
            sum += paper.score();
            summary.top_score = Some(match summary.top_score {
                Some(top) => top.max(paper.score()),
                None => paper.score(),
            });
            match paper.level() {
                RelevanceLevel::Essential => summary.essential += 1,
                RelevanceLevel::Moderate => summary.moderate += 1,
                RelevanceLevel::Tangential => summary.tangential += 1,
                RelevanceLevel::Weak => summary.weak += 1,
            }
        }
        summary.average_score = sum / papers.len() as f64;
        summary
    }

    /// Count for one level.
    pub fn count(&self, level: RelevanceLevel) -> usize {
        match level {
            RelevanceLevel::Essential => self.essential,
            RelevanceLevel::Moderate => self.moderate,
            RelevanceLevel::Tangential => self.tangential,
            RelevanceLevel::Weak => self.weak,
        }
    }
}
