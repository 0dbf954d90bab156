//! Scoring output types.

use super::paper::PaperRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical relevance bucket derived from the 1–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceLevel {
    /// Score below 3
    Weak,
    /// Score in [3, 5)
    Tangential,
    /// Score in [5, 8)
    Moderate,
    /// Score of 8 or more
    Essential,
}

impl RelevanceLevel {
    /// All levels from most to least relevant.
    pub const ALL: [RelevanceLevel; 4] = [
        RelevanceLevel::Essential,
        RelevanceLevel::Moderate,
        RelevanceLevel::Tangential,
        RelevanceLevel::Weak,
    ];

    /// Bucket a calibrated relevance score.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            RelevanceLevel::Essential
        } else if score >= 5.0 {
            RelevanceLevel::Moderate
        } else if score >= 3.0 {
            RelevanceLevel::Tangential
        } else {
            RelevanceLevel::Weak
        }
    }
}

impl fmt::Display for RelevanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => write!(f, "essential"),
            Self::Moderate => write!(f, "moderate"),
            Self::Tangential => write!(f, "tangential"),
            Self::Weak => write!(f, "weak"),
        }
    }
}

/// Relevance of one paper to one profile, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Calibrated score in [1, 10]
    pub relevance_score: f64,

    pub relevance_level: RelevanceLevel,

    pub field_score: f64,
    pub interest_score: f64,
    pub method_score: f64,
    pub region_score: f64,

    /// Concept-tag agreement with the profile's field and interests
    #[serde(default)]
    pub concept_score: f64,

    /// Weighted component sum before bonuses and calibration
    #[serde(default)]
    pub raw_score: f64,

    /// Journal, citation and author bonuses added to the raw score
    #[serde(default)]
    pub quality_bonus: f64,

    pub author_match: bool,

    /// Matched interest labels in profile order
    #[serde(default)]
    pub matched_interests: Vec<String>,

    /// Matched method labels in profile order
    #[serde(default)]
    pub matched_methods: Vec<String>,

    /// Short human-readable rationale
    #[serde(default)]
    pub explanation: String,
}

impl MatchResult {
    pub fn is_essential(&self) -> bool {
        self.relevance_level == RelevanceLevel::Essential
    }
}

/// A paper together with its match result.
///
/// Serializes as a single flat object: the paper's fields followed by the
/// result's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPaper {
    #[serde(flatten)]
    pub paper: PaperRecord,

    #[serde(flatten)]
    pub result: MatchResult,
}

impl ScoredPaper {
    pub fn new(paper: PaperRecord, result: MatchResult) -> Self {
        Self { paper, result }
    }

    pub fn score(&self) -> f64 {
        self.result.relevance_score
    }

    pub fn level(&self) -> RelevanceLevel {
        self.result.relevance_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: f64) -> MatchResult {
        MatchResult {
            relevance_score: score,
            relevance_level: RelevanceLevel::from_score(score),
            field_score: 1.0,
            interest_score: 0.5,
            method_score: 0.0,
            region_score: 0.0,
            concept_score: 0.2,
            raw_score: 0.55,
            quality_bonus: 0.0,
            author_match: false,
            matched_interests: vec!["Causal Inference".to_string()],
            matched_methods: vec![],
            explanation: "Labor Economics".to_string(),
        }
    }

    #[test]
    fn test_relevance_level_boundaries() {
        assert_eq!(RelevanceLevel::from_score(10.0), RelevanceLevel::Essential);
        assert_eq!(RelevanceLevel::from_score(8.0), RelevanceLevel::Essential);
        assert_eq!(RelevanceLevel::from_score(7.99), RelevanceLevel::Moderate);
        assert_eq!(RelevanceLevel::from_score(5.0), RelevanceLevel::Moderate);
        assert_eq!(RelevanceLevel::from_score(3.0), RelevanceLevel::Tangential);
        assert_eq!(RelevanceLevel::from_score(2.99), RelevanceLevel::Weak);
        assert_eq!(RelevanceLevel::from_score(1.0), RelevanceLevel::Weak);
    }

    #[test]
    fn test_scored_paper_serializes_flat() {
        let scored = ScoredPaper::new(
            PaperRecord::new("Minimum wages", "We study wages").with_id("W1"),
            result(8.4),
        );
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "W1");
        assert_eq!(value["title"], "Minimum wages");
        assert_eq!(value["relevance_score"], 8.4);
        assert_eq!(value["relevance_level"], "essential");
        assert_eq!(value["matched_interests"][0], "Causal Inference");
        assert!(value.get("paper").is_none());

        let back: ScoredPaper = serde_json::from_value(value).unwrap();
        assert_eq!(back, scored);
    }
}
