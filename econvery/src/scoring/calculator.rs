//! Score combination and calibration
//!
//! Turns component sub-scores into the final 1–10 relevance score: a weighted
//! sum of the components, additive quality bonuses that sit outside the
//! weights, and the calibration curve.

use super::components::ComponentScores;
use super::config::ScoringConfig;
use crate::models::JournalTier;

/// The stages of one final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Weighted component sum
    pub raw: f64,
    /// Journal, citation and author bonuses
    pub bonus: f64,
    /// Calibrated relevance score in [1, 10]
    pub relevance_score: f64,
}

impl ScoreBreakdown {
    /// The lowest possible score, for papers with nothing to score.
    pub fn floor() -> Self {
        Self {
            raw: 0.0,
            bonus: 0.0,
            relevance_score: super::calibration::MIN_SCORE,
        }
    }
}

/// Combines component scores and quality signals into a calibrated score.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Create a score calculator with the given configuration, returning an error if invalid
    pub fn try_new(config: ScoringConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Combine components with the paper's journal tier and citation count.
    pub fn combine(
        &self,
        components: &ComponentScores,
        journal_tier: JournalTier,
        cited_by_count: u64,
    ) -> ScoreBreakdown {
        let raw = self.raw_score(components);
        let bonus = self.quality_bonus(journal_tier, cited_by_count, components.author_match);
        let relevance_score = self.config.calibration.calibrate(raw + bonus);

        ScoreBreakdown {
            raw,
            bonus,
            relevance_score,
        }
    }

    /// Weighted sum of the four components.
    pub fn raw_score(&self, components: &ComponentScores) -> f64 {
        let weights = self.config.weights_for(components.declared_methods);
        weights.field * components.field_score
            + weights.interest * components.interest_score
            + weights.method * components.method_score
            + weights.region * components.region_score
    }

    /// Additive bonuses applied after weighting.
    pub fn quality_bonus(
        &self,
        journal_tier: JournalTier,
        cited_by_count: u64,
        author_match: bool,
    ) -> f64 {
        let author = if author_match {
            self.config.author_bonus
        } else {
            0.0
        };
        self.config.tier_bonus(journal_tier) + self.config.citation_bonus(cited_by_count) + author
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}
