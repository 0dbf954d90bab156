//! Scoring configuration
//!
//! Every constant the scorer uses lives here: component weights, matcher
//! multipliers, position decay, breadth and agreement bonuses, quality
//! bonuses and the calibration curve. The configuration is plain data, so it
//! can be versioned in a config file and swapped without touching the
//! scoring code.

use super::calibration::CalibrationCurve;
use crate::models::JournalTier;
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the four profile components in the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub field: f64,
    pub interest: f64,
    pub method: f64,
    pub region: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            field: 0.30,
            interest: 0.35,
            method: 0.25,
            region: 0.10,
        }
    }
}

impl ComponentWeights {
    pub fn sum(&self) -> f64 {
        self.field + self.interest + self.method + self.region
    }

    /// Move `amount` of weight from interests to methods.
    ///
    /// Never moves more than the interest weight holds.
    pub fn shifted_to_methods(mut self, amount: f64) -> Self {
        let moved = amount.clamp(0.0, self.interest);
        self.interest -= moved;
        self.method += moved;
        self
    }
}

/// Linear position decay with a floor: `max(floor, 1 - rate * position)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDecay {
    pub rate: f64,
    pub floor: f64,
}

impl PositionDecay {
    pub fn factor(&self, position: usize) -> f64 {
        (1.0 - self.rate * position as f64).max(self.floor)
    }
}

/// Citation count threshold and the bonus it earns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CitationStep {
    pub min_citations: u64,
    pub bonus: f64,
}

impl CitationStep {
    pub const fn new(min_citations: u64, bonus: f64) -> Self {
        Self {
            min_citations,
            bonus,
        }
    }
}

/// Configuration for profile-to-paper relevance scoring
///
/// # Example
///
/// ```
/// use econvery::scoring::ScoringConfig;
///
/// let mut config = ScoringConfig::default();
/// config.weights.region = 0.0;
/// config.normalize_weights();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Component weights of the raw score; must sum to 1.0
    pub weights: ComponentWeights,

    /// Number of declared methods at which weight shifts towards methods
    pub method_heavy_threshold: usize,

    /// Weight moved from interests to methods for method-heavy profiles
    pub method_heavy_shift: f64,

    /// Keyword multipliers for one, two, and three or more distinct hits
    pub hit_multipliers: [f64; 3],

    /// How many times the title is repeated in the matching text
    pub title_repetitions: usize,

    /// Decay applied to interests by profile position
    pub interest_decay: PositionDecay,

    /// Decay applied to methods by profile position
    pub method_decay: PositionDecay,

    /// Share of the best per-entry score in `peak * best + (1 - peak) * mean`
    pub peak_share: f64,

    /// Interest multiplier when two interests match
    pub interest_pair_bonus: f64,

    /// Interest multiplier when three or more interests match
    pub interest_breadth_bonus: f64,

    /// Method multiplier when two or more methods match
    pub method_pair_bonus: f64,

    /// Accumulated concept confidence that counts as a full concept score
    pub concept_normalization: f64,

    /// Keyword and concept scores above this both count as agreeing
    pub agreement_threshold: f64,

    /// Multiplier applied when keyword and concept signals agree
    pub agreement_bonus: f64,

    /// Additive bonus per journal tier, best tier first
    pub tier_bonus: [f64; 4],

    /// Additive citation bonus steps; the largest satisfied step applies
    pub citation_steps: Vec<CitationStep>,

    /// Additive bonus when a paper author matches a seed author
    pub author_bonus: f64,

    /// Raw-to-relevance calibration curve
    pub calibration: CalibrationCurve,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            method_heavy_threshold: 3,
            method_heavy_shift: 0.05,
            hit_multipliers: [0.6, 0.8, 1.0],
            title_repetitions: 3,
            interest_decay: PositionDecay {
                rate: 0.08,
                floor: 0.5,
            },
            method_decay: PositionDecay {
                rate: 0.12,
                floor: 0.4,
            },
            peak_share: 0.6,
            interest_pair_bonus: 1.12,
            interest_breadth_bonus: 1.25,
            method_pair_bonus: 1.15,
            concept_normalization: 1.2,
            agreement_threshold: 0.3,
            agreement_bonus: 1.15,
            tier_bonus: [0.08, 0.05, 0.02, 0.0],
            citation_steps: vec![
                CitationStep::new(5, 0.01),
                CitationStep::new(25, 0.02),
                CitationStep::new(100, 0.04),
                CitationStep::new(500, 0.06),
            ],
            author_bonus: 0.10,
            calibration: CalibrationCurve::default(),
        }
    }
}

impl ScoringConfig {
    /// Create a new scoring configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Weighting for researchers who care most about how a paper is done.
    pub fn method_focused() -> Self {
        Self {
            weights: ComponentWeights {
                field: 0.25,
                interest: 0.25,
                method: 0.40,
                region: 0.10,
            },
            method_pair_bonus: 1.2,
            ..Self::default()
        }
    }

    /// Weighting for researchers who care most about what a paper is about.
    pub fn topic_focused() -> Self {
        Self {
            weights: ComponentWeights {
                field: 0.35,
                interest: 0.45,
                method: 0.12,
                region: 0.08,
            },
            method_heavy_shift: 0.03,
            ..Self::default()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::default()),
            "method" | "method_focused" | "method-focused" => Some(Self::method_focused()),
            "topic" | "topic_focused" | "topic-focused" => Some(Self::topic_focused()),
            _ => None,
        }
    }

    /// Component weights for a profile declaring `declared_methods` methods.
    pub fn weights_for(&self, declared_methods: usize) -> ComponentWeights {
        if declared_methods >= self.method_heavy_threshold {
            self.weights.shifted_to_methods(self.method_heavy_shift)
        } else {
            self.weights
        }
    }

    /// Additive bonus for a journal tier.
    pub fn tier_bonus(&self, tier: JournalTier) -> f64 {
        self.tier_bonus[tier.index()]
    }

    /// Additive bonus for a citation count.
    pub fn citation_bonus(&self, cited_by_count: u64) -> f64 {
        self.citation_steps
            .iter()
            .filter(|step| cited_by_count >= step.min_citations)
            .map(|step| step.bonus)
            .fold(0.0, f64::max)
    }

    /// Scale the component weights to sum to 1.0
    ///
    /// Preserves their ratios. All-zero weights are left untouched.
    pub fn normalize_weights(&mut self) {
        let total = self.weights.sum();
        if total > 0.0 && total.is_finite() {
            self.weights.field /= total;
            self.weights.interest /= total;
            self.weights.method /= total;
            self.weights.region /= total;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("field", self.weights.field),
            ("interest", self.weights.interest),
            ("method", self.weights.method),
            ("region", self.weights.region),
        ];
        for (name, weight) in weights {
            check_range(&format!("weights.{}", name), weight, 0.0, 1.0)?;
        }
        if (self.weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!(
                "component weights must sum to 1.0, got {:.4}",
                self.weights.sum()
            ));
        }

        check_range("method_heavy_shift", self.method_heavy_shift, 0.0, self.weights.interest)?;

        for multiplier in self.hit_multipliers {
            check_range("hit_multipliers", multiplier, 0.0, 1.0)?;
        }
        if self.hit_multipliers.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err("hit_multipliers must not decrease with more hits".to_string());
        }

        if self.title_repetitions > 10 {
            return Err("title_repetitions must be at most 10".to_string());
        }

        for (name, decay) in [
            ("interest_decay", self.interest_decay),
            ("method_decay", self.method_decay),
        ] {
            check_range(&format!("{}.rate", name), decay.rate, 0.0, 1.0)?;
            check_range(&format!("{}.floor", name), decay.floor, 0.0, 1.0)?;
        }

        check_range("peak_share", self.peak_share, 0.0, 1.0)?;

        for (name, bonus) in [
            ("interest_pair_bonus", self.interest_pair_bonus),
            ("interest_breadth_bonus", self.interest_breadth_bonus),
            ("method_pair_bonus", self.method_pair_bonus),
            ("agreement_bonus", self.agreement_bonus),
        ] {
            check_range(name, bonus, 1.0, 2.0)?;
        }
        if self.interest_breadth_bonus < self.interest_pair_bonus {
            return Err("interest_breadth_bonus must be at least interest_pair_bonus".to_string());
        }

        if !self.concept_normalization.is_finite() || self.concept_normalization <= 0.0 {
            return Err("concept_normalization must be > 0.0".to_string());
        }
        check_range("agreement_threshold", self.agreement_threshold, 0.0, 1.0)?;

        for bonus in self.tier_bonus {
            check_range("tier_bonus", bonus, 0.0, 1.0)?;
        }
        for step in &self.citation_steps {
            check_range("citation_steps.bonus", step.bonus, 0.0, 1.0)?;
        }
        if self
            .citation_steps
            .windows(2)
            .any(|pair| pair[1].min_citations <= pair[0].min_citations)
        {
            return Err("citation_steps must have strictly increasing thresholds".to_string());
        }
        check_range("author_bonus", self.author_bonus, 0.0, 1.0)?;

        self.calibration.validate()
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), String> {
    if !value.is_finite() || value < min || value > max {
        return Err(format!("{} must be in [{}, {}], got {}", name, min, max, value));
    }
    Ok(())
}
