//! Relevance scoring: component sub-scores, combination and calibration

pub mod calculator;
pub mod calibration;
pub mod components;
pub mod config;

pub use calculator::{ScoreBreakdown, ScoreCalculator};
pub use calibration::{CalibrationCurve, CalibrationKnot, MAX_SCORE, MIN_SCORE};
pub use components::{ComponentScorer, ComponentScores, ResolvedEntry, ResolvedProfile};
pub use config::{CitationStep, ComponentWeights, PositionDecay, ScoringConfig};
