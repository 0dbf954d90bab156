//! The relevance engine: scores and ranks paper records against a profile.
//!
//! [`RelevanceEngine`] owns the shared taxonomy and score calculator. Each
//! call resolves the profile against the taxonomy once, then scores every
//! paper with the same resolution, so a batch of N papers always yields N
//! results. Nothing in here performs I/O; the engine is `Send + Sync` and
//! cheap to clone for use across threads.

use crate::config::EconveryConfig;
use crate::models::{MatchResult, PaperRecord, RelevanceLevel, ScoredPaper, UserProfile};
use crate::ranking::{Ranker, RankingConfig, RankingSummary};
use crate::scoring::{
    ComponentScorer, ComponentScores, ResolvedProfile, ScoreBreakdown, ScoreCalculator,
    ScoringConfig,
};
use crate::taxonomy::TaxonomyStore;
use crate::{EconveryError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Field scores at or above this are described as a strong match.
const STRONG_FIELD_SCORE: f64 = 0.5;

/// Scores, explains and ranks papers for a researcher profile.
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    taxonomy: Arc<TaxonomyStore>,
    calculator: Arc<ScoreCalculator>,
    ranker: Ranker,
    prepare_records: bool,
}

impl RelevanceEngine {
    /// Create an engine over `taxonomy` with the given scoring configuration.
    pub fn new(taxonomy: Arc<TaxonomyStore>, scoring: ScoringConfig) -> Result<Self> {
        let calculator = ScoreCalculator::try_new(scoring).map_err(EconveryError::Scoring)?;
        Ok(Self {
            taxonomy,
            calculator: Arc::new(calculator),
            ranker: Ranker::default(),
            prepare_records: true,
        })
    }

    /// Built-in taxonomy, default scoring and default ranking.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(TaxonomyStore::builtin()?), ScoringConfig::default())
    }

    /// Build an engine from a loaded configuration.
    ///
    /// Loads the taxonomy file when one is configured.
    pub fn from_config(config: &EconveryConfig) -> Result<Self> {
        config.ranking.validate().map_err(EconveryError::Configuration)?;

        let taxonomy = match &config.taxonomy.path {
            Some(path) => TaxonomyStore::from_file(path)?,
            None => TaxonomyStore::builtin()?,
        };
        info!(
            version = taxonomy.version(),
            source = ?config.taxonomy.path,
            "Loaded taxonomy"
        );

        Ok(Self::new(Arc::new(taxonomy), config.scoring.clone())?
            .with_ranking(config.ranking.clone())
            .with_record_preparation(config.taxonomy.prepare_records))
    }

    /// Replace the ranking options used by [`rank`](Self::rank).
    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranker = Ranker::new(ranking);
        self
    }

    /// Enable or disable [`PaperRecord::prepare`] on incoming records.
    pub fn with_record_preparation(mut self, enabled: bool) -> Self {
        self.prepare_records = enabled;
        self
    }

    pub fn taxonomy(&self) -> &Arc<TaxonomyStore> {
        &self.taxonomy
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        self.calculator.config()
    }

    pub fn ranking_config(&self) -> &RankingConfig {
        self.ranker.config()
    }

    /// Normalize a raw record, or return it unchanged when preparation is off.
    pub fn prepare(&self, paper: PaperRecord) -> PaperRecord {
        if self.prepare_records {
            paper.prepare(self.taxonomy.journals())
        } else {
            paper
        }
    }

    /// Score a single paper.
    pub fn score(&self, profile: &UserProfile, paper: &PaperRecord) -> MatchResult {
        let resolved = self.resolve(profile);
        if self.prepare_records {
            let prepared = self.prepare(paper.clone());
            self.score_resolved(&resolved, &prepared)
        } else {
            self.score_resolved(&resolved, paper)
        }
    }

    /// Score every paper, preserving input order.
    pub fn score_batch(&self, profile: &UserProfile, papers: Vec<PaperRecord>) -> Vec<ScoredPaper> {
        let resolved = self.resolve(profile);
        papers
            .into_iter()
            .map(|paper| {
                let paper = self.prepare(paper);
                let result = self.score_resolved(&resolved, &paper);
                ScoredPaper::new(paper, result)
            })
            .collect()
    }

    /// Score, sort, filter and truncate papers per the ranking options.
    ///
    /// With the default options this returns every paper, ordered by
    /// relevance, then citations, then input order.
    pub fn rank(&self, profile: &UserProfile, papers: Vec<PaperRecord>) -> Vec<ScoredPaper> {
        let total = papers.len();
        let ranked = self.ranker.rank(self.score_batch(profile, papers));

        info!(
            papers = total,
            returned = ranked.len(),
            essential = ranked
                .iter()
                .filter(|paper| paper.level() == RelevanceLevel::Essential)
                .count(),
            top_score = ranked.first().map(ScoredPaper::score),
            "Ranked papers"
        );
        ranked
    }

    /// Summary statistics for a ranked list.
    pub fn summary(&self, papers: &[ScoredPaper]) -> RankingSummary {
        RankingSummary::from_papers(papers)
    }

    fn resolve<'t>(&'t self, profile: &UserProfile) -> ResolvedProfile<'t> {
        let resolved = ResolvedProfile::resolve(&self.taxonomy, profile);
        for (category, label) in resolved.unresolved() {
            warn!(
                %category,
                label,
                taxonomy_version = self.taxonomy.version(),
                "Unknown profile label contributes nothing to scores"
            );
        }
        resolved
    }

    fn score_resolved(&self, resolved: &ResolvedProfile<'_>, paper: &PaperRecord) -> MatchResult {
        let components = ComponentScorer::new(self.calculator.config()).score(resolved, paper);
        let has_content = !paper.has_no_content();
        let breakdown = if has_content {
            self.calculator
                .combine(&components, paper.journal_tier, paper.cited_by_count)
        } else {
            ScoreBreakdown::floor()
        };

        debug!(
            paper = paper.label(),
            score = breakdown.relevance_score,
            field = components.field_score,
            interest = components.interest_score,
            method = components.method_score,
            region = components.region_score,
            bonus = breakdown.bonus,
            "Scored paper"
        );

        let explanation = if has_content {
            explain(resolved, &components, paper)
        } else {
            "No abstract or concepts to score".to_string()
        };

        MatchResult {
            relevance_score: breakdown.relevance_score,
            relevance_level: RelevanceLevel::from_score(breakdown.relevance_score),
            field_score: components.field_score,
            interest_score: components.interest_score,
            method_score: components.method_score,
            region_score: components.region_score,
            concept_score: components.concept_score,
            raw_score: breakdown.raw,
            quality_bonus: breakdown.bonus,
            author_match: components.author_match,
            matched_interests: components.matched_interests,
            matched_methods: components.matched_methods,
            explanation,
        }
    }
}

/// One-line rationale: topical matches first, then quality signals.
fn explain(
    resolved: &ResolvedProfile<'_>,
    components: &ComponentScores,
    paper: &PaperRecord,
) -> String {
    let mut parts = Vec::new();

    if components.field_score >= STRONG_FIELD_SCORE {
        parts.push(format!("Strong {} match", resolved.field.label));
    } else if components.field_score > 0.0 {
        parts.push(format!("Partial {} match", resolved.field.label));
    }
    if !components.matched_interests.is_empty() {
        parts.push(format!(
            "interests: {}",
            components.matched_interests.join(", ")
        ));
    }
    if !components.matched_methods.is_empty() {
        parts.push(format!("methods: {}", components.matched_methods.join(", ")));
    }
    if components.region_score > 0.0 {
        parts.push(format!("region: {}", resolved.region.label));
    }
    if parts.is_empty() {
        parts.push("No overlap with profile".to_string());
    }

    if paper.journal_tier.is_ranked() {
        parts.push(format!("{} journal", paper.journal_tier));
    }
    match paper.cited_by_count {
        0 => {}
        1 => parts.push("1 citation".to_string()),
        n => parts.push(format!("{} citations", n)),
    }
    if components.author_match {
        parts.push("by a followed author".to_string());
    }

    parts.join("; ")
}
