//! Per-component sub-scores of one paper against one profile.
//!
//! A profile is resolved against the taxonomy once per batch
//! ([`ResolvedProfile`]); the [`ComponentScorer`] then evaluates each paper
//! against the resolved clusters.

use super::config::{PositionDecay, ScoringConfig};
use crate::matching::{ConceptMatcher, ConceptTargets, KeywordMatcher};
use crate::models::{PaperRecord, UserProfile};
use crate::taxonomy::{KeywordCluster, TaxonomyCategory, TaxonomyStore};
use crate::text::{NormalizedText, normalize_phrase};

/// A profile entry together with the cluster its label resolved to.
#[derive(Debug, Clone)]
pub struct ResolvedEntry<'t> {
    pub label: String,
    pub cluster: Option<&'t KeywordCluster>,
    /// Concept targets of this entry's cluster alone
    pub concept_targets: ConceptTargets,
}

impl<'t> ResolvedEntry<'t> {
    fn resolve(store: &'t TaxonomyStore, category: TaxonomyCategory, label: &str) -> Self {
        let cluster = store.lookup(category, label);
        let concept_targets = cluster
            .map(|cluster| ConceptTargets::new(cluster.concept_targets()))
            .unwrap_or_default();
        Self {
            label: label.to_string(),
            cluster,
            concept_targets,
        }
    }
}

/// A profile with its labels resolved against a taxonomy.
#[derive(Debug, Clone)]
pub struct ResolvedProfile<'t> {
    pub field: ResolvedEntry<'t>,
    pub interests: Vec<ResolvedEntry<'t>>,
    pub methods: Vec<ResolvedEntry<'t>>,
    pub region: ResolvedEntry<'t>,
    /// Union of the field and interest concept targets
    pub concept_targets: ConceptTargets,
    /// Normalized, non-empty seed author names
    pub seed_authors: Vec<String>,
}

impl<'t> ResolvedProfile<'t> {
    pub fn resolve(store: &'t TaxonomyStore, profile: &UserProfile) -> Self {
        let field = ResolvedEntry::resolve(store, TaxonomyCategory::Field, profile.primary_field());
        let interests = resolve_distinct(store, TaxonomyCategory::Interest, profile.interests());
        let methods = resolve_distinct(store, TaxonomyCategory::Method, profile.methods());
        let region =
            ResolvedEntry::resolve(store, TaxonomyCategory::Region, profile.regional_focus());

        let concept_targets = ConceptTargets::new(
            std::iter::once(&field)
                .chain(interests.iter())
                .filter_map(|entry| entry.cluster)
                .flat_map(|cluster| cluster.concept_targets()),
        );

        let seed_authors = profile
            .seed_authors()
            .iter()
            .map(|name| normalize_phrase(name))
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            field,
            interests,
            methods,
            region,
            concept_targets,
            seed_authors,
        }
    }

    /// Labels that did not resolve, with their category.
    pub fn unresolved(&self) -> Vec<(TaxonomyCategory, &str)> {
        std::iter::once((TaxonomyCategory::Field, &self.field))
            .chain(self.interests.iter().map(|entry| (TaxonomyCategory::Interest, entry)))
            .chain(self.methods.iter().map(|entry| (TaxonomyCategory::Method, entry)))
            .chain(std::iter::once((TaxonomyCategory::Region, &self.region)))
            .filter(|(_, entry)| entry.cluster.is_none())
            .map(|(category, entry)| (category, entry.label.as_str()))
            .collect()
    }

    /// Number of distinct methods the profile declares, resolved or not.
    pub fn declared_methods(&self) -> usize {
        self.methods.len()
    }
}

/// Resolve `labels` in order, dropping any whose cluster an earlier label
/// already resolved to.
fn resolve_distinct<'t>(
    store: &'t TaxonomyStore,
    category: TaxonomyCategory,
    labels: &[String],
) -> Vec<ResolvedEntry<'t>> {
    let mut entries: Vec<ResolvedEntry<'t>> = Vec::with_capacity(labels.len());
    for label in labels {
        let entry = ResolvedEntry::resolve(store, category, label);
        let taken = entry.cluster.is_some_and(|cluster| {
            entries
                .iter()
                .filter_map(|earlier| earlier.cluster)
                .any(|earlier| std::ptr::eq(earlier, cluster))
        });
        if !taken {
            entries.push(entry);
        }
    }
    entries
}

/// Sub-scores of one paper.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentScores {
    pub field_score: f64,
    pub interest_score: f64,
    pub method_score: f64,
    pub region_score: f64,
    pub concept_score: f64,
    pub author_match: bool,
    pub matched_interests: Vec<String>,
    pub matched_methods: Vec<String>,
    pub declared_methods: usize,
    /// Normalized keyword terms that matched the field cluster
    pub field_terms: Vec<String>,
}

/// Computes [`ComponentScores`] from a resolved profile and a paper.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScorer<'c> {
    config: &'c ScoringConfig,
    keywords: KeywordMatcher,
    concepts: ConceptMatcher,
}

impl<'c> ComponentScorer<'c> {
    pub fn new(config: &'c ScoringConfig) -> Self {
        Self {
            config,
            keywords: KeywordMatcher::new(config.hit_multipliers),
            concepts: ConceptMatcher::new(config.concept_normalization),
        }
    }

    /// Build the text keyword matching runs against.
    ///
    /// An empty abstract yields an empty text: the title alone is not
    /// treated as a usable signal.
    pub fn matching_text(&self, paper: &PaperRecord) -> NormalizedText {
        if paper.abstract_text.trim().is_empty() {
            return NormalizedText::default();
        }

        let mut parts: Vec<&str> = Vec::new();
        for _ in 0..self.config.title_repetitions {
            parts.push(&paper.title);
        }
        parts.push(&paper.abstract_text);
        parts.extend(paper.concepts.iter().map(|concept| concept.name.as_str()));
        NormalizedText::new(&parts.join(" "))
    }

    pub fn score(&self, profile: &ResolvedProfile<'_>, paper: &PaperRecord) -> ComponentScores {
        let text = self.matching_text(paper);

        let field_match = profile
            .field
            .cluster
            .map(|cluster| self.keywords.match_cluster(&text, cluster))
            .unwrap_or_default();

        let region_score = profile
            .region
            .cluster
            .map(|cluster| self.keywords.match_cluster(&text, cluster).score)
            .unwrap_or(0.0);

        // Interests: keyword signal with position decay, fused with concepts.
        let mut interest_scores = Vec::with_capacity(profile.interests.len());
        let mut keyword_interest_hits = 0;
        let mut matched_interests = Vec::new();
        for (position, entry) in profile.interests.iter().enumerate() {
            let keyword = entry
                .cluster
                .map(|cluster| self.keywords.match_cluster(&text, cluster))
                .unwrap_or_default();
            interest_scores.push(keyword.score * self.config.interest_decay.factor(position));

            if keyword.is_hit() {
                keyword_interest_hits += 1;
            }
            if keyword.is_hit() || entry.concept_targets.matches_any(&paper.concepts) {
                matched_interests.push(entry.label.clone());
            }
        }
        let keyword_interest = self.breadth(
            self.aggregate(&interest_scores),
            keyword_interest_hits,
            &[
                (3, self.config.interest_breadth_bonus),
                (2, self.config.interest_pair_bonus),
            ],
        );

        let concept_score = self
            .concepts
            .match_concepts(&paper.concepts, &profile.concept_targets)
            .score;
        let interest_score = self.fuse(keyword_interest, concept_score);

        // Methods: keyword signal with position decay only.
        let (method_scores, matched_methods) =
            self.decayed_matches(&text, &profile.methods, self.config.method_decay);
        let method_score = self.breadth(
            self.aggregate(&method_scores),
            matched_methods.len(),
            &[(2, self.config.method_pair_bonus)],
        );

        let author_match = author_matches(&profile.seed_authors, &paper.authors);

        ComponentScores {
            field_score: field_match.score,
            interest_score,
            method_score,
            region_score,
            concept_score,
            author_match,
            matched_interests,
            matched_methods,
            declared_methods: profile.declared_methods(),
            field_terms: field_match.matched_terms,
        }
    }

    fn decayed_matches(
        &self,
        text: &NormalizedText,
        entries: &[ResolvedEntry<'_>],
        decay: PositionDecay,
    ) -> (Vec<f64>, Vec<String>) {
        let mut scores = Vec::with_capacity(entries.len());
        let mut matched = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            let m = entry
                .cluster
                .map(|cluster| self.keywords.match_cluster(text, cluster))
                .unwrap_or_default();
            scores.push(m.score * decay.factor(position));
            if m.is_hit() {
                matched.push(entry.label.clone());
            }
        }
        (scores, matched)
    }

    /// `peak * max + (1 - peak) * mean` over all declared entries.
    fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        let max = scores.iter().copied().fold(0.0, f64::max);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        self.config.peak_share * max + (1.0 - self.config.peak_share) * mean
    }

    /// Apply the first bonus whose match threshold is met, capped at 1.0.
    fn breadth(&self, score: f64, matches: usize, bonuses: &[(usize, f64)]) -> f64 {
        let multiplier = bonuses
            .iter()
            .find(|(threshold, _)| matches >= *threshold)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(1.0);
        (score * multiplier).min(1.0)
    }

    fn fuse(&self, keyword: f64, concept: f64) -> f64 {
        let fused = keyword.max(concept);
        if keyword > self.config.agreement_threshold && concept > self.config.agreement_threshold {
            (fused * self.config.agreement_bonus).min(1.0)
        } else {
            fused
        }
    }
}

/// Whether any normalized seed author and paper author contain one another.
fn author_matches(seed_authors: &[String], paper_authors: &[String]) -> bool {
    if seed_authors.is_empty() {
        return false;
    }
    paper_authors
        .iter()
        .map(|author| normalize_phrase(author))
        .filter(|author| !author.is_empty())
        .any(|author| {
            seed_authors
                .iter()
                .any(|seed| author.contains(seed.as_str()) || seed.contains(author.as_str()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Concept;

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    fn profile(interests: &[&str], methods: &[&str]) -> UserProfile {
        UserProfile::builder("PhD Student (Early)", "Labor Economics")
            .interests(interests.iter().copied())
            .methods(methods.iter().copied())
            .seed_author("David Card")
            .build()
            .unwrap()
    }

    fn min_wage_paper() -> PaperRecord {
        PaperRecord::new(
            "Minimum Wages and Employment: Evidence from a Difference-in-Differences Design",
            "We estimate the employment effects of a state minimum wage increase using a \
             difference-in-differences design with parallel trends and an event study. \
             The causal effect on low-wage workers' earnings is positive.",
        )
        .with_concept("Minimum wage", 0.8)
        .with_concept("Unemployment", 0.6)
        .with_author("David Card")
    }

    #[test]
    fn test_resolution_and_unresolved_labels() {
        let store = store();
        let profile = profile(&["Causal Inference", "Astrology"], &["DiD"]);
        let resolved = ResolvedProfile::resolve(&store, &profile);
        assert!(resolved.field.cluster.is_some());
        assert!(resolved.interests[0].cluster.is_some());
        assert!(resolved.interests[1].cluster.is_none());
        assert_eq!(
            resolved.unresolved(),
            vec![(TaxonomyCategory::Interest, "Astrology")]
        );
        assert_eq!(resolved.seed_authors, vec!["david card"]);
        assert!(!resolved.concept_targets.is_empty());
    }

    #[test]
    fn test_aliases_of_one_cluster_resolve_once() {
        let store = store();
        let config = ScoringConfig::default();
        let scorer = ComponentScorer::new(&config);

        let single = profile(&["Causal Inference"], &["Difference-in-Differences"]);
        let aliased = profile(&["Causal Inference"], &["Difference-in-Differences", "DiD"]);
        let single_resolved = ResolvedProfile::resolve(&store, &single);
        let aliased_resolved = ResolvedProfile::resolve(&store, &aliased);
        assert_eq!(aliased_resolved.methods.len(), 1);
        assert_eq!(aliased_resolved.methods[0].label, "Difference-in-Differences");
        assert_eq!(aliased_resolved.declared_methods(), 1);

        let paper = min_wage_paper();
        let a = scorer.score(&single_resolved, &paper);
        let b = scorer.score(&aliased_resolved, &paper);
        assert_eq!(b.matched_methods, vec!["Difference-in-Differences"]);
        assert_eq!(a.method_score, b.method_score);
    }

    #[test]
    fn test_strong_paper_components() {
        let store = store();
        let config = ScoringConfig::default();
        let profile = profile(&["Causal Inference"], &["Difference-in-Differences"]);
        let resolved = ResolvedProfile::resolve(&store, &profile);

        let scores = ComponentScorer::new(&config).score(&resolved, &min_wage_paper());
        assert_eq!(scores.field_score, 1.0);
        assert!(scores.interest_score >= 0.9);
        assert!(scores.method_score > 0.999);
        assert!(scores.author_match);
        assert_eq!(scores.matched_interests, vec!["Causal Inference"]);
        assert_eq!(scores.matched_methods, vec!["Difference-in-Differences"]);
        assert!(scores.field_terms.contains(&"minimum wage".to_string()));
    }

    #[test]
    fn test_empty_abstract_has_no_text_signal() {
        let store = store();
        let config = ScoringConfig::default();
        let profile = profile(&["Causal Inference"], &["Difference-in-Differences"]);
        let resolved = ResolvedProfile::resolve(&store, &profile);

        let paper = PaperRecord::new(
            "Minimum wages and employment: a difference-in-differences study",
            "",
        );
        let scores = ComponentScorer::new(&config).score(&resolved, &paper);
        assert_eq!(scores.field_score, 0.0);
        assert_eq!(scores.interest_score, 0.0);
        assert_eq!(scores.method_score, 0.0);
        assert_eq!(scores.region_score, 0.0);
        assert!(scores.matched_interests.is_empty());
    }

    #[test]
    fn test_interest_order_sensitivity() {
        let store = store();
        let config = ScoringConfig::default();
        let scorer = ComponentScorer::new(&config);
        let paper = PaperRecord::new(
            "Immigration and local labor markets",
            "We examine how immigrants and refugees affect native outcomes after a migration wave.",
        );

        let first = profile(&["Immigration", "Causal Inference"], &[]);
        let second = profile(&["Causal Inference", "Immigration"], &[]);
        let a = scorer.score(&ResolvedProfile::resolve(&store, &first), &paper);
        let b = scorer.score(&ResolvedProfile::resolve(&store, &second), &paper);
        assert!(a.interest_score > b.interest_score);
        assert_eq!(a.matched_interests, vec!["Immigration"]);
    }

    #[test]
    fn test_unresolved_interest_counts_as_zero_in_average() {
        let store = store();
        let config = ScoringConfig::default();
        let scorer = ComponentScorer::new(&config);
        let paper = min_wage_paper();

        let clean = profile(&["Causal Inference"], &[]);
        let noisy = profile(&["Causal Inference", "Astrology"], &[]);
        let clean_score = scorer.score(&ResolvedProfile::resolve(&store, &clean), &paper);
        let noisy_score = scorer.score(&ResolvedProfile::resolve(&store, &noisy), &paper);
        assert!(noisy_score.interest_score <= clean_score.interest_score);
    }

    #[test]
    fn test_concept_tag_matches_interest() {
        let store = store();
        let config = ScoringConfig::default();
        let resolved_profile = profile(&["Immigration"], &[]);
        let resolved = ResolvedProfile::resolve(&store, &resolved_profile);
        let mut paper = PaperRecord::new("Border policy", "We document shifts in border policy.");
        paper.concepts.push(Concept::new("Human migration", 0.9));

        let scores = ComponentScorer::new(&config).score(&resolved, &paper);
        assert_eq!(scores.matched_interests, vec!["Immigration"]);
        assert!(scores.concept_score > 0.7);
        assert!(scores.interest_score >= scores.concept_score);
    }

    #[test]
    fn test_author_matching() {
        let seeds = vec!["david card".to_string()];
        assert!(author_matches(&seeds, &["David Card".to_string()]));
        assert!(!author_matches(&seeds, &["David E. Card".to_string()]));
        assert!(author_matches(&seeds, &["Card".to_string()]));
        assert!(!author_matches(&seeds, &["".to_string()]));
        assert!(!author_matches(&[], &["David Card".to_string()]));
    }

    #[test]
    fn test_aggregate_and_breadth() {
        let config = ScoringConfig::default();
        let scorer = ComponentScorer::new(&config);
        assert_eq!(scorer.aggregate(&[]), 0.0);
        assert!((scorer.aggregate(&[1.0, 0.0]) - 0.8).abs() < 1e-12);
        assert_eq!(scorer.breadth(0.9, 3, &[(3, 1.25), (2, 1.12)]), 1.0);
        assert!((scorer.breadth(0.5, 2, &[(3, 1.25), (2, 1.12)]) - 0.56).abs() < 1e-12);
        assert_eq!(scorer.breadth(0.5, 1, &[(2, 1.15)]), 0.5);
    }

    #[test]
    fn test_fusion() {
        let config = ScoringConfig::default();
        let scorer = ComponentScorer::new(&config);
        assert_eq!(scorer.fuse(0.2, 0.6), 0.6);
        assert!((scorer.fuse(0.5, 0.4) - 0.575).abs() < 1e-12);
        assert_eq!(scorer.fuse(0.9, 0.95), 1.0);
    }
}
