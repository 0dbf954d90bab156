//! Keyword-cluster matching against normalized paper text.

use crate::taxonomy::KeywordCluster;
use crate::text::{NormalizedText, normalize_phrase};
use std::collections::HashSet;

/// Outcome of matching one cluster against one text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterMatch {
    /// Number of distinct cluster terms found
    pub hit_count: usize,

    /// Bounded score in [0, cluster weight]
    pub score: f64,

    /// Normalized matched terms, in cluster declaration order
    pub matched_terms: Vec<String>,
}

impl ClusterMatch {
    pub fn is_hit(&self) -> bool {
        self.hit_count > 0
    }
}

/// Counts distinct term hits and maps them to a score with diminishing returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordMatcher {
    hit_multipliers: [f64; 3],
}

impl KeywordMatcher {
    /// `hit_multipliers` apply to one, two, and three or more distinct hits.
    pub fn new(hit_multipliers: [f64; 3]) -> Self {
        Self { hit_multipliers }
    }

    /// Match every distinct term of `cluster` against `text`.
    ///
    /// Multi-word terms are checked as phrases against the un-split text;
    /// single-word terms against the token set, so a term that tokenization
    /// would drop can never match on its own.
    pub fn match_cluster(&self, text: &NormalizedText, cluster: &KeywordCluster) -> ClusterMatch {
        if text.is_empty() {
            return ClusterMatch::default();
        }

        let mut seen = HashSet::new();
        let mut matched_terms = Vec::new();

        for term in cluster.terms() {
            let normalized = normalize_phrase(term);
            if normalized.is_empty() || !seen.insert(normalized.clone()) {
                continue;
            }

            let hit = if normalized.contains(' ') {
                text.contains_phrase(&normalized)
            } else {
                text.has_token(&normalized)
            };
            if hit {
                matched_terms.push(normalized);
            }
        }

        let hit_count = matched_terms.len();
        let score = self.multiplier(hit_count) * cluster.weight;

        tracing::trace!(
            cluster = %cluster.label,
            hits = hit_count,
            score,
            "Keyword cluster matched"
        );

        ClusterMatch {
            hit_count,
            score,
            matched_terms,
        }
    }

    fn multiplier(&self, hit_count: usize) -> f64 {
        match hit_count {
            0 => 0.0,
            1 => self.hit_multipliers[0],
            2 => self.hit_multipliers[1],
            _ => self.hit_multipliers[2],
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new([0.6, 0.8, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(weight: f64) -> KeywordCluster {
        KeywordCluster {
            label: "Difference-in-Differences".to_string(),
            canonical: "difference-in-differences".to_string(),
            synonyms: vec![
                "parallel trends".to_string(),
                "event study".to_string(),
                "Parallel-Trends".to_string(),
                "diff".to_string(),
            ],
            weight,
            concepts: vec![],
            aliases: vec![],
        }
    }

    #[test]
    fn test_no_hits() {
        let text = NormalizedText::new("Coral reefs in the Pacific.");
        let m = KeywordMatcher::default().match_cluster(&text, &cluster(1.0));
        assert_eq!(m, ClusterMatch::default());
        assert!(!m.is_hit());
    }

    #[test]
    fn test_diminishing_returns() {
        let matcher = KeywordMatcher::default();

        let one = NormalizedText::new("A difference-in-differences design.");
        assert_eq!(matcher.match_cluster(&one, &cluster(1.0)).score, 0.6);

        let two = NormalizedText::new("Difference in differences with parallel trends.");
        assert_eq!(matcher.match_cluster(&two, &cluster(1.0)).score, 0.8);

        let three =
            NormalizedText::new("Difference-in-differences, parallel trends and an event study.");
        let m = matcher.match_cluster(&three, &cluster(0.5));
        assert_eq!(m.hit_count, 3);
        assert_eq!(m.score, 0.5);
        assert_eq!(
            m.matched_terms,
            vec!["difference in differences", "parallel trends", "event study"]
        );
    }

    #[test]
    fn test_duplicate_terms_count_once() {
        let text = NormalizedText::new("We test parallel trends. Parallel trends hold.");
        let m = KeywordMatcher::default().match_cluster(&text, &cluster(1.0));
        assert_eq!(m.hit_count, 1);
    }

    #[test]
    fn test_single_word_terms_match_tokens_only() {
        let text = NormalizedText::new("The differential effect");
        let m = KeywordMatcher::default().match_cluster(&text, &cluster(1.0));
        assert_eq!(m.hit_count, 0);

        let text = NormalizedText::new("A diff estimate");
        let m = KeywordMatcher::default().match_cluster(&text, &cluster(1.0));
        assert_eq!(m.matched_terms, vec!["diff"]);
    }

    #[test]
    fn test_empty_text() {
        let m = KeywordMatcher::default().match_cluster(&NormalizedText::new(""), &cluster(1.0));
        assert_eq!(m.score, 0.0);
    }
}
