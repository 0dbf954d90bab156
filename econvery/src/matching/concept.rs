//! Matching of upstream concept tags against taxonomy concept targets.

use crate::models::Concept;
use crate::text::normalize_phrase;

/// Normalized, deduplicated concept names a profile is looking for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptTargets {
    targets: Vec<String>,
}

impl ConceptTargets {
    /// Normalize `names`, dropping empty and repeated ones.
    pub fn new<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut targets: Vec<String> = Vec::new();
        for name in names {
            let normalized = normalize_phrase(name);
            if !normalized.is_empty() && !targets.contains(&normalized) {
                targets.push(normalized);
            }
        }
        Self { targets }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether a normalized concept name and any target contain one another.
    ///
    /// Containment is checked on whole words, so "war" does not match
    /// "software".
    pub fn matches(&self, normalized_name: &str) -> bool {
        if normalized_name.is_empty() {
            return false;
        }
        let name = padded(normalized_name);
        self.targets.iter().any(|target| {
            let target = padded(target);
            name.contains(&target) || target.contains(&name)
        })
    }

    /// Whether any of `concepts` matches a target.
    pub fn matches_any(&self, concepts: &[Concept]) -> bool {
        concepts
            .iter()
            .any(|concept| self.matches(&normalize_phrase(&concept.name)))
    }
}

fn padded(phrase: &str) -> String {
    format!(" {} ", phrase)
}

/// Outcome of matching a paper's concepts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConceptMatch {
    /// Score in [0, 1]
    pub score: f64,

    /// Names of the paper concepts that matched, in paper order
    pub matched_names: Vec<String>,
}

/// Accumulates the confidence of matching concepts against a normalization constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConceptMatcher {
    normalization: f64,
}

impl ConceptMatcher {
    pub fn new(normalization: f64) -> Self {
        Self { normalization }
    }

    pub fn match_concepts(&self, concepts: &[Concept], targets: &ConceptTargets) -> ConceptMatch {
        if concepts.is_empty() || targets.is_empty() {
            return ConceptMatch::default();
        }

        let mut accumulated = 0.0;
        let mut matched_names = Vec::new();
        for concept in concepts {
            if targets.matches(&normalize_phrase(&concept.name)) {
                accumulated += concept.clamped_confidence();
                matched_names.push(concept.name.clone());
            }
        }

        let score = if self.normalization > 0.0 {
            (accumulated / self.normalization).min(1.0)
        } else {
            0.0
        };

        ConceptMatch {
            score,
            matched_names,
        }
    }
}

impl Default for ConceptMatcher {
    fn default() -> Self {
        Self::new(1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> ConceptTargets {
        ConceptTargets::new(["Labour economics", "Unemployment", "Causal inference", "War", ""])
    }

    #[test]
    fn test_targets_normalize_and_dedupe() {
        let targets = ConceptTargets::new(["Wage", "wage", " ", "Minimum-wage"]);
        assert_eq!(targets.len(), 2);
        assert!(targets.matches("minimum wage"));
    }

    #[test]
    fn test_containment_in_both_directions() {
        let targets = targets();
        assert!(targets.matches("unemployment"));
        assert!(targets.matches("unemployment insurance"));
        assert!(targets.matches("economics"));
        assert!(!targets.matches("software"));
        assert!(!targets.matches(""));
    }

    #[test]
    fn test_accumulated_confidence_is_normalized() {
        let matcher = ConceptMatcher::default();
        let concepts = vec![
            Concept::new("Unemployment", 0.6),
            Concept::new("Coral reef", 0.9),
        ];
        let m = matcher.match_concepts(&concepts, &targets());
        assert!((m.score - 0.5).abs() < 1e-12);
        assert_eq!(m.matched_names, vec!["Unemployment"]);

        let concepts = vec![
            Concept::new("Unemployment", 0.9),
            Concept::new("Causal inference", 0.8),
        ];
        assert_eq!(matcher.match_concepts(&concepts, &targets()).score, 1.0);
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let concepts = vec![
            Concept::new("Unemployment", f64::NAN),
            Concept::new("Causal inference", -4.0),
        ];
        let m = ConceptMatcher::default().match_concepts(&concepts, &targets());
        assert_eq!(m.score, 0.0);
        assert_eq!(m.matched_names.len(), 2);
    }

    #[test]
    fn test_no_concepts_or_targets() {
        let matcher = ConceptMatcher::default();
        assert_eq!(matcher.match_concepts(&[], &targets()).score, 0.0);
        let concepts = vec![Concept::new("Unemployment", 1.0)];
        assert_eq!(
            matcher
                .match_concepts(&concepts, &ConceptTargets::default())
                .score,
            0.0
        );
    }
}
