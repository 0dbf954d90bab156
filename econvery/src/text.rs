//! Text normalization for keyword and concept matching.
//!
//! Paper text and taxonomy terms go through the same character mapping so that
//! phrase containment and single-token lookups agree with each other:
//!
//! - everything is lowercased
//! - hyphens, en/em dashes and every other non-alphanumeric character become spaces
//! - runs of whitespace collapse to a single space
//!
//! Tokenization additionally drops tokens of two characters or fewer and a fixed
//! set of stopwords. Phrase normalization does not, because multi-word terms such
//! as "difference in differences" need their function words intact.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new(r"[^\p{L}\p{N}]+").expect("static regex is valid");

    static ref STOPWORDS: HashSet<&'static str> = [
        // articles, conjunctions, prepositions
        "the", "and", "for", "but", "nor", "yet", "from", "into", "onto", "with", "within",
        "without", "about", "above", "below", "between", "among", "through", "during",
        "over", "under", "upon", "than", "then", "via", "per",
        // pronouns and determiners
        "this", "that", "these", "those", "their", "there", "they", "them", "its", "our",
        "ours", "his", "her", "hers", "which", "who", "whom", "whose", "what", "each",
        "both", "such", "any", "all", "some", "other", "more", "most", "many", "much",
        // auxiliary verbs
        "are", "was", "were", "been", "being", "has", "have", "had", "having", "does",
        "did", "doing", "can", "could", "may", "might", "must", "shall", "should", "will",
        "would",
        // generic academic filler
        "paper", "papers", "study", "studies", "result", "results", "article", "also",
        "show", "shows", "shown", "find", "finds", "found", "use", "uses", "used", "using",
        "based", "new", "however", "while", "whether", "further", "here", "well",
    ]
    .into_iter()
    .collect();
}

/// Minimum token length kept by [`normalize`].
pub const MIN_TOKEN_LEN: usize = 3;

/// Normalize free text into matching tokens.
///
/// Lowercases, maps punctuation (including hyphens and dashes) to spaces,
/// splits on whitespace and drops short tokens and stopwords. Always returns a
/// (possibly empty) sequence.
pub fn normalize(text: &str) -> Vec<String> {
    tokenize_normalized(&normalize_phrase(text))
}

/// Apply the character mapping without tokenizing or removing stopwords.
///
/// Used for the un-split paper text and for taxonomy terms and concept names.
pub fn normalize_phrase(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a token is on the stopword list.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

fn tokenize_normalized(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// A piece of text prepared once for repeated cluster lookups.
///
/// Holds the normalized un-split text for phrase containment and the token
/// set for single-word matching.
#[derive(Debug, Clone, Default)]
pub struct NormalizedText {
    text: String,
    tokens: HashSet<String>,
}

impl NormalizedText {
    /// Normalize `raw` for matching.
    pub fn new(raw: &str) -> Self {
        let text = normalize_phrase(raw);
        let tokens = tokenize_normalized(&text).into_iter().collect();
        Self { text, tokens }
    }

    /// The normalized, un-split text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the text contains no matchable content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether a normalized single-word term appears as a token.
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Whether a normalized phrase appears anywhere in the text.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        !phrase.is_empty() && self.text.contains(phrase)
    }

    /// Number of distinct tokens kept after stopword removal.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_hyphenated_terms() {
        let tokens = normalize("A Difference-in-Differences Approach");
        assert_eq!(tokens, vec!["difference", "differences", "approach"]);
    }

    #[test]
    fn test_normalize_drops_stopwords_and_short_tokens() {
        let tokens = normalize("This paper shows the effect of AI on wages");
        assert_eq!(tokens, vec!["effect", "wages"]);
    }

    #[test]
    fn test_normalize_handles_dashes_and_punctuation() {
        assert_eq!(normalize_phrase("Trade—and–Globalization!"), "trade and globalization");
        assert_eq!(normalize_phrase("  Global/Comparative  "), "global comparative");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  ,;-- ").is_empty());
        assert!(NormalizedText::new("").is_empty());
    }

    #[test]
    fn test_phrase_containment_survives_hyphen_split() {
        let text = NormalizedText::new("We estimate a difference-in-differences model.");
        assert!(text.contains_phrase("difference in differences"));
        assert!(text.has_token("differences"));
        assert!(!text.has_token("in"));
    }

    #[test]
    fn test_empty_phrase_never_matches() {
        let text = NormalizedText::new("anything at all");
        assert!(!text.contains_phrase(""));
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        let text = NormalizedText::new("Économie du développement");
        assert!(text.has_token("économie"));
        assert!(text.has_token("développement"));
    }
}
