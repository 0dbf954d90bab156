//! Paper records as supplied by the upstream scholarly-metadata source.
//!
//! Records are read-only to the engine. Deserialization is lenient: every field
//! has an empty default and an explicit `null` is treated like a missing field,
//! so one malformed record never sinks a batch.

use crate::taxonomy::JournalRegistry;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of upstream concepts kept by [`PaperRecord::prepare`].
pub const MAX_CONCEPTS: usize = 8;

/// Concepts at or below this confidence are dropped by [`PaperRecord::prepare`].
pub const MIN_CONCEPT_CONFIDENCE: f64 = 0.2;

const OPENALEX_ID_PREFIX: &str = "https://openalex.org/";

/// Journal quality tier, 1 being best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum JournalTier {
    /// Tier 1: the top field journals
    Top = 1,
    /// Tier 2: excellent field journals
    Excellent = 2,
    /// Tier 3: very good field journals
    VeryGood = 3,
    /// Tier 4: unranked or unknown
    #[default]
    Unranked = 4,
}

impl JournalTier {
    /// Numeric tier in 1..=4.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-tier tables.
    pub fn index(self) -> usize {
        self.rank() as usize - 1
    }

    /// Whether the journal is on the ranked list.
    pub fn is_ranked(self) -> bool {
        self != Self::Unranked
    }
}

impl From<i64> for JournalTier {
    /// Out-of-range values map to [`JournalTier::Unranked`].
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Top,
            2 => Self::Excellent,
            3 => Self::VeryGood,
            _ => Self::Unranked,
        }
    }
}

impl From<JournalTier> for u8 {
    fn from(tier: JournalTier) -> Self {
        tier.rank()
    }
}

impl fmt::Display for JournalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "tier 1"),
            Self::Excellent => write!(f, "tier 2"),
            Self::VeryGood => write!(f, "tier 3"),
            Self::Unranked => write!(f, "unranked"),
        }
    }
}

/// A topic label attached to a paper by an upstream classifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Concept {
    /// Concept display name
    #[serde(default, alias = "display_name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Classifier confidence in [0, 1]
    #[serde(default, alias = "score", deserialize_with = "null_as_default")]
    pub confidence: f64,
}

impl Concept {
    pub fn new<S: Into<String>>(name: S, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    /// Confidence clamped to [0, 1]; non-finite values count as 0.
    pub fn clamped_confidence(&self) -> f64 {
        if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// One candidate paper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Upstream identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// DOI, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Abstract text; may be empty
    #[serde(rename = "abstract", default, deserialize_with = "null_as_default")]
    pub abstract_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub concepts: Vec<Concept>,

    /// Journal display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    #[serde(default, alias = "journalTier", deserialize_with = "null_as_default")]
    pub journal_tier: JournalTier,

    #[serde(default, alias = "citedByCount", deserialize_with = "null_as_default")]
    pub cited_by_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,

    /// Publication date as reported upstream (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Upstream word → positions encoding of the abstract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_inverted_index: Option<BTreeMap<String, Vec<usize>>>,
}

impl PaperRecord {
    /// Create a record with a title and abstract; everything else empty.
    pub fn new<T: Into<String>, A: Into<String>>(title: T, abstract_text: A) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            ..Self::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_concept<S: Into<String>>(mut self, name: S, confidence: f64) -> Self {
        self.concepts.push(Concept::new(name, confidence));
        self
    }

    pub fn with_journal<S: Into<String>>(mut self, journal: S) -> Self {
        self.journal = Some(journal.into());
        self
    }

    pub fn with_tier(mut self, tier: JournalTier) -> Self {
        self.journal_tier = tier;
        self
    }

    pub fn with_citations(mut self, cited_by_count: u64) -> Self {
        self.cited_by_count = cited_by_count;
        self
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Whether the record has neither abstract text nor concepts.
    pub fn has_no_content(&self) -> bool {
        self.abstract_text.trim().is_empty() && self.concepts.is_empty()
    }

    /// Short label for logs: the id when present, otherwise the title.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.title)
    }

    /// Normalize a raw upstream record before scoring.
    ///
    /// - strips the upstream URL prefix from the id
    /// - rebuilds a missing abstract from the inverted index
    /// - keeps the first [`MAX_CONCEPTS`] concepts, but only for a raw
    ///   upstream record (one that still carries an inverted index)
    /// - drops concepts with confidence at or below [`MIN_CONCEPT_CONFIDENCE`]
    /// - fills an unranked tier from the journal name
    ///
    /// Records without an inverted index are assumed to be truncated already,
    /// so adding a concept never displaces another one.
    pub fn prepare(mut self, journals: &JournalRegistry) -> Self {
        if let Some(id) = self.id.as_mut() {
            if let Some(stripped) = id.strip_prefix(OPENALEX_ID_PREFIX) {
                *id = stripped.to_string();
            }
        }

        let raw_upstream = self.abstract_inverted_index.is_some();
        if self.abstract_text.trim().is_empty() {
            if let Some(index) = self.abstract_inverted_index.take() {
                self.abstract_text = reconstruct_abstract(&index);
            }
        }

        if raw_upstream {
            self.concepts.truncate(MAX_CONCEPTS);
        }
        self.concepts
            .retain(|concept| concept.clamped_confidence() > MIN_CONCEPT_CONFIDENCE);

        if !self.journal_tier.is_ranked() {
            if let Some(journal) = self.journal.as_deref() {
                self.journal_tier = journals.tier_for(journal);
            }
        }

        self
    }
}

/// Rebuild abstract text from a word → positions index.
///
/// Words are emitted in position order; ties keep the index's key order.
pub fn reconstruct_abstract(index: &BTreeMap<String, Vec<usize>>) -> String {
    let mut positioned: Vec<(usize, &str)> = index
        .iter()
        .flat_map(|(word, positions)| positions.iter().map(move |&pos| (pos, word.as_str())))
        .collect();
    positioned.sort_by_key(|&(pos, _)| pos);
    positioned
        .into_iter()
        .map(|(_, word)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
