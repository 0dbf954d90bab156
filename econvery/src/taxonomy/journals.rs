//! Journal quality tiers.
//!
//! Upstream records usually carry a journal display name rather than a tier.
//! The registry maps known economics and political science journals to tiers
//! 1–3; everything else is [`JournalTier::Unranked`].

use crate::models::JournalTier;
use crate::text::normalize_phrase;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Broad discipline a journal publishes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Economics,
    Polisci,
}

/// A journal with a known quality tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub name: String,
    pub issn: String,
    pub discipline: Discipline,
    pub tier: JournalTier,
}

/// Name → tier lookup over a fixed journal list.
#[derive(Debug, Clone, Default)]
pub struct JournalRegistry {
    journals: Vec<Journal>,
    by_name: HashMap<String, usize>,
}

impl JournalRegistry {
    /// Build the registry. Later duplicates of a name are ignored.
    pub fn new(journals: Vec<Journal>) -> Self {
        let mut by_name = HashMap::with_capacity(journals.len());
        for (position, journal) in journals.iter().enumerate() {
            by_name
                .entry(normalize_phrase(&journal.name))
                .or_insert(position);
        }
        Self { journals, by_name }
    }

    /// Look up a journal by display name, ignoring case and punctuation.
    pub fn get(&self, name: &str) -> Option<&Journal> {
        self.by_name
            .get(&normalize_phrase(name))
            .and_then(|&position| self.journals.get(position))
    }

    /// Tier for a journal name; unknown journals are unranked.
    pub fn tier_for(&self, name: &str) -> JournalTier {
        self.get(name)
            .map(|journal| journal.tier)
            .unwrap_or(JournalTier::Unranked)
    }

    /// Journals of one discipline and tier, in declaration order.
    pub fn by_tier(&self, discipline: Discipline, tier: JournalTier) -> Vec<&Journal> {
        self.journals
            .iter()
            .filter(|journal| journal.discipline == discipline && journal.tier == tier)
            .collect()
    }

    /// All journals in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Journal> {
        self.journals.iter()
    }

    pub fn len(&self) -> usize {
        self.journals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journals.is_empty()
    }
}
