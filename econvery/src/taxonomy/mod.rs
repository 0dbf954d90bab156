//! Taxonomy store for profile labels.
//!
//! Every user-selectable primary field, research interest, method and regional
//! focus maps to one weighted [`KeywordCluster`]. The store is built once (from
//! the built-in data or a versioned taxonomy file), validated, and then shared
//! read-only between any number of scoring calls.
//!
//! Labels are looked up by their normalized form, so `"Global/Comparative"`,
//! `"global comparative"` and any configured alias resolve to the same cluster.
//! Unknown labels resolve to `None`; callers treat that as a zero-weight
//! contribution rather than an error.

mod builtin;
pub mod journals;

pub use journals::{Discipline, Journal, JournalRegistry};

use crate::text::normalize_phrase;
use crate::{EconveryError, Result};
use figment::{
    Figment,
    providers::{Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// The four label categories a profile draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyCategory {
    /// Primary research field
    Field,
    /// Secondary research interest
    Interest,
    /// Preferred methodology
    Method,
    /// Regional focus
    Region,
}

impl TaxonomyCategory {
    /// All categories in profile order.
    pub const ALL: [TaxonomyCategory; 4] = [
        TaxonomyCategory::Field,
        TaxonomyCategory::Interest,
        TaxonomyCategory::Method,
        TaxonomyCategory::Region,
    ];
}

impl fmt::Display for TaxonomyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Interest => write!(f, "interest"),
            Self::Method => write!(f, "method"),
            Self::Region => write!(f, "region"),
        }
    }
}

/// A weighted set of equivalent terms for one taxonomy label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordCluster {
    /// User-facing label, e.g. "Instrumental Variables"
    pub label: String,

    /// Canonical matching term
    pub canonical: String,

    /// Synonyms and closely related terms
    #[serde(default)]
    pub synonyms: Vec<String>,

    /// Diagnosticity of the cluster in (0, 1]
    pub weight: f64,

    /// Upstream classifier concept names for the same topic.
    ///
    /// When empty, the canonical term is used as the only concept target.
    #[serde(default)]
    pub concepts: Vec<String>,

    /// Alternative labels that resolve to this cluster
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl KeywordCluster {
    /// Canonical term followed by synonyms, in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }

    /// Concept names this cluster is identified by upstream.
    pub fn concept_targets(&self) -> Vec<&str> {
        if self.concepts.is_empty() {
            vec![self.canonical.as_str()]
        } else {
            self.concepts.iter().map(String::as_str).collect()
        }
    }

    fn validate(&self, category: TaxonomyCategory) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(EconveryError::Taxonomy(format!(
                "{} cluster has an empty label",
                category
            )));
        }
        if normalize_phrase(&self.canonical).is_empty() {
            return Err(EconveryError::Taxonomy(format!(
                "{} cluster '{}' has an empty canonical term",
                category, self.label
            )));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 || self.weight > 1.0 {
            return Err(EconveryError::Taxonomy(format!(
                "{} cluster '{}' has weight {} outside (0, 1]",
                category, self.label, self.weight
            )));
        }
        Ok(())
    }
}

/// Serializable taxonomy contents.
///
/// This is the versionable data behind a [`TaxonomyStore`]; recalibrating the
/// keyword lists means shipping a new one of these, not touching the matchers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxonomyData {
    /// Version tag of the taxonomy contents
    pub version: String,

    /// Career stages offered to users (informational)
    #[serde(default)]
    pub academic_levels: Vec<String>,

    /// Primary field clusters
    pub fields: Vec<KeywordCluster>,

    /// Research interest clusters
    pub interests: Vec<KeywordCluster>,

    /// Method clusters
    pub methods: Vec<KeywordCluster>,

    /// Regional focus clusters
    pub regions: Vec<KeywordCluster>,

    /// Suggested seed authors per primary field label
    #[serde(default)]
    pub seed_authors: BTreeMap<String, Vec<String>>,

    /// Journals with known quality tiers
    #[serde(default)]
    pub journals: Vec<Journal>,
}

impl TaxonomyData {
    /// The taxonomy compiled into the crate.
    pub fn builtin() -> Self {
        builtin::taxonomy_data()
    }

    fn clusters(&self, category: TaxonomyCategory) -> &[KeywordCluster] {
        match category {
            TaxonomyCategory::Field => &self.fields,
            TaxonomyCategory::Interest => &self.interests,
            TaxonomyCategory::Method => &self.methods,
            TaxonomyCategory::Region => &self.regions,
        }
    }
}

/// All options a profile can be built from, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileOptions {
    pub academic_levels: Vec<String>,
    pub primary_fields: Vec<String>,
    pub interests: Vec<String>,
    pub methods: Vec<String>,
    pub regions: Vec<String>,
    pub seed_author_suggestions: BTreeMap<String, Vec<String>>,
}

/// Immutable, validated taxonomy with label lookup.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    data: TaxonomyData,
    index: HashMap<(TaxonomyCategory, String), usize>,
    journals: JournalRegistry,
    options: ProfileOptions,
}

impl TaxonomyStore {
    /// Validate `data` and build the lookup index.
    pub fn new(data: TaxonomyData) -> Result<Self> {
        let mut index = HashMap::new();

        for category in TaxonomyCategory::ALL {
            let clusters = data.clusters(category);
            if clusters.is_empty() {
                return Err(EconveryError::Taxonomy(format!(
                    "taxonomy has no {} clusters",
                    category
                )));
            }

            for (position, cluster) in clusters.iter().enumerate() {
                cluster.validate(category)?;

                let keys = std::iter::once(&cluster.label).chain(cluster.aliases.iter());
                for key in keys {
                    let normalized = normalize_phrase(key);
                    if normalized.is_empty() {
                        continue;
                    }
                    if index.insert((category, normalized), position).is_some() {
                        return Err(EconveryError::Taxonomy(format!(
                            "duplicate {} label or alias '{}'",
                            category, key
                        )));
                    }
                }
            }
        }

        let journals = JournalRegistry::new(data.journals.clone());
        let options = ProfileOptions {
            academic_levels: data.academic_levels.clone(),
            primary_fields: labels_of(&data.fields),
            interests: labels_of(&data.interests),
            methods: labels_of(&data.methods),
            regions: labels_of(&data.regions),
            seed_author_suggestions: data.seed_authors.clone(),
        };

        tracing::debug!(
            version = %data.version,
            fields = data.fields.len(),
            interests = data.interests.len(),
            methods = data.methods.len(),
            regions = data.regions.len(),
            journals = data.journals.len(),
            "Taxonomy store built"
        );

        Ok(Self {
            data,
            index,
            journals,
            options,
        })
    }

    /// Build the store from the built-in taxonomy.
    pub fn builtin() -> Result<Self> {
        Self::new(TaxonomyData::builtin())
    }

    /// Load and validate a taxonomy file (TOML, YAML or JSON).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EconveryError::Taxonomy(format!(
                "Taxonomy file not found: {}",
                path.display()
            )));
        }

        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Figment::new().merge(Toml::file(path)),
            Some("yaml") | Some("yml") => Figment::new().merge(Yaml::file(path)),
            Some("json") => Figment::new().merge(Json::file(path)),
            _ => {
                return Err(EconveryError::Taxonomy(format!(
                    "Unsupported taxonomy file format: {}",
                    path.display()
                )));
            }
        };

        let data: TaxonomyData = figment
            .extract()
            .map_err(|e| EconveryError::Taxonomy(e.to_string()))?;

        tracing::info!(path = %path.display(), version = %data.version, "Loaded taxonomy file");
        Self::new(data)
    }

    /// Version tag of the loaded taxonomy.
    pub fn version(&self) -> &str {
        &self.data.version
    }

    /// Resolve a label (or alias) to its cluster.
    pub fn lookup(&self, category: TaxonomyCategory, label: &str) -> Option<&KeywordCluster> {
        let key = normalize_phrase(label);
        self.index
            .get(&(category, key))
            .and_then(|&position| self.data.clusters(category).get(position))
    }

    /// All clusters in a category, in declaration order.
    pub fn clusters(&self, category: TaxonomyCategory) -> &[KeywordCluster] {
        self.data.clusters(category)
    }

    /// Everything a profile can be built from.
    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Suggested seed authors for a primary field, empty when none are known.
    pub fn suggested_authors(&self, field: &str) -> &[String] {
        let wanted = normalize_phrase(field);
        self.data
            .seed_authors
            .iter()
            .find(|(label, _)| normalize_phrase(label) == wanted)
            .map(|(_, authors)| authors.as_slice())
            .unwrap_or(&[])
    }

    /// Known journals and their quality tiers.
    pub fn journals(&self) -> &JournalRegistry {
        &self.journals
    }

    /// The underlying data, e.g. for exporting a taxonomy file.
    pub fn data(&self) -> &TaxonomyData {
        &self.data
    }
}

fn labels_of(clusters: &[KeywordCluster]) -> Vec<String> {
    clusters.iter().map(|cluster| cluster.label.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{MIN_TOKEN_LEN, is_stopword};

    fn store() -> TaxonomyStore {
        TaxonomyStore::builtin().unwrap()
    }

    #[test]
    fn test_builtin_taxonomy_is_valid() {
        let store = store();
        assert_eq!(store.clusters(TaxonomyCategory::Field).len(), 23);
        assert_eq!(store.clusters(TaxonomyCategory::Interest).len(), 27);
        assert_eq!(store.clusters(TaxonomyCategory::Method).len(), 17);
        assert_eq!(store.clusters(TaxonomyCategory::Region).len(), 13);
    }

    #[test]
    fn test_builtin_single_word_terms_are_matchable() {
        let store = store();
        for category in TaxonomyCategory::ALL {
            for cluster in store.clusters(category) {
                for term in cluster.terms() {
                    let normalized = normalize_phrase(term);
                    if normalized.contains(' ') {
                        continue;
                    }
                    assert!(
                        normalized.chars().count() >= MIN_TOKEN_LEN && !is_stopword(&normalized),
                        "term '{}' in {} '{}' can never match",
                        term,
                        category,
                        cluster.label
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_normalized_and_alias_aware() {
        let store = store();
        let global = store
            .lookup(TaxonomyCategory::Region, "Global/Comparative")
            .unwrap();
        assert_eq!(
            store.lookup(TaxonomyCategory::Region, "global comparative"),
            Some(global)
        );
        assert_eq!(store.lookup(TaxonomyCategory::Region, "Global"), Some(global));
        assert_eq!(
            store
                .lookup(TaxonomyCategory::Method, "did")
                .map(|c| c.label.as_str()),
            Some("Difference-in-Differences")
        );
    }

    #[test]
    fn test_lookup_respects_category() {
        let store = store();
        assert!(store.lookup(TaxonomyCategory::Field, "Labor Economics").is_some());
        assert!(store.lookup(TaxonomyCategory::Method, "Labor Economics").is_none());
        assert!(store.lookup(TaxonomyCategory::Interest, "Astrology").is_none());
    }

    #[test]
    fn test_duplicate_labels_are_rejected() {
        let mut data = TaxonomyData::builtin();
        let duplicate = data.methods[0].clone();
        data.methods.push(duplicate);
        assert!(matches!(
            TaxonomyStore::new(data),
            Err(EconveryError::Taxonomy(_))
        ));
    }

    #[test]
    fn test_invalid_weight_is_rejected() {
        let mut data = TaxonomyData::builtin();
        data.fields[0].weight = 1.5;
        assert!(TaxonomyStore::new(data).is_err());

        let mut data = TaxonomyData::builtin();
        data.regions[0].weight = 0.0;
        assert!(TaxonomyStore::new(data).is_err());
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let mut data = TaxonomyData::builtin();
        data.regions.clear();
        assert!(TaxonomyStore::new(data).is_err());
    }

    #[test]
    fn test_options_follow_declaration_order() {
        let store = store();
        let options = store.options();
        assert_eq!(options.primary_fields[0], "Microeconomics");
        assert_eq!(options.interests[0], "Causal Inference");
        assert_eq!(options.methods[0], "Difference-in-Differences");
        assert_eq!(options.regions[0], "Global/Comparative");
        assert_eq!(options.academic_levels.len(), 12);
    }

    #[test]
    fn test_suggested_authors() {
        let store = store();
        assert!(
            store
                .suggested_authors("labor economics")
                .contains(&"David Card".to_string())
        );
        assert!(store.suggested_authors("Econometrics").is_empty());
    }

    #[test]
    fn test_concept_targets_fall_back_to_canonical() {
        let cluster = KeywordCluster {
            label: "Test".to_string(),
            canonical: "test term".to_string(),
            synonyms: vec![],
            weight: 1.0,
            concepts: vec![],
            aliases: vec![],
        };
        assert_eq!(cluster.concept_targets(), vec!["test term"]);
    }
}
