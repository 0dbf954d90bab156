//! Researcher interest profiles.

use crate::text::normalize_phrase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// Maximum number of research interests in a profile.
pub const MAX_INTERESTS: usize = 5;

/// Maximum number of preferred methods in a profile.
pub const MAX_METHODS: usize = 4;

/// Regional focus used when none is given.
pub const DEFAULT_REGION: &str = "Global/Comparative";

/// Methodological lean used when none is given.
pub const DEFAULT_LEAN: f64 = 0.5;

/// Errors raised while constructing a profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Too many research interests: {count} given, at most {max} allowed")]
    TooManyInterests { count: usize, max: usize },

    #[error("Too many preferred methods: {count} given, at most {max} allowed")]
    TooManyMethods { count: usize, max: usize },

    #[error("Methodological lean must be a number in [0, 1], got {0}")]
    InvalidLean(f64),
}

/// Career stage of the researcher. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AcademicLevel {
    Undergraduate,
    MastersStudent,
    PhdStudentEarly,
    PhdStudentAbd,
    PostdoctoralFellow,
    AssistantProfessor,
    AssociateProfessor,
    FullProfessor,
    IndustryResearcher,
    PolicyAnalyst,
    ThinkTankResearcher,
    GovernmentEconomist,
    /// Any other free-text career stage
    Other(String),
}

impl AcademicLevel {
    fn from_label(s: &str) -> Self {
        match normalize_phrase(s).as_str() {
            "undergraduate" => Self::Undergraduate,
            "masters student" => Self::MastersStudent,
            "phd student early" => Self::PhdStudentEarly,
            "phd student abd" => Self::PhdStudentAbd,
            "postdoctoral fellow" => Self::PostdoctoralFellow,
            "assistant professor" => Self::AssistantProfessor,
            "associate professor" => Self::AssociateProfessor,
            "full professor" => Self::FullProfessor,
            "industry researcher" => Self::IndustryResearcher,
            "policy analyst" => Self::PolicyAnalyst,
            "think tank researcher" => Self::ThinkTankResearcher,
            "government economist" => Self::GovernmentEconomist,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::MastersStudent => "Masters Student",
            Self::PhdStudentEarly => "PhD Student (Early)",
            Self::PhdStudentAbd => "PhD Student (ABD)",
            Self::PostdoctoralFellow => "Postdoctoral Fellow",
            Self::AssistantProfessor => "Assistant Professor",
            Self::AssociateProfessor => "Associate Professor",
            Self::FullProfessor => "Full Professor",
            Self::IndustryResearcher => "Industry Researcher",
            Self::PolicyAnalyst => "Policy Analyst",
            Self::ThinkTankResearcher => "Think Tank Researcher",
            Self::GovernmentEconomist => "Government Economist",
            Self::Other(s) => s,
        }
    }
}

impl Default for AcademicLevel {
    fn default() -> Self {
        Self::PhdStudentEarly
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a display label; unknown labels become [`AcademicLevel::Other`].
impl std::str::FromStr for AcademicLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for AcademicLevel {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<&str> for AcademicLevel {
    fn from(s: &str) -> Self {
        Self::from_label(s)
    }
}

impl From<AcademicLevel> for String {
    fn from(level: AcademicLevel) -> Self {
        level.as_str().to_string()
    }
}

/// A validated researcher profile.
///
/// Interests and methods are ordered: earlier entries weigh more in scoring.
/// Labels are kept as given and resolved against the taxonomy at scoring time,
/// so a label the taxonomy does not know simply contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileDocument")]
pub struct UserProfile {
    academic_level: AcademicLevel,
    primary_field: String,
    interests: Vec<String>,
    methods: Vec<String>,
    regional_focus: String,
    seed_authors: Vec<String>,
    methodological_lean: f64,
}

impl UserProfile {
    /// Start building a profile for a career stage and primary field.
    pub fn builder<L, F>(academic_level: L, primary_field: F) -> ProfileBuilder
    where
        L: Into<AcademicLevel>,
        F: Into<String>,
    {
        ProfileBuilder::new(academic_level, primary_field)
    }

    pub fn academic_level(&self) -> &AcademicLevel {
        &self.academic_level
    }

    pub fn primary_field(&self) -> &str {
        &self.primary_field
    }

    /// Research interests in priority order.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Preferred methods in priority order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn regional_focus(&self) -> &str {
        &self.regional_focus
    }

    /// Seed authors, deduplicated case-insensitively.
    pub fn seed_authors(&self) -> &[String] {
        &self.seed_authors
    }

    /// 0 = qualitative, 1 = quantitative.
    pub fn methodological_lean(&self) -> f64 {
        self.methodological_lean
    }

    /// Plain-language description of the methodological lean.
    pub fn method_description(&self) -> &'static str {
        if self.methodological_lean > 0.6 {
            "quantitative causal inference"
        } else if self.methodological_lean < 0.4 {
            "qualitative and theoretical"
        } else {
            "mixed methods"
        }
    }

    /// Render the profile as a short natural-language summary.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "Research Profile:".to_string(),
            format!("- Career Stage: {}", self.academic_level),
            format!("- Primary Field: {}", self.primary_field),
            format!("- Research Interests: {}", self.interests.join(", ")),
            format!("- Preferred Methods: {}", self.methods.join(", ")),
            format!("- Methodological Approach: {}", self.method_description()),
            format!("- Regional Focus: {}", self.regional_focus),
        ];
        if !self.seed_authors.is_empty() {
            lines.push(format!("- Follows work by: {}", self.seed_authors.join(", ")));
        }
        lines.join("\n")
    }
}

/// Builder for [`UserProfile`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    academic_level: AcademicLevel,
    primary_field: String,
    interests: Vec<String>,
    methods: Vec<String>,
    regional_focus: String,
    seed_authors: Vec<String>,
    methodological_lean: f64,
}

impl ProfileBuilder {
    pub fn new<L, F>(academic_level: L, primary_field: F) -> Self
    where
        L: Into<AcademicLevel>,
        F: Into<String>,
    {
        Self {
            academic_level: academic_level.into(),
            primary_field: primary_field.into(),
            interests: Vec::new(),
            methods: Vec::new(),
            regional_focus: DEFAULT_REGION.to_string(),
            seed_authors: Vec::new(),
            methodological_lean: DEFAULT_LEAN,
        }
    }

    pub fn interest<S: Into<String>>(mut self, interest: S) -> Self {
        self.interests.push(interest.into());
        self
    }

    pub fn interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.methods.push(method.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn regional_focus<S: Into<String>>(mut self, region: S) -> Self {
        self.regional_focus = region.into();
        self
    }

    pub fn seed_author<S: Into<String>>(mut self, author: S) -> Self {
        self.seed_authors.push(author.into());
        self
    }

    pub fn seed_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_authors.extend(authors.into_iter().map(Into::into));
        self
    }

    pub fn methodological_lean(mut self, lean: f64) -> Self {
        self.methodological_lean = lean;
        self
    }

    /// Validate and build the profile.
    ///
    /// Blank entries are dropped and duplicates removed (first occurrence
    /// wins, compared case- and punctuation-insensitively) before the caps are
    /// checked.
    pub fn build(self) -> Result<UserProfile, ProfileError> {
        let interests = dedupe(self.interests);
        if interests.len() > MAX_INTERESTS {
            return Err(ProfileError::TooManyInterests {
                count: interests.len(),
                max: MAX_INTERESTS,
            });
        }

        let methods = dedupe(self.methods);
        if methods.len() > MAX_METHODS {
            return Err(ProfileError::TooManyMethods {
                count: methods.len(),
                max: MAX_METHODS,
            });
        }

        if !self.methodological_lean.is_finite() || !(0.0..=1.0).contains(&self.methodological_lean)
        {
            return Err(ProfileError::InvalidLean(self.methodological_lean));
        }

        let regional_focus = if self.regional_focus.trim().is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            self.regional_focus.trim().to_string()
        };

        Ok(UserProfile {
            academic_level: self.academic_level,
            primary_field: self.primary_field.trim().to_string(),
            interests,
            methods,
            regional_focus,
            seed_authors: dedupe(self.seed_authors),
            methodological_lean: self.methodological_lean,
        })
    }
}

fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| {
            let key = normalize_phrase(item);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Serialized profile shape, validated into a [`UserProfile`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub academic_level: AcademicLevel,
    pub primary_field: String,
    #[serde(default, alias = "secondary_interests")]
    pub interests: Vec<String>,
    #[serde(default, alias = "preferred_methodology")]
    pub methods: Vec<String>,
    #[serde(default = "default_region")]
    pub regional_focus: String,
    #[serde(default)]
    pub seed_authors: Vec<String>,
    #[serde(default = "default_lean")]
    pub methodological_lean: f64,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_lean() -> f64 {
    DEFAULT_LEAN
}

impl TryFrom<ProfileDocument> for UserProfile {
    type Error = ProfileError;

    fn try_from(doc: ProfileDocument) -> Result<Self, Self::Error> {
        UserProfile::builder(doc.academic_level, doc.primary_field)
            .interests(doc.interests)
            .methods(doc.methods)
            .regional_focus(doc.regional_focus)
            .seed_authors(doc.seed_authors)
            .methodological_lean(doc.methodological_lean)
            .build()
    }
}
