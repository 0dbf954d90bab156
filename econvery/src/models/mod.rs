//! Domain models for profiles, papers, and match results

pub mod paper;
pub mod profile;
pub mod result;

pub use paper::{Concept, JournalTier, PaperRecord, reconstruct_abstract};
pub use profile::{
    AcademicLevel, MAX_INTERESTS, MAX_METHODS, ProfileBuilder, ProfileDocument, ProfileError,
    UserProfile,
};
pub use result::{MatchResult, RelevanceLevel, ScoredPaper};
